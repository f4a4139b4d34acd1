// src/core/assembler.rs
use crate::core::segmenter::Segmenter;
use crate::core::table::{PhonemeTable, INHERENT_VOWEL};
use crate::core::types::{Nucleus, Phoneme, SyllableUnit, VowelMark, Word};
use crate::error::Result;

/// Consonants whose doubling is written as a length mark instead of
/// a stop-release geminate.
const LONG_CONSONANTS: &[&str] = &["ŋ", "ɳ", "n̪", "m", "ɭ", "l"];

const LENGTH_MARK: &str = "ː";

/// Turns syllable units into phonemes.
pub struct PhonemeAssembler<'t> {
    table: &'t PhonemeTable,
}

impl<'t> PhonemeAssembler<'t> {
    pub fn new(table: &'t PhonemeTable) -> Self {
        Self { table }
    }

    /// Segments and assembles one word. Non-script input gives an empty word.
    pub fn assemble(&self, word: &str) -> Result<Word> {
        let units = Segmenter::new(self.table).segment(word)?;
        if units.is_empty() {
            return Ok(Word::empty(word));
        }

        let mut phonemes = Vec::with_capacity(units.len() * 2);
        for unit in &units {
            self.push_unit(unit, &mut phonemes)?;
        }
        Ok(Word::new(word, units, phonemes))
    }

    /// Appends the phonemes of a single unit, postfix last.
    pub fn push_unit(&self, unit: &SyllableUnit, out: &mut Vec<Phoneme>) -> Result<()> {
        match &unit.nucleus {
            Nucleus::Vowel(v) => out.push(self.table.lookup(*v)?),
            Nucleus::Consonant {
                cluster,
                consonant,
                mark,
            } => {
                self.push_consonants(cluster, *consonant, out)?;
                match mark {
                    None => out.push(Phoneme::new(INHERENT_VOWEL.0, INHERENT_VOWEL.1)),
                    Some(VowelMark::Sign(sign)) => out.push(self.table.lookup(*sign)?),
                    Some(VowelMark::Suppressed) => {}
                }
            }
        }
        if let Some(postfix) = unit.postfix {
            out.push(self.table.lookup(postfix)?);
        }
        Ok(())
    }

    fn push_consonants(&self, cluster: &[char], consonant: char, out: &mut Vec<Phoneme>) -> Result<()> {
        match cluster.split_last() {
            // A halanted copy of the nucleus right before it: one geminate.
            Some((&last, rest)) if last == consonant => {
                for &c in rest {
                    out.push(self.table.lookup(c)?);
                }
                out.push(geminate(self.table.lookup(consonant)?));
            }
            _ => {
                for &c in cluster {
                    out.push(self.table.lookup(c)?);
                }
                out.push(self.table.lookup(consonant)?);
            }
        }
        Ok(())
    }
}

fn geminate(single: Phoneme) -> Phoneme {
    let iso = format!("{0}{0}", single.iso);
    if LONG_CONSONANTS.contains(&single.ipa.as_str()) {
        Phoneme::new(format!("{}{}", single.ipa, LENGTH_MARK), iso)
    } else {
        Phoneme::new(format!("{0}.{0}", single.ipa), iso)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(word: &str) -> Word {
        PhonemeAssembler::new(PhonemeTable::kannada().unwrap())
            .assemble(word)
            .unwrap()
    }

    #[test]
    fn bare_consonant_takes_the_inherent_vowel() {
        let w = assemble("\u{0c95}");
        assert_eq!(w.ipa, vec!["k", "ɐ"]);
        assert_eq!(w.iso, "ka");
    }

    #[test]
    fn vowel_sign_replaces_inherent_vowel() {
        // ಕಿ
        let w = assemble("\u{0c95}\u{0cbf}");
        assert_eq!(w.ipa, vec!["k", "i"]);
        assert_eq!(w.iso, "ki");
    }

    #[test]
    fn virama_leaves_the_consonant_bare() {
        // ಕ್
        let w = assemble("\u{0c95}\u{0ccd}");
        assert_eq!(w.ipa, vec!["k"]);
        assert_eq!(w.iso, "k");
    }

    #[test]
    fn doubled_stop_uses_geminate_notation() {
        // ಅಕ್ಕ
        let w = assemble("\u{0c85}\u{0c95}\u{0ccd}\u{0c95}");
        assert_eq!(w.ipa, vec!["ɐ", "k.k", "ɐ"]);
        assert_eq!(w.iso, "akka");
    }

    #[test]
    fn doubled_nasal_uses_length_mark() {
        // ಅಣ್ಣ
        let w = assemble("\u{0c85}\u{0ca3}\u{0ccd}\u{0ca3}");
        assert_eq!(w.ipa, vec!["ɐ", "ɳː", "ɐ"]);
        assert_eq!(w.iso, "aṇṇa");

        // ಅಮ್ಮ
        let w = assemble("\u{0c85}\u{0cae}\u{0ccd}\u{0cae}");
        assert_eq!(w.ipa, vec!["ɐ", "mː", "ɐ"]);
    }

    #[test]
    fn dental_nasal_is_long_not_geminate() {
        // ಅನ್ನ
        let w = assemble("\u{0c85}\u{0ca8}\u{0ccd}\u{0ca8}");
        assert_eq!(w.ipa, vec!["ɐ", "n̪ː", "ɐ"]);
        assert_eq!(w.iso, "anna");
    }

    #[test]
    fn mixed_cluster_emits_every_member() {
        // ಬಡ್ತಿ
        let w = assemble("\u{0cac}\u{0ca1}\u{0ccd}\u{0ca4}\u{0cbf}");
        assert_eq!(w.ipa, vec!["b", "ɐ", "ɖ", "t̪", "i"]);
        assert_eq!(w.iso, "baḍti");
    }

    #[test]
    fn geminate_after_a_leading_cluster_member() {
        // ಸ್ತ್ತ: s, then t doubled
        let w = assemble("\u{0cb8}\u{0ccd}\u{0ca4}\u{0ccd}\u{0ca4}");
        assert_eq!(w.ipa, vec!["s", "t̪.t̪", "ɐ"]);
        assert_eq!(w.iso, "stta");
    }

    #[test]
    fn postfix_comes_last() {
        // ಅಂ / ದುಃ
        let w = assemble("\u{0c85}\u{0c82}");
        assert_eq!(w.ipa, vec!["ɐ", "m"]);
        assert_eq!(w.iso, "aṃ");

        let w = assemble("\u{0ca6}\u{0cc1}\u{0c83}");
        assert_eq!(w.ipa, vec!["d̪", "u", "h"]);
        assert_eq!(w.iso, "duḥ");
    }

    #[test]
    fn non_script_words_are_empty() {
        let w = assemble("hello");
        assert!(!w.is_analyzable());
        assert_eq!(w.iso, "");
        assert!(w.units.is_empty());
    }
}
