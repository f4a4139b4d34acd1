// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One emitted sound: its IPA symbol and its ISO transliteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    pub ipa: String,
    pub iso: String,
}

impl Phoneme {
    pub fn new(ipa: impl Into<String>, iso: impl Into<String>) -> Self {
        Self {
            ipa: ipa.into(),
            iso: iso.into(),
        }
    }
}

/// What follows a nucleus consonant inside its syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VowelMark {
    /// A dependent vowel sign replacing the inherent vowel.
    Sign(char),
    /// The virama: the consonant is pronounced bare.
    Suppressed,
}

/// The core of a syllable: either an independent vowel or a consonant
/// (optionally preceded by a halanted cluster).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nucleus {
    Vowel(char),
    Consonant {
        /// Consonants written with a virama before the nucleus, in order.
        cluster: Vec<char>,
        consonant: char,
        mark: Option<VowelMark>,
    },
}

/// One syllable produced by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableUnit {
    pub nucleus: Nucleus,
    /// Trailing anuswara or visarga.
    pub postfix: Option<char>,
}

impl SyllableUnit {
    pub fn pure_vowel(&self) -> Option<char> {
        match self.nucleus {
            Nucleus::Vowel(v) => Some(v),
            Nucleus::Consonant { .. } => None,
        }
    }

    pub fn consonant(&self) -> Option<char> {
        match self.nucleus {
            Nucleus::Consonant { consonant, .. } => Some(consonant),
            Nucleus::Vowel(_) => None,
        }
    }

    pub fn cluster(&self) -> &[char] {
        match &self.nucleus {
            Nucleus::Consonant { cluster, .. } => cluster,
            Nucleus::Vowel(_) => &[],
        }
    }

    pub fn vowel_sign(&self) -> Option<char> {
        match self.nucleus {
            Nucleus::Consonant {
                mark: Some(VowelMark::Sign(s)),
                ..
            } => Some(s),
            _ => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(
            self.nucleus,
            Nucleus::Consonant {
                mark: Some(VowelMark::Suppressed),
                ..
            }
        )
    }
}

/// A tokenized word. Built once by the assembler and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub units: Vec<SyllableUnit>,
    pub phonemes: Vec<Phoneme>,
    /// IPA symbols, one per phoneme.
    pub ipa: Vec<String>,
    /// Concatenated ISO transliteration.
    pub iso: String,
}

impl Word {
    pub(crate) fn new(word: &str, units: Vec<SyllableUnit>, phonemes: Vec<Phoneme>) -> Self {
        let ipa = phonemes.iter().map(|p| p.ipa.clone()).collect();
        let iso = phonemes.iter().map(|p| p.iso.as_str()).collect();
        Self {
            word: word.to_string(),
            units,
            phonemes,
            ipa,
            iso,
        }
    }

    /// The result for input that is not Kannada script.
    pub fn empty(word: &str) -> Self {
        Self::new(word, Vec::new(), Vec::new())
    }

    /// False for non-script input; such words never take part in pair discovery.
    pub fn is_analyzable(&self) -> bool {
        !self.ipa.is_empty()
    }

    /// The ISO symbol of every phoneme, in order.
    pub fn iso_symbols(&self) -> impl Iterator<Item = &str> {
        self.phonemes.iter().map(|p| p.iso.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_derives_ipa_and_iso() {
        let w = Word::new(
            "\u{0c95}",
            Vec::new(),
            vec![Phoneme::new("k", "k"), Phoneme::new("ɐ", "a")],
        );
        assert_eq!(w.ipa, vec!["k", "ɐ"]);
        assert_eq!(w.iso, "ka");
        assert!(w.is_analyzable());
        assert!(!Word::empty("hello").is_analyzable());
    }

    #[test]
    fn unit_accessors() {
        let unit = SyllableUnit {
            nucleus: Nucleus::Consonant {
                cluster: vec!['\u{0c95}'],
                consonant: '\u{0ca4}',
                mark: Some(VowelMark::Suppressed),
            },
            postfix: None,
        };
        assert_eq!(unit.pure_vowel(), None);
        assert_eq!(unit.consonant(), Some('\u{0ca4}'));
        assert_eq!(unit.cluster(), &['\u{0c95}']);
        assert!(unit.is_suppressed());
        assert_eq!(unit.vowel_sign(), None);
    }
}
