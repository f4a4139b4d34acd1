// src/core/table.rs
use crate::core::types::Phoneme;
use crate::error::{PhonologyError, Result};
use once_cell::sync::OnceCell;
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

pub const VIRAMA: char = '\u{0ccd}';
pub const ANUSWARA: char = '\u{0c82}';
pub const VISARGA: char = '\u{0c83}';

/// Every character of a Kannada word must fall in this range.
pub const SCRIPT_RANGE: RangeInclusive<char> = '\u{0c80}'..='\u{0cf3}';

/// The vowel every bare consonant carries.
pub const INHERENT_VOWEL: (&str, &str) = ("ɐ", "a");

/// Role of a code point inside a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    PureVowel,
    Consonant,
    VowelSign,
    Virama,
    Postfix,
    /// Inside the script range but not part of any syllable pattern
    /// (digits, avagraha, unassigned slots, ...).
    Other,
}

/// Classifies a Kannada code point. Unassigned slots fall to `Other`.
pub fn classify(c: char) -> CharClass {
    match c {
        '\u{0c8d}' | '\u{0c91}' | '\u{0ca9}' | '\u{0cb4}' | '\u{0cc5}' | '\u{0cc9}' => {
            CharClass::Other
        }
        '\u{0c85}'..='\u{0c94}' | '\u{0ce0}' | '\u{0ce1}' => CharClass::PureVowel,
        '\u{0c95}'..='\u{0cb9}' | '\u{0cde}' => CharClass::Consonant,
        '\u{0cbe}'..='\u{0ccc}' => CharClass::VowelSign,
        VIRAMA => CharClass::Virama,
        ANUSWARA | VISARGA => CharClass::Postfix,
        _ => CharClass::Other,
    }
}

pub fn in_script(c: char) -> bool {
    SCRIPT_RANGE.contains(&c)
}

/// Code point -> (IPA, ISO 15919).
const KANNADA_PHONEMES: &[(char, &str, &str)] = &[
    // pure vowels
    ('\u{0c85}', "ɐ", "a"),
    ('\u{0c86}', "ɐː", "ā"),
    ('\u{0c87}', "i", "i"),
    ('\u{0c88}', "iː", "ī"),
    ('\u{0c89}', "u", "u"),
    ('\u{0c8a}', "uː", "ū"),
    ('\u{0c8b}', "ru", "r̥"),
    ('\u{0c8e}', "e", "e"),
    ('\u{0c8f}', "eː", "ē"),
    ('\u{0c90}', "ɐi̯", "ai"),
    ('\u{0c92}', "o", "o"),
    ('\u{0c93}', "oː", "ō"),
    ('\u{0c94}', "ɐu̯", "au"),
    // consonants
    ('\u{0c95}', "k", "k"),
    ('\u{0c96}', "kʰ", "kh"),
    ('\u{0c97}', "g", "g"),
    ('\u{0c98}', "gʰ", "gh"),
    ('\u{0c99}', "ŋ", "ṅ"),
    ('\u{0c9a}', "t͡ʃ", "c"),
    ('\u{0c9b}', "t͡ʃʰ", "ch"),
    ('\u{0c9c}', "d͡ʒ", "j"),
    ('\u{0c9d}', "d͡ʒʱ", "jh"),
    ('\u{0c9e}', "ɲ", "ñ"),
    ('\u{0c9f}', "ʈ", "ṭ"),
    ('\u{0ca0}', "ʈʰ", "ṭh"),
    ('\u{0ca1}', "ɖ", "ḍ"),
    ('\u{0ca2}', "ɖʱ", "ḍh"),
    ('\u{0ca3}', "ɳ", "ṇ"),
    ('\u{0ca4}', "t̪", "t"),
    ('\u{0ca5}', "t̪ʰ", "th"),
    ('\u{0ca6}', "d̪", "d"),
    ('\u{0ca7}', "d̪ʱ", "dh"),
    ('\u{0ca8}', "n̪", "n"),
    ('\u{0caa}', "p", "p"),
    ('\u{0cab}', "pʰ", "ph"),
    ('\u{0cac}', "b", "b"),
    ('\u{0cad}', "bʱ", "bh"),
    ('\u{0cae}', "m", "m"),
    ('\u{0caf}', "j", "y"),
    ('\u{0cb0}', "r", "r"),
    ('\u{0cb2}', "l", "l"),
    ('\u{0cb3}', "ɭ", "ḷ"),
    ('\u{0cb5}', "ʋ", "v"),
    ('\u{0cb6}', "ɕ", "ś"),
    ('\u{0cb7}', "ʂ", "ṣ"),
    ('\u{0cb8}', "s", "s"),
    ('\u{0cb9}', "h", "h"),
    // vowel signs
    ('\u{0cbe}', "ɐː", "ā"),
    ('\u{0cbf}', "i", "i"),
    ('\u{0cc0}', "iː", "ī"),
    ('\u{0cc1}', "u", "u"),
    ('\u{0cc2}', "uː", "ū"),
    ('\u{0cc3}', "ru", "r̥"),
    ('\u{0cc6}', "e", "e"),
    ('\u{0cc7}', "eː", "ē"),
    ('\u{0cc8}', "ɐi̯", "ai"),
    ('\u{0cca}', "o", "o"),
    ('\u{0ccb}', "oː", "ō"),
    ('\u{0ccc}', "ɐu̯", "au"),
    // postfix marks
    (ANUSWARA, "m", "ṃ"),
    (VISARGA, "h", "ḥ"),
];

/// Letters no longer in use. Input is expected to be free of them.
const KANNADA_OBSOLETE: &[char] = &[
    '\u{0c8c}', '\u{0ce0}', '\u{0ce1}', '\u{0cb1}', '\u{0cde}', '\u{0cc4}',
];

/// Immutable code point to phoneme mapping.
#[derive(Debug, Clone)]
pub struct PhonemeTable {
    entries: HashMap<char, (&'static str, &'static str)>,
    obsolete: HashSet<char>,
}

static KANNADA_TABLE: OnceCell<PhonemeTable> = OnceCell::new();

impl PhonemeTable {
    /// Builds a table and checks that it covers every classified code point.
    pub fn new(entries: &[(char, &'static str, &'static str)], obsolete: &[char]) -> Result<Self> {
        let table = Self {
            entries: entries
                .iter()
                .map(|&(c, ipa, iso)| (c, (ipa, iso)))
                .collect(),
            obsolete: obsolete.iter().copied().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// The process-wide Kannada table, validated on first use.
    pub fn kannada() -> Result<&'static PhonemeTable> {
        KANNADA_TABLE.get_or_try_init(|| {
            let table = Self::new(KANNADA_PHONEMES, KANNADA_OBSOLETE)?;
            log::debug!(
                "phoneme table ready: {} entries, {} obsolete",
                table.entries.len(),
                table.obsolete.len()
            );
            Ok(table)
        })
    }

    fn validate(&self) -> Result<()> {
        if let Some(&c) = self.obsolete.iter().find(|&&c| self.entries.contains_key(&c)) {
            return Err(PhonologyError::ObsoleteInTable(c));
        }
        for c in SCRIPT_RANGE {
            let needs_entry = matches!(
                classify(c),
                CharClass::PureVowel | CharClass::Consonant | CharClass::VowelSign | CharClass::Postfix
            );
            if needs_entry && !self.entries.contains_key(&c) && !self.obsolete.contains(&c) {
                return Err(PhonologyError::IncompleteTable(c));
            }
        }
        Ok(())
    }

    pub fn lookup(&self, c: char) -> Result<Phoneme> {
        self.entries
            .get(&c)
            .map(|&(ipa, iso)| Phoneme::new(ipa, iso))
            .ok_or(PhonologyError::UnknownCodepoint(c))
    }

    pub fn is_obsolete(&self, c: char) -> bool {
        self.obsolete.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kannada_table_is_complete() {
        let table = PhonemeTable::kannada().unwrap();
        assert_eq!(table.len(), KANNADA_PHONEMES.len());
        assert_eq!(table.lookup('\u{0c95}').unwrap(), Phoneme::new("k", "k"));
        assert_eq!(table.lookup('\u{0c85}').unwrap(), Phoneme::new("ɐ", "a"));
        assert!(table.is_obsolete('\u{0cde}'));
        assert!(!table.is_obsolete('\u{0c95}'));
    }

    #[test]
    fn lookup_fails_for_unmapped_codepoints() {
        let table = PhonemeTable::kannada().unwrap();
        assert!(matches!(
            table.lookup(VIRAMA),
            Err(PhonologyError::UnknownCodepoint(VIRAMA))
        ));
        assert!(matches!(
            table.lookup('a'),
            Err(PhonologyError::UnknownCodepoint('a'))
        ));
    }

    #[test]
    fn gaps_are_rejected_at_construction() {
        let without_ka: Vec<_> = KANNADA_PHONEMES
            .iter()
            .copied()
            .filter(|&(c, _, _)| c != '\u{0c95}')
            .collect();
        let err = PhonemeTable::new(&without_ka, KANNADA_OBSOLETE).unwrap_err();
        assert!(matches!(err, PhonologyError::IncompleteTable('\u{0c95}')));
    }

    #[test]
    fn obsolete_entries_are_rejected() {
        let mut entries = KANNADA_PHONEMES.to_vec();
        entries.push(('\u{0cde}', "f", "f"));
        let err = PhonemeTable::new(&entries, KANNADA_OBSOLETE).unwrap_err();
        assert!(matches!(err, PhonologyError::ObsoleteInTable('\u{0cde}')));
    }

    #[test]
    fn classes() {
        assert_eq!(classify('\u{0c85}'), CharClass::PureVowel);
        assert_eq!(classify('\u{0ce1}'), CharClass::PureVowel);
        assert_eq!(classify('\u{0cb9}'), CharClass::Consonant);
        assert_eq!(classify('\u{0cbe}'), CharClass::VowelSign);
        assert_eq!(classify(VIRAMA), CharClass::Virama);
        assert_eq!(classify(ANUSWARA), CharClass::Postfix);
        assert_eq!(classify('\u{0ca9}'), CharClass::Other);
        assert_eq!(classify('\u{0ce6}'), CharClass::Other);
        assert!(in_script('\u{0cf3}'));
        assert!(!in_script('k'));
    }
}
