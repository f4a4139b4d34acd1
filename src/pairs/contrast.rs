// File: src/pairs/contrast.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered pair of IPA symbols, stored sorted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContrastPair {
    pub left: String,
    pub right: String,
}

impl ContrastPair {
    pub fn new(a: &str, b: &str) -> Self {
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.left, &self.right)
    }
}

impl fmt::Display for ContrastPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.left, self.right)
    }
}

/// Contrasts that learners find hard to hear, curated by hand.
const DIFFICULT_CONTRASTS: &[(&str, &str)] = &[
    ("b", "bʱ"),
    ("b", "p"),
    ("b", "ʋ"),
    ("bʱ", "p"),
    ("bʱ", "ʋ"),
    ("bː", "pː"),
    ("bː", "ɖ"),
    ("bː", "ʈː"),
    ("bː", "ʋ"),
    ("d̪", "d̪ʱ"),
    ("d̪", "d͡ʒ"),
    ("d̪", "p"),
    ("d̪", "t̪"),
    ("d̪", "t̪ʰ"),
    ("d̪", "t̪ː"),
    ("d̪", "t͡ʃː"),
    ("d̪", "ɖ"),
    ("d̪", "ʈ"),
    ("d̪", "ʈʰ"),
    ("d̪", "ʋ"),
    ("d̪ʱ", "d͡ʒ"),
    ("d̪ʱ", "gʰ"),
    ("d̪ʱ", "h"),
    ("d̪ʱ", "t̪ʰ"),
    ("d̪ʱ", "t͡ʃ"),
    ("d̪ː", "p"),
    ("d̪ː", "t̪ː"),
    ("d͡ʒ", "g"),
    ("d͡ʒ", "gʰ"),
    ("d͡ʒ", "j"),
    ("d͡ʒ", "t̪"),
    ("d͡ʒ", "t͡ʃ"),
    ("d͡ʒ", "ɖ"),
    ("d͡ʒː", "ɖ"),
    ("d͡ʒː", "ɖː"),
    ("e", "eː"),
    ("g", "j"),
    ("g", "k"),
    ("g", "kː"),
    ("i", "iː"),
    ("k", "p"),
    ("k", "t̪"),
    ("kʰ", "ʈː"),
    ("l", "lː"),
    ("l", "ɭ"),
    ("m", "n̪"),
    ("m", "ɳː"),
    ("mː", "n̪ː"),
    ("n̪", "ɳ"),
    ("n̪ː", "ɳ"),
    ("n̪ː", "ɳː"),
    ("o", "oː"),
    ("p", "t̪"),
    ("p", "t͡ʃ"),
    ("pː", "t̪ː"),
    ("pː", "ʈː"),
    ("r", "ɖ"),
    ("r", "ɖː"),
    ("r", "ɭ"),
    ("r", "ʈ"),
    ("r", "ʈː"),
    ("t̪", "t̪ʰ"),
    ("t̪", "t͡ʃ"),
    ("t̪", "ɕ"),
    ("t̪", "ʈ"),
    ("t̪", "ʈʰ"),
    ("t̪", "ʈː"),
    ("t̪ː", "ʈː"),
    ("u", "uː"),
    ("ɐ", "ɐː"),
    ("ʈ", "ʈʰ"),
    ("ʈ", "ʈː"),
    ("ʈʰ", "ʈː"),
];

/// The allow-list of contrasts eligible to form a minimal pair.
#[derive(Debug, Clone)]
pub struct ContrastSet {
    contrasts: Vec<(String, String)>,
}

impl Default for ContrastSet {
    fn default() -> Self {
        Self::new(DIFFICULT_CONTRASTS.iter().copied())
    }
}

impl ContrastSet {
    pub fn new<'a>(contrasts: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            contrasts: contrasts
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    /// True when some contrast turns `left` into `right` by substitution.
    ///
    /// Each contrast (c1, c2) is tried as c1 -> c2 and c2 -> c1 over the
    /// whole of `left`, so compound symbols such as geminates match their
    /// base contrast.
    pub fn admits(&self, left: &str, right: &str) -> bool {
        self.contrasts.iter().any(|(c1, c2)| {
            left.replace(c1.as_str(), c2) == right || left.replace(c2.as_str(), c1) == right
        })
    }

    pub fn len(&self) -> usize {
        self.contrasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contrasts.is_empty()
    }
}
