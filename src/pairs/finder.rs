// File: src/pairs/finder.rs
use crate::core::types::Word;
use crate::pairs::contrast::{ContrastPair, ContrastSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of comparing two phoneme sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairVerdict {
    /// Exactly one position differs and the contrast is on the allow-list.
    Accepted(ContrastPair),
    /// The first differing position holds a contrast not on the allow-list.
    /// Later positions are not looked at.
    Rejected(ContrastPair),
    /// Different lengths or single phonemes. Also identical sequences, and
    /// an accepted first difference followed by a second one.
    NotMinimal,
}

/// The two words in which a rejected contrast was first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub left_word: String,
    pub right_word: String,
    pub left_iso: String,
    pub right_iso: String,
}

impl Witness {
    pub fn of(left: &Word, right: &Word) -> Self {
        Self {
            left_word: left.word.clone(),
            right_word: right.word.clone(),
            left_iso: left.iso.clone(),
            right_iso: right.iso.clone(),
        }
    }
}

/// First-difference contrasts that were not on the allow-list.
///
/// A set: each contrast is kept once, with the first words it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardRegistry {
    discarded: BTreeMap<ContrastPair, Option<Witness>>,
}

impl DiscardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a contrast. Returns false if it was already present.
    pub fn record(&mut self, pair: ContrastPair, witness: Option<Witness>) -> bool {
        use std::collections::btree_map::Entry;
        match self.discarded.entry(pair) {
            Entry::Vacant(slot) => {
                slot.insert(witness);
                true
            }
            Entry::Occupied(mut slot) => {
                if slot.get().is_none() && witness.is_some() {
                    slot.insert(witness);
                }
                false
            }
        }
    }

    /// Folds another registry into this one; witnesses already here win.
    pub fn merge(&mut self, other: DiscardRegistry) {
        for (pair, witness) in other.discarded {
            self.record(pair, witness);
        }
    }

    pub fn contains(&self, pair: &ContrastPair) -> bool {
        self.discarded.contains_key(pair)
    }

    pub fn len(&self) -> usize {
        self.discarded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discarded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContrastPair, Option<&Witness>)> {
        self.discarded.iter().map(|(p, w)| (p, w.as_ref()))
    }

    /// Tab-separated dump for curators: symbols, words, transliterations.
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        for (pair, witness) in self.iter() {
            match witness {
                Some(w) => out.push_str(&format!(
                    "{}\t{}\t{}\t{}\t{}\n",
                    pair, w.left_word, w.right_word, w.left_iso, w.right_iso
                )),
                None => out.push_str(&format!("{}\n", pair)),
            }
        }
        out
    }
}

/// Decides whether two phoneme sequences form an accepted minimal pair.
#[derive(Debug, Clone, Default)]
pub struct PairFinder {
    contrasts: ContrastSet,
}

impl PairFinder {
    pub fn new(contrasts: ContrastSet) -> Self {
        Self { contrasts }
    }

    pub fn contrasts(&self) -> &ContrastSet {
        &self.contrasts
    }

    /// The only position at which two sequences differ, if there is exactly one.
    /// Used for highlighting; `judge` walks the sequences itself.
    ///
    /// Sequences of different length or of length one never qualify.
    pub fn difference_position<S: AsRef<str>>(a: &[S], b: &[S]) -> Option<usize> {
        if a.len() != b.len() || a.len() == 1 {
            return None;
        }
        let mut found = None;
        for (i, (left, right)) in a.iter().zip(b).enumerate() {
            if left.as_ref() != right.as_ref() {
                if found.is_some() {
                    return None;
                }
                found = Some(i);
            }
        }
        found
    }

    /// Walks both sequences and judges the first difference as soon as it
    /// is found. A rejected first difference ends the walk; an accepted one
    /// still loses to any later difference.
    pub fn judge<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> PairVerdict {
        if a.len() != b.len() || a.len() == 1 {
            return PairVerdict::NotMinimal;
        }
        let mut accepted = None;
        for (left, right) in a.iter().zip(b) {
            let (left, right) = (left.as_ref(), right.as_ref());
            if left == right {
                continue;
            }
            if accepted.is_some() {
                return PairVerdict::NotMinimal;
            }
            let pair = ContrastPair::new(left, right);
            if !self.contrasts.admits(left, right) {
                return PairVerdict::Rejected(pair);
            }
            accepted = Some(pair);
        }
        accepted.map_or(PairVerdict::NotMinimal, PairVerdict::Accepted)
    }

    /// Returns the accepted contrast, recording rejected ones in `discards`.
    pub fn find_minimal_pair<S: AsRef<str>>(
        &self,
        a: &[S],
        b: &[S],
        discards: &mut DiscardRegistry,
    ) -> Option<ContrastPair> {
        match self.judge(a, b) {
            PairVerdict::Accepted(pair) => Some(pair),
            PairVerdict::Rejected(pair) => {
                log::debug!("discarding contrast {:?}", pair.as_tuple());
                discards.record(pair, None);
                None
            }
            PairVerdict::NotMinimal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(a: &[&str], b: &[&str], discards: &mut DiscardRegistry) -> Option<(String, String)> {
        PairFinder::default()
            .find_minimal_pair(a, b, discards)
            .map(|p| (p.left, p.right))
    }

    #[test]
    fn different_lengths_are_not_pairs() {
        let mut d = DiscardRegistry::new();
        assert_eq!(find(&["k", "ɐ", "t̪"], &["g", "ɐ", "t̪", "u"], &mut d), None);
        assert!(d.is_empty());
    }

    #[test]
    fn single_phoneme_words_are_not_pairs() {
        let mut d = DiscardRegistry::new();
        assert_eq!(find(&["b"], &["p"], &mut d), None);
        assert!(d.is_empty());
    }

    #[test]
    fn two_differences_are_not_pairs() {
        let mut d = DiscardRegistry::new();
        // k/g is listed, so the second difference t̪/d̪ disqualifies the pair
        assert_eq!(find(&["k", "ɐ", "t̪"], &["g", "ɐ", "d̪"], &mut d), None);
        assert!(d.is_empty());
        assert_eq!(
            PairFinder::default().judge(&["k", "ɐ", "t̪"], &["g", "ɐ", "d̪"]),
            PairVerdict::NotMinimal
        );
    }

    #[test]
    fn rejected_first_difference_is_discarded_before_later_ones() {
        let mut d = DiscardRegistry::new();
        assert_eq!(find(&["s", "ɐ", "t̪"], &["h", "ɐ", "d̪"], &mut d), None);
        assert_eq!(d.len(), 1);
        assert!(d.contains(&ContrastPair::new("h", "s")));
        // only the first difference is judged
        assert!(!d.contains(&ContrastPair::new("d̪", "t̪")));
        assert_eq!(
            PairFinder::default().judge(&["s", "ɐ", "t̪"], &["h", "ɐ", "d̪"]),
            PairVerdict::Rejected(ContrastPair::new("h", "s"))
        );
    }

    #[test]
    fn identical_sequences_are_not_pairs() {
        let mut d = DiscardRegistry::new();
        assert_eq!(find(&["b", "ɐ"], &["b", "ɐ"], &mut d), None);
        assert!(d.is_empty());
    }

    #[test]
    fn allowed_contrast_is_returned_sorted() {
        let mut d = DiscardRegistry::new();
        let expected = Some(("b".to_string(), "p".to_string()));
        assert_eq!(find(&["b", "ɐ"], &["p", "ɐ"], &mut d), expected);
        assert_eq!(find(&["p", "ɐ"], &["b", "ɐ"], &mut d), expected);
        assert!(d.is_empty());
    }

    #[test]
    fn rejected_contrast_is_discarded_once() {
        let mut d = DiscardRegistry::new();
        assert_eq!(find(&["s", "ɐ"], &["h", "ɐ"], &mut d), None);
        assert_eq!(find(&["ɐ", "h"], &["ɐ", "s"], &mut d), None);
        assert_eq!(find(&["s", "i", "r"], &["h", "i", "r"], &mut d), None);
        assert_eq!(d.len(), 1);
        assert!(d.contains(&ContrastPair::new("h", "s")));
    }

    #[test]
    fn geminate_matches_base_contrast() {
        let mut d = DiscardRegistry::new();
        // ("k", "p") turns "k.k" into "p.p"
        assert_eq!(
            find(&["ɐ", "k.k", "ɐ"], &["ɐ", "p.p", "ɐ"], &mut d),
            Some(("k.k".to_string(), "p.p".to_string()))
        );
    }

    #[test]
    fn difference_position_for_highlighting() {
        assert_eq!(PairFinder::difference_position(&["b", "ɐ"], &["p", "ɐ"]), Some(0));
        assert_eq!(PairFinder::difference_position(&["ɐ", "b"], &["ɐ", "p"]), Some(1));
        assert_eq!(PairFinder::difference_position(&["ɐ", "b"], &["ɐ", "b"]), None);
    }

    #[test]
    fn merge_keeps_first_witness() {
        let pair = ContrastPair::new("h", "s");
        let first = Witness {
            left_word: "a".into(),
            right_word: "b".into(),
            left_iso: "a".into(),
            right_iso: "b".into(),
        };
        let second = Witness {
            left_word: "c".into(),
            ..first.clone()
        };

        let mut left = DiscardRegistry::new();
        left.record(pair.clone(), Some(first.clone()));
        let mut right = DiscardRegistry::new();
        right.record(pair.clone(), Some(second));
        right.record(ContrastPair::new("r", "l"), None);

        left.merge(right);
        assert_eq!(left.len(), 2);
        let witness = left.iter().find(|(p, _)| **p == pair).and_then(|(_, w)| w);
        assert_eq!(witness, Some(&first));
    }

    #[test]
    fn tsv_dump() {
        let mut d = DiscardRegistry::new();
        d.record(
            ContrastPair::new("s", "h"),
            Some(Witness {
                left_word: "L".into(),
                right_word: "R".into(),
                left_iso: "sa".into(),
                right_iso: "ha".into(),
            }),
        );
        assert_eq!(d.to_tsv(), "h\ts\tL\tR\tsa\tha\n");
    }
}
