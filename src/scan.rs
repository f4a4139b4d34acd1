// File: src/scan.rs
use crate::core::types::Word;
use crate::pairs::contrast::ContrastPair;
use crate::pairs::finder::{DiscardRegistry, PairFinder, PairVerdict, Witness};
use serde::{Deserialize, Serialize};

/// A word as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedWord {
    pub word: String,
    pub iso: String,
}

impl From<&Word> for PairedWord {
    fn from(w: &Word) -> Self {
        Self {
            word: w.word.clone(),
            iso: w.iso.clone(),
        }
    }
}

/// One accepted minimal pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundPair {
    pub contrast: ContrastPair,
    pub left: PairedWord,
    pub right: PairedWord,
}

impl FoundPair {
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.contrast, self.left.word, self.right.word, self.left.iso, self.right.iso
        )
    }
}

/// Everything a full pairwise scan produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub pairs: Vec<FoundPair>,
    pub discards: DiscardRegistry,
    pub comparisons: u64,
}

impl ScanReport {
    pub fn total_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Accepted pairs, one TSV line each, then the running total.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for pair in &self.pairs {
            out.push_str(&pair.to_tsv());
            out.push('\n');
        }
        out.push_str(&format!("Found a total of {} pairs\n", self.total_pairs()));
        out
    }

    /// Folds in the report of another partition of the same word list.
    pub fn merge(&mut self, other: ScanReport) {
        self.pairs.extend(other.pairs);
        self.discards.merge(other.discards);
        self.comparisons += other.comparisons;
    }
}

/// Compares every unordered pair of words.
pub struct PairScan<'f> {
    finder: &'f PairFinder,
}

impl<'f> PairScan<'f> {
    pub fn new(finder: &'f PairFinder) -> Self {
        Self { finder }
    }

    /// Sorts by transliteration, drops non-analyzable words and scans all pairs.
    pub fn run(&self, mut words: Vec<Word>) -> ScanReport {
        words.retain(Word::is_analyzable);
        words.sort_by(|a, b| a.iso.cmp(&b.iso));
        self.scan_rows(&words, 0..words.len())
    }

    /// Scans the pairs (i, j) with i in `rows` and j > i.
    ///
    /// Disjoint row ranges can be scanned independently and merged.
    pub fn scan_rows(&self, words: &[Word], rows: std::ops::Range<usize>) -> ScanReport {
        let mut report = ScanReport::default();
        for i in rows {
            let left = &words[i];
            for right in &words[i + 1..] {
                report.comparisons += 1;
                match self.finder.judge(&left.ipa, &right.ipa) {
                    PairVerdict::Accepted(contrast) => report.pairs.push(FoundPair {
                        contrast,
                        left: left.into(),
                        right: right.into(),
                    }),
                    PairVerdict::Rejected(contrast) => {
                        if report.discards.record(contrast, Some(Witness::of(left, right))) {
                            log::debug!("new discarded contrast from {} / {}", left.iso, right.iso);
                        }
                    }
                    PairVerdict::NotMinimal => {}
                }
            }
        }
        log::info!(
            "scan finished: {} pairs, {} discarded contrasts, {} comparisons",
            report.pairs.len(),
            report.discards.len(),
            report.comparisons
        );
        report
    }
}
