// src/core/engine.rs
use crate::core::assembler::PhonemeAssembler;
use crate::core::table::PhonemeTable;
use crate::core::types::Word;
use crate::error::Result;
use crate::pairs::contrast::{ContrastPair, ContrastSet};
use crate::pairs::finder::{DiscardRegistry, PairFinder};
use crate::reference::{match_quality, MatchQuality, ReferenceEntry};
use crate::scan::{PairScan, ScanReport};

/// Result of tokenizing a reference corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusOutcome {
    /// Words whose transliteration matched the reference exactly. Only these
    /// take part in pair discovery, which keeps anuswara guesses out.
    pub words: Vec<Word>,
    pub exact: usize,
    pub approximate: usize,
    pub mismatched: usize,
    /// Words that could not be segmented.
    pub skipped: usize,
    /// Entries that are not Kannada script at all.
    pub non_script: usize,
}

/// Ties the phoneme table, the assembler and the pair finder together.
pub struct PhonologyEngine<'t> {
    table: &'t PhonemeTable,
    finder: PairFinder,
}

impl PhonologyEngine<'static> {
    /// Engine over the built-in Kannada table and contrast list.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(PhonemeTable::kannada()?, ContrastSet::default()))
    }
}

impl<'t> PhonologyEngine<'t> {
    pub fn with_parts(table: &'t PhonemeTable, contrasts: ContrastSet) -> Self {
        Self {
            table,
            finder: PairFinder::new(contrasts),
        }
    }

    pub fn table(&self) -> &'t PhonemeTable {
        self.table
    }

    pub fn finder(&self) -> &PairFinder {
        &self.finder
    }

    pub fn word2phonemes(&self, word: &str) -> Result<Word> {
        PhonemeAssembler::new(self.table).assemble(word)
    }

    pub fn find_minimal_pair<S: AsRef<str>>(
        &self,
        a: &[S],
        b: &[S],
        discards: &mut DiscardRegistry,
    ) -> Option<ContrastPair> {
        self.finder.find_minimal_pair(a, b, discards)
    }

    /// Tokenizes every corpus word and checks it against its reference.
    ///
    /// Malformed words are logged and skipped. Data-integrity failures
    /// (unknown or obsolete code points) abort the whole batch.
    pub fn process_corpus(&self, entries: &[ReferenceEntry]) -> Result<CorpusOutcome> {
        let mut outcome = CorpusOutcome::default();
        for entry in entries {
            let word = match self.word2phonemes(&entry.word) {
                Ok(word) => word,
                Err(e) if e.is_word_local() => {
                    log::warn!("skipping word: {}", e);
                    outcome.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if !word.is_analyzable() {
                log::debug!("'{}' is not Kannada script", entry.word);
                outcome.non_script += 1;
                continue;
            }

            match match_quality(&entry.transliteration, &word.iso) {
                MatchQuality::Exact => {
                    outcome.exact += 1;
                    outcome.words.push(word);
                }
                MatchQuality::Approximate => outcome.approximate += 1,
                MatchQuality::Mismatch => {
                    log::warn!(
                        "Word = {} \treference ISO {} != assembled ISO {}",
                        word.word,
                        entry.transliteration,
                        word.iso
                    );
                    outcome.mismatched += 1;
                }
            }
        }
        log::info!("Number of words which ISO matches = {}", outcome.exact);
        log::info!("Number of words which ISO almost matches = {}", outcome.approximate);
        log::info!("Number of words which ISO doesn't match = {}", outcome.mismatched);
        log::info!("Number of words skipped as malformed = {}", outcome.skipped);
        Ok(outcome)
    }

    /// Runs the pairwise scan over already tokenized words.
    pub fn scan(&self, words: Vec<Word>) -> ScanReport {
        PairScan::new(&self.finder).run(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonologyError;

    fn entry(word: &str, iso: &str) -> ReferenceEntry {
        ReferenceEntry {
            word: word.to_string(),
            transliteration: iso.to_string(),
        }
    }

    #[test]
    fn word2phonemes_sample() {
        let engine = PhonologyEngine::new().unwrap();
        let w = engine.word2phonemes("\u{0c95}").unwrap();
        assert_eq!(w.ipa, vec!["k", "ɐ"]);
        assert_eq!(w.iso, "ka");
    }

    #[test]
    fn corpus_keeps_only_exact_matches() {
        let engine = PhonologyEngine::new().unwrap();
        let outcome = engine
            .process_corpus(&[
                entry("\u{0caa}\u{0cb2}", "pala"),
                // ಕಂಬಿ: anuswara read as m
                entry("\u{0c95}\u{0c82}\u{0cac}\u{0cbf}", "kambi"),
                entry("\u{0cac}\u{0cb2}", "bolo"),
                entry("\u{0cbe}\u{0c95}", "āka"),
                entry("english", ""),
            ])
            .unwrap();
        assert_eq!(outcome.exact, 1);
        assert_eq!(outcome.approximate, 1);
        assert_eq!(outcome.mismatched, 1);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.non_script, 1);
        assert_eq!(outcome.words.len(), 1);
        assert_eq!(outcome.words[0].iso, "pala");
    }

    #[test]
    fn obsolete_codepoint_aborts_the_batch() {
        let engine = PhonologyEngine::new().unwrap();
        let err = engine
            .process_corpus(&[entry("\u{0caa}\u{0cb2}", "pala"), entry("\u{0c8c}", "")])
            .unwrap_err();
        assert!(matches!(err, PhonologyError::ObsoleteCodepoint { .. }));
    }

    #[test]
    fn scan_through_the_engine() {
        let engine = PhonologyEngine::new().unwrap();
        let outcome = engine
            .process_corpus(&[entry("\u{0caa}\u{0cb2}", "pala"), entry("\u{0cac}\u{0cb2}", "bala")])
            .unwrap();
        let report = engine.scan(outcome.words);
        assert_eq!(report.total_pairs(), 1);
    }
}
