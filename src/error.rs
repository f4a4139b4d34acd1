//! Error types for tokenizing words and scanning for minimal pairs.

use thiserror::Error;

/// Errors raised while building the phoneme table, tokenizing words,
/// or loading and saving corpus data.
#[derive(Debug, Error)]
pub enum PhonologyError {
    /// A script character has no entry in the phoneme table.
    #[error("no phoneme table entry for {}", fmt_codepoint(.0))]
    UnknownCodepoint(char),

    /// The segmenter could not consume the whole word.
    #[error("cannot segment '{word}': unexpected '{found}' at character {position}")]
    MalformedSegmentation {
        word: String,
        position: usize,
        found: char,
    },

    /// An obsolete code point reached the tokenizer.
    ///
    /// Upstream data is expected to be filtered before it gets here.
    #[error("obsolete code point {} in '{word}'", fmt_codepoint(.codepoint))]
    ObsoleteCodepoint { word: String, codepoint: char },

    /// A classified code point is neither in the table nor obsolete.
    #[error("phoneme table has no entry for classified code point {}", fmt_codepoint(.0))]
    IncompleteTable(char),

    /// A table entry was given for a code point marked obsolete.
    #[error("phoneme table maps obsolete code point {}", fmt_codepoint(.0))]
    ObsoleteInTable(char),

    /// A corpus row could not be read.
    #[error("reference corpus line {line}: {reason}")]
    Reference { line: usize, reason: String },

    #[error("delimited file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PhonologyError {
    /// True for failures confined to a single word.
    ///
    /// A batch logs and skips these; everything else aborts it.
    pub fn is_word_local(&self) -> bool {
        matches!(self, PhonologyError::MalformedSegmentation { .. })
    }
}

fn fmt_codepoint(c: &char) -> String {
    format!("U+{:04X}", *c as u32)
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, PhonologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_malformed_words_are_local() {
        let malformed = PhonologyError::MalformedSegmentation {
            word: "x".into(),
            position: 0,
            found: 'x',
        };
        assert!(malformed.is_word_local());
        assert!(!PhonologyError::UnknownCodepoint('\u{0c95}').is_word_local());
        assert!(!PhonologyError::ObsoleteCodepoint {
            word: "\u{0c8c}".into(),
            codepoint: '\u{0c8c}',
        }
        .is_word_local());
    }

    #[test]
    fn messages_name_the_codepoint() {
        let err = PhonologyError::UnknownCodepoint('\u{0c95}');
        assert!(err.to_string().contains("U+0C95"));

        let err = PhonologyError::ObsoleteCodepoint {
            word: "\u{0c95}\u{0ce1}".into(),
            codepoint: '\u{0ce1}',
        };
        assert_eq!(err.to_string(), "obsolete code point U+0CE1 in '\u{0c95}\u{0ce1}'");
    }
}
