// src/core/segmenter.rs
use crate::core::table::{classify, in_script, CharClass, PhonemeTable};
use crate::core::types::{Nucleus, SyllableUnit, VowelMark};
use crate::error::{PhonologyError, Result};

/// Scanner state between two characters.
enum State {
    /// Nothing pending; the next character must start a syllable.
    Boundary,
    /// A consonant was read and may still take a sign, a virama or a postfix.
    Consonant { cluster: Vec<char>, consonant: char },
    /// Consonant + virama. Another consonant extends the cluster.
    Suppressed { cluster: Vec<char>, consonant: char },
    /// The nucleus is complete; only a postfix may still attach.
    Closed(Nucleus),
}

/// Splits Kannada words into syllable units.
pub struct Segmenter<'t> {
    table: &'t PhonemeTable,
}

impl<'t> Segmenter<'t> {
    pub fn new(table: &'t PhonemeTable) -> Self {
        Self { table }
    }

    /// Segments a word. Non-script input yields no units.
    pub fn segment(&self, word: &str) -> Result<Vec<SyllableUnit>> {
        if !word.chars().all(in_script) {
            return Ok(Vec::new());
        }

        let mut units = Vec::new();
        let mut state = State::Boundary;

        for (position, c) in word.chars().enumerate() {
            if self.table.is_obsolete(c) {
                return Err(PhonologyError::ObsoleteCodepoint {
                    word: word.to_string(),
                    codepoint: c,
                });
            }
            let malformed = || PhonologyError::MalformedSegmentation {
                word: word.to_string(),
                position,
                found: c,
            };

            state = match (state, classify(c)) {
                // A new syllable may start after any state.
                (pending, CharClass::PureVowel) => {
                    flush(pending, &mut units);
                    State::Closed(Nucleus::Vowel(c))
                }
                (State::Suppressed { mut cluster, consonant }, CharClass::Consonant) => {
                    cluster.push(consonant);
                    State::Consonant { cluster, consonant: c }
                }
                (pending, CharClass::Consonant) => {
                    flush(pending, &mut units);
                    State::Consonant {
                        cluster: Vec::new(),
                        consonant: c,
                    }
                }

                (State::Consonant { cluster, consonant }, CharClass::VowelSign) => {
                    State::Closed(Nucleus::Consonant {
                        cluster,
                        consonant,
                        mark: Some(VowelMark::Sign(c)),
                    })
                }
                (State::Consonant { cluster, consonant }, CharClass::Virama) => {
                    State::Suppressed { cluster, consonant }
                }

                (State::Boundary, CharClass::Postfix) => return Err(malformed()),
                (pending, CharClass::Postfix) => {
                    if let Some(nucleus) = close(pending) {
                        units.push(SyllableUnit {
                            nucleus,
                            postfix: Some(c),
                        });
                    }
                    State::Boundary
                }

                (_, CharClass::VowelSign | CharClass::Virama | CharClass::Other) => {
                    return Err(malformed())
                }
            };
        }
        flush(state, &mut units);

        log::debug!("segmented '{}' into {} units", word, units.len());
        Ok(units)
    }
}

/// The nucleus a pending state stands for, if any.
fn close(state: State) -> Option<Nucleus> {
    match state {
        State::Boundary => None,
        State::Consonant { cluster, consonant } => Some(Nucleus::Consonant {
            cluster,
            consonant,
            mark: None,
        }),
        State::Suppressed { cluster, consonant } => Some(Nucleus::Consonant {
            cluster,
            consonant,
            mark: Some(VowelMark::Suppressed),
        }),
        State::Closed(nucleus) => Some(nucleus),
    }
}

fn flush(state: State, units: &mut Vec<SyllableUnit>) {
    if let Some(nucleus) = close(state) {
        units.push(SyllableUnit {
            nucleus,
            postfix: None,
        });
    }
}
