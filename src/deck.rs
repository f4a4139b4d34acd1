// File: src/deck.rs
//
// Note fields for minimal-pair flashcards. Packaging the deck, finding the
// audio files and rendering templates happen outside this crate; here we
// only turn curated pairs into the plain field values a note needs.
use crate::core::engine::PhonologyEngine;
use crate::core::types::Word;
use crate::error::{PhonologyError, Result};
use crate::reference::{delimited_reader, is_blank, record_line};
use std::io::Read;

const TIP_COLUMN: usize = 6;
const RECORDING_SEPARATOR: &str = " EOL ";

/// A row of the curated pairs file: the two contrasting sounds, the two
/// words, and an optional tip for the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratedPair {
    pub left_sound: String,
    pub right_sound: String,
    pub left_word: String,
    pub right_word: String,
    pub tip: String,
}

pub fn load_curated_pairs<R: Read>(reader: R) -> Result<Vec<CuratedPair>> {
    let mut rows = delimited_reader(reader, '\t')?;
    let mut pairs = Vec::new();
    for record in rows.records() {
        let row = record?;
        if is_blank(&row) {
            continue;
        }
        if row.len() < 4 {
            return Err(PhonologyError::Reference {
                line: record_line(&row),
                reason: format!("curated pair needs 4 columns, found {}", row.len()),
            });
        }
        pairs.push(CuratedPair {
            left_sound: row[0].to_string(),
            right_sound: row[1].to_string(),
            left_word: row[2].to_string(),
            right_word: row[3].to_string(),
            tip: row.get(TIP_COLUMN).unwrap_or_default().to_string(),
        });
    }
    log::debug!("loaded {} curated pairs", pairs.len());
    Ok(pairs)
}

/// One half of a note.
#[derive(Debug, Clone)]
pub struct PairSide {
    pub sound: String,
    pub word: Word,
    /// Audio file names, as the deck will reference them.
    pub recordings: Vec<String>,
}

impl PairSide {
    fn new(engine: &PhonologyEngine<'_>, sound: &str, word: &str, recordings: Vec<String>) -> Result<Self> {
        let word = engine.word2phonemes(word)?;
        if !word.ipa.iter().any(|p| p == sound) {
            log::warn!("{} isn't in {:?}", sound, word.ipa);
        }
        Ok(Self {
            sound: sound.to_string(),
            word,
            recordings,
        })
    }

    fn sound_refs(&self) -> String {
        self.recordings
            .iter()
            .map(|name| format!("[sound:{}]", name))
            .collect::<Vec<_>>()
            .join(RECORDING_SEPARATOR)
    }
}

#[derive(Debug, Clone)]
pub struct PairNote {
    pub left: PairSide,
    pub right: PairSide,
    pub tip: String,
}

impl PairNote {
    pub fn new(
        engine: &PhonologyEngine<'_>,
        pair: &CuratedPair,
        left_recordings: Vec<String>,
        right_recordings: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            left: PairSide::new(engine, &pair.left_sound, &pair.left_word, left_recordings)?,
            right: PairSide::new(engine, &pair.right_sound, &pair.right_word, right_recordings)?,
            tip: pair.tip.clone(),
        })
    }

    /// Stable identity of the note across deck rebuilds.
    pub fn key(&self) -> String {
        format!("{} vs {}", self.left.word.iso, self.right.word.iso)
    }

    /// The twelve note fields, in deck order.
    pub fn fields(&self) -> [String; 12] {
        [
            self.key(),
            self.left.sound.clone(),
            self.left.word.word.clone(),
            self.left.word.ipa.concat(),
            self.left.word.iso.clone(),
            self.left.sound_refs(),
            self.right.sound.clone(),
            self.right.word.word.clone(),
            self.right.word.ipa.concat(),
            self.right.word.iso.clone(),
            self.right.sound_refs(),
            self.tip.clone(),
        ]
    }
}
