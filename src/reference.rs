// File: src/reference.rs
use crate::config::ScanConfig;
use crate::error::{PhonologyError, Result};
use std::io::Read;

/// Nasals the anuswara may stand for in a reference transliteration.
const ANUSWARA_READINGS: &[char] = &['n', 'ṇ', 'ŋ', 'm', 'ñ'];

/// A corpus word with its externally supplied transliteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub word: String,
    pub transliteration: String,
}

/// How closely the assembled transliteration agrees with the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchQuality {
    Exact,
    /// Equal once spacing, case and postfix readings are tolerated.
    Approximate,
    Mismatch,
}

/// Compares a reference transliteration with an assembled one.
pub fn match_quality(reference: &str, assembled: &str) -> MatchQuality {
    if reference == assembled {
        return MatchQuality::Exact;
    }
    let normalized = reference
        .replace(' ', "")
        .replace('ř', "r̥")
        .to_lowercase();

    let anuswara_variant = ANUSWARA_READINGS
        .iter()
        .any(|c| normalized == assembled.replace('ṃ', &c.to_string()));

    if normalized == assembled
        || anuswara_variant
        || normalized == assembled.replace('ḥ', "h")
    {
        MatchQuality::Approximate
    } else {
        MatchQuality::Mismatch
    }
}

/// Opens a headerless delimited reader. Rows may have any number of fields.
pub(crate) fn delimited_reader<R: Read>(reader: R, delimiter: char) -> Result<csv::Reader<R>> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| PhonologyError::Reference {
            line: 0,
            reason: format!("delimiter {:?} is not a single ASCII character", delimiter),
        })?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader))
}

/// Line a record started on, for error messages.
pub(crate) fn record_line(record: &csv::StringRecord) -> usize {
    record.position().map_or(0, |p| p.line() as usize)
}

/// Blank rows carry no data and are skipped.
pub(crate) fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Reads delimited rows, taking the word and reference columns.
pub fn load_reference_corpus<R: Read>(reader: R, config: &ScanConfig) -> Result<Vec<ReferenceEntry>> {
    let mut rows = delimited_reader(reader, config.delimiter)?;
    let mut entries = Vec::new();
    for record in rows.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        let column = |at: usize| {
            record
                .get(at)
                .map(str::to_string)
                .ok_or_else(|| PhonologyError::Reference {
                    line: record_line(&record),
                    reason: format!("expected at least {} columns, found {}", at + 1, record.len()),
                })
        };
        entries.push(ReferenceEntry {
            word: column(config.word_column)?,
            transliteration: column(config.reference_column)?,
        });
    }
    log::info!("loaded {} reference words", entries.len());
    Ok(entries)
}
