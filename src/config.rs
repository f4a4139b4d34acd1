//! Scan configuration, loadable from a JSON file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Column holding the Kannada word.
    pub word_column: usize,
    /// Column holding the reference transliteration.
    pub reference_column: usize,
    pub delimiter: char,
    /// Print the discarded contrasts after the accepted pairs.
    pub report_discards: bool,
    /// Where to write a report snapshot, if anywhere.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            word_column: 0,
            reference_column: 4,
            delimiter: '\t',
            report_discards: false,
            snapshot_path: None,
        }
    }
}

impl ScanConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
