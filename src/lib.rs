// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod deck;
pub mod error;
pub mod pairs;
pub mod persistence;
pub mod reference;
pub mod scan;

pub use crate::core::engine::{CorpusOutcome, PhonologyEngine};
pub use crate::core::types::{Phoneme, SyllableUnit, Word};
pub use crate::error::{PhonologyError, Result};
pub use crate::pairs::contrast::{ContrastPair, ContrastSet};
pub use crate::pairs::finder::{DiscardRegistry, PairFinder, PairVerdict};
pub use crate::scan::ScanReport;
