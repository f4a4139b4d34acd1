// File: src/persistence.rs
use crate::error::Result;
use crate::scan::ScanReport;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a report snapshot atomically: temp file in the same directory,
/// then rename over `path`.
pub fn save_report(report: &ScanReport, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, report)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    log::info!("report snapshot written to {}", path.display());
    Ok(())
}

pub fn load_report(path: &Path) -> Result<ScanReport> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let report: ScanReport = bincode::deserialize_from(reader)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairs::contrast::ContrastPair;
    use crate::pairs::finder::Witness;
    use crate::scan::{FoundPair, PairedWord};

    #[test]
    fn snapshot_survives_a_reload() {
        let mut report = ScanReport::default();
        report.pairs.push(FoundPair {
            contrast: ContrastPair::new("p", "b"),
            left: PairedWord {
                word: "\u{0cac}\u{0cb2}".into(),
                iso: "bala".into(),
            },
            right: PairedWord {
                word: "\u{0caa}\u{0cb2}".into(),
                iso: "pala".into(),
            },
        });
        report.discards.record(
            ContrastPair::new("s", "h"),
            Some(Witness {
                left_word: "\u{0cb9}\u{0cb2}".into(),
                right_word: "\u{0cb8}\u{0cb2}".into(),
                left_iso: "hala".into(),
                right_iso: "sala".into(),
            }),
        );
        report.comparisons = 6;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.bin");
        save_report(&report, &path).unwrap();
        assert_eq!(load_report(&path).unwrap(), report);
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_report(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, crate::error::PhonologyError::Io(_)));
    }
}
