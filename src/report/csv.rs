//! CSV export of trial records: one row per trial, one named column per
//! field. Consumes the record sequence read-only.

use std::fmt;
use std::path::Path;

use crate::sim::trial::TrialRecord;

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "failed to write trial records: {err}"),
            Self::Io(err) => write!(f, "failed to flush export file: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Write the full record sequence to `path`. The header row comes from the
/// record's field names, so downstream tooling addresses columns by name.
pub fn export_records(path: impl AsRef<Path>, records: &[TrialRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(ExportError::Csv)?;
    for record in records {
        writer.serialize(record).map_err(ExportError::Csv)?;
    }
    writer.flush().map_err(ExportError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioParams;
    use crate::sim::run;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_path() -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("nimrod-export-{stamp}.csv"))
    }

    #[test]
    fn export_writes_header_and_one_row_per_trial() {
        let params = ScenarioParams {
            num_simulations: 5,
            ..ScenarioParams::default()
        };
        let records = run(&params, 13).unwrap();
        let path = unique_temp_path();

        export_records(&path, &records).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("trial"));
        assert!(header.contains("hostages_rescued"));
        assert!(header.contains("rescue_time"));
        assert_eq!(lines.count(), 5);
    }
}
