//! CSV export of status records
//!
//! Writes a UTF-8 file with a `Country,Status` header and one row per
//! record, no index column.

use overlap_application::{ExportError, StatusExporter};
use overlap_domain::StatusRecord;
use std::fs;
use std::path::Path;
use tracing::debug;

/// [`StatusExporter`] writing comma-separated values
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvStatusExporter;

impl CsvStatusExporter {
    pub fn new() -> Self {
        Self
    }
}

impl StatusExporter for CsvStatusExporter {
    fn export(&self, records: &[StatusRecord], path: &Path) -> Result<(), ExportError> {
        let write_error = |message: String| ExportError::Write {
            path: path.display().to_string(),
            message,
        };

        let bytes = to_csv_bytes(records)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }
        fs::write(path, bytes).map_err(|e| write_error(e.to_string()))?;

        debug!("Wrote {} rows to {}", records.len(), path.display());
        Ok(())
    }
}

/// Serialize records to CSV, header included even when empty
pub fn to_csv_bytes(records: &[StatusRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Country", "Status"])
        .map_err(|e| ExportError::Serialize(e.to_string()))?;
    for record in records {
        writer
            .write_record([record.country.as_str(), record.status.as_str()])
            .map_err(|e| ExportError::Serialize(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Serialize(e.to_string()))
}

/// Read back a previously exported file
pub fn parse_status_csv(bytes: &[u8]) -> Result<Vec<StatusRecord>, ExportError> {
    csv::Reader::from_reader(bytes)
        .deserialize()
        .collect::<Result<Vec<StatusRecord>, _>>()
        .map_err(|e| ExportError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, status: &str) -> StatusRecord {
        StatusRecord {
            country: country.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let records = vec![
            record("Kenya", "In Programs and Funders"),
            record("Peru", "Only in Programs"),
        ];
        let text = String::from_utf8(to_csv_bytes(&records).unwrap()).unwrap();
        assert_eq!(
            text,
            "Country,Status\nKenya,In Programs and Funders\nPeru,Only in Programs\n"
        );
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let text = String::from_utf8(to_csv_bytes(&[]).unwrap()).unwrap();
        assert_eq!(text, "Country,Status\n");
    }

    #[test]
    fn test_quoting_survives_reread() {
        let records = vec![
            record("Korea, Republic of", "In Programs, Centers and Funders"),
            record("Côte d'Ivoire", "In All Four"),
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("country_status.csv");

        CsvStatusExporter::new().export(&records, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(parse_status_csv(&bytes).unwrap(), records);
    }
}
