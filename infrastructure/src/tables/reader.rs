//! Spreadsheet and CSV readers
//!
//! Workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read with
//! calamine; `.csv` files with the csv crate. The first row is the
//! header row. Empty cells become `None`.

use calamine::{DataType, Reader, open_workbook_auto};
use overlap_application::TableError;
use overlap_domain::SourceTable;
use std::path::Path;
use tracing::debug;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read a table, dispatching on the file extension
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<SourceTable, TableError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if extension == "csv" {
        read_csv(path)
    } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        read_workbook(path, sheet)
    } else {
        Err(TableError::UnsupportedFormat(path.display().to_string()))
    }
}

/// Read the given sheet (or the first one) of a workbook
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<SourceTable, TableError> {
    let path_text = path.display().to_string();
    let read_error = |message: String| TableError::Read {
        path: path_text.clone(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| read_error(e.to_string()))?;
    let range = match sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .ok_or_else(|| TableError::SheetNotFound {
                path: path_text.clone(),
                sheet: name.to_string(),
            })?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| TableError::NoWorksheet {
                path: path_text.clone(),
            })?,
    }
    .map_err(|e| read_error(e.to_string()))?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| row.iter().map(|c| cell_text(c).unwrap_or_default()).collect())
        .unwrap_or_default();

    let mut table = SourceTable::new(headers);
    table.rows = rows.map(|row| row.iter().map(cell_text).collect()).collect();
    debug!("Read {} rows from {}", table.len(), path_text);
    Ok(table)
}

/// Read a comma-separated file with a header row
pub fn read_csv(path: &Path) -> Result<SourceTable, TableError> {
    let path_text = path.display().to_string();
    let read_error = |e: csv::Error| TableError::Read {
        path: path_text.clone(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;

    let headers = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = SourceTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        table.rows.push(
            record
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect(),
        );
    }
    debug!("Read {} rows from {}", table.len(), path_text);
    Ok(table)
}

/// Text of a workbook cell; whole floats lose their fraction
fn cell_text(cell: &DataType) -> Option<String> {
    match cell {
        DataType::Empty => None,
        DataType::String(s) if s.is_empty() => None,
        DataType::String(s) => Some(s.clone()),
        DataType::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_csv_with_blanks() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Program,Country").unwrap();
        writeln!(file, "Health,Kenya").unwrap();
        writeln!(file, ",Peru").unwrap();
        writeln!(file, "\"Water, Sanitation\",Chad").unwrap();

        let table = read_table(file.path(), None).unwrap();
        assert_eq!(table.headers, vec!["Program", "Country"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(0, 1), Some("Kenya"));
        assert_eq!(table.cell(1, 0), None);
        assert_eq!(table.cell(2, 0), Some("Water, Sanitation"));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = read_table(Path::new("countries.txt"), None);
        assert!(matches!(result, Err(TableError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_workbook_is_read_error() {
        let result = read_table(Path::new("does-not-exist.xlsx"), None);
        assert!(matches!(result, Err(TableError::Read { .. })));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&DataType::Empty), None);
        assert_eq!(cell_text(&DataType::String(String::new())), None);
        assert_eq!(cell_text(&DataType::Float(2024.0)).as_deref(), Some("2024"));
        assert_eq!(cell_text(&DataType::Int(7)).as_deref(), Some("7"));
        assert_eq!(
            cell_text(&DataType::String("Kenya".into())).as_deref(),
            Some("Kenya")
        );
    }
}
