//! Spreadsheet-backed [`TableSource`]

use super::reader::read_table;
use crate::config::FileDataConfig;
use overlap_application::{TableError, TableSource};
use overlap_domain::SourceTable;
use std::path::PathBuf;
use tracing::info;

/// Where a table lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLocation {
    pub path: PathBuf,
    pub sheet: Option<String>,
}

impl TableLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
        }
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    fn read(&self) -> Result<SourceTable, TableError> {
        info!("Reading {}", self.path.display());
        read_table(&self.path, self.sheet.as_deref())
    }
}

/// Reads the program and portfolio tables from files
#[derive(Debug, Clone)]
pub struct SpreadsheetTableSource {
    programs: TableLocation,
    portfolio: TableLocation,
}

impl SpreadsheetTableSource {
    pub fn new(programs: TableLocation, portfolio: TableLocation) -> Self {
        Self {
            programs,
            portfolio,
        }
    }

    pub fn from_config(config: &FileDataConfig) -> Self {
        let mut programs = TableLocation::new(&config.program_table);
        if let Some(sheet) = &config.program_sheet {
            programs = programs.with_sheet(sheet);
        }
        let mut portfolio = TableLocation::new(&config.portfolio_table);
        if let Some(sheet) = &config.portfolio_sheet {
            portfolio = portfolio.with_sheet(sheet);
        }
        Self::new(programs, portfolio)
    }
}

impl TableSource for SpreadsheetTableSource {
    fn load_programs(&self) -> Result<SourceTable, TableError> {
        self.programs.read()
    }

    fn load_portfolio(&self) -> Result<SourceTable, TableError> {
        self.portfolio.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlap_domain::{Category, Dataset};
    use std::fs;

    #[test]
    fn test_loads_both_csv_tables() {
        let dir = tempfile::tempdir().unwrap();
        let programs = dir.path().join("programs.csv");
        let portfolio = dir.path().join("portfolio.csv");
        fs::write(&programs, "Program,Country\nHealth,Kenya\nHealth,Peru\n").unwrap();
        fs::write(
            &portfolio,
            "Country,Center,Funder,Project Name\nKenya,East,Gates,Wells\nPeru,,Gates,\n",
        )
        .unwrap();

        let source =
            SpreadsheetTableSource::new(TableLocation::new(programs), TableLocation::new(portfolio));
        let dataset = Dataset::from_tables(
            &source.load_programs().unwrap(),
            &source.load_portfolio().unwrap(),
        );

        assert_eq!(dataset.choices(Category::Center), vec!["East"]);
        assert_eq!(
            dataset.resolve(Category::Funder, &["Gates".into()]).len(),
            2
        );
    }

    #[test]
    fn test_from_config_keeps_sheets() {
        let config = FileDataConfig {
            program_sheet: Some("Programs".to_string()),
            ..Default::default()
        };
        let source = SpreadsheetTableSource::from_config(&config);
        assert_eq!(source.programs.sheet.as_deref(), Some("Programs"));
        assert_eq!(source.portfolio.sheet, None);
        assert_eq!(source.portfolio.path, PathBuf::from("Countries Map 2.xlsx"));
    }
}
