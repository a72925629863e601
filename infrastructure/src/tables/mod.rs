//! Source table adapters
//!
//! Implements the [`TableSource`](overlap_application::TableSource) port
//! over workbook and CSV files.

mod reader;
mod spreadsheet;

pub use reader::{read_csv, read_table, read_workbook};
pub use spreadsheet::{SpreadsheetTableSource, TableLocation};
