//! Data source configuration from TOML (`[data]` section)

use serde::{Deserialize, Serialize};

/// Raw data source configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Program table (`Program`, `Country`)
    pub program_table: String,
    /// Worksheet of the program table; first sheet when unset
    pub program_sheet: Option<String>,
    /// Portfolio table (`Country`, `Center`, `Funder`, `Project Name`)
    pub portfolio_table: String,
    /// Worksheet of the portfolio table; first sheet when unset
    pub portfolio_sheet: Option<String>,
    /// GeoJSON feature collection of country boundaries
    pub boundaries: String,
    /// Feature property holding the country name
    pub boundary_name_property: String,
}

impl Default for FileDataConfig {
    fn default() -> Self {
        Self {
            program_table: "Priority Countries 2.xlsx".to_string(),
            program_sheet: None,
            portfolio_table: "Countries Map 2.xlsx".to_string(),
            portfolio_sheet: None,
            boundaries: "geojson.json".to_string(),
            boundary_name_property: "name".to_string(),
        }
    }
}
