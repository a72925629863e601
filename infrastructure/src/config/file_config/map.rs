//! Map configuration from TOML (`[map]` section)

use overlap_application::MapSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw map configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMapConfig {
    pub width: u32,
    pub height: u32,
    pub opacity: f64,
    pub title: Option<String>,
    /// Legend overrides: label → `#rrggbb`
    pub colors: BTreeMap<String, String>,
}

impl Default for FileMapConfig {
    fn default() -> Self {
        let settings = MapSettings::default();
        Self {
            width: settings.width,
            height: settings.height,
            opacity: settings.opacity,
            title: None,
            colors: BTreeMap::new(),
        }
    }
}

impl FileMapConfig {
    /// Convert to application settings (opacity clamped)
    pub fn to_settings(&self) -> MapSettings {
        let mut settings = MapSettings::default()
            .with_size(self.width, self.height)
            .with_opacity(self.opacity);
        if let Some(title) = &self.title {
            settings = settings.with_title(title.clone());
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_section_deserialize() {
        let toml_str = r##"
[map]
width = 800
title = "Portfolio"

[map.colors]
"In All Four" = "#000000"
"##;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.map.width, 800);
        assert_eq!(config.map.height, 600);
        assert_eq!(config.map.colors.get("In All Four").unwrap(), "#000000");

        let settings = config.map.to_settings();
        assert_eq!(settings.title, "Portfolio");
        assert_eq!(settings.width, 800);
    }

    #[test]
    fn test_to_settings_clamps_opacity() {
        let config = FileMapConfig {
            opacity: -1.0,
            ..Default::default()
        };
        assert_eq!(config.to_settings().opacity, 0.0);
    }
}
