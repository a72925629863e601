//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use std::path::PathBuf;

const PROJECT_FILES: [&str; 2] = ["country-overlap.toml", ".country-overlap.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./country-overlap.toml` or `./.country-overlap.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/country-overlap/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/country-overlap/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("country-overlap").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./country-overlap.toml or ./.country-overlap.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.data.program_table, "Priority Countries 2.xlsx");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("country-overlap"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[data]\nboundaries = \"world.geojson\"\n\n[map]\nwidth = 640").unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.data.boundaries, "world.geojson");
        assert_eq!(config.map.width, 640);
        // Untouched keys keep their defaults
        assert_eq!(config.data.portfolio_table, "Countries Map 2.xlsx");
    }
}
