use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{config_files, extensions, uploads};
use crate::core::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Uploads directory, resolved under the site directory when relative
    pub uploads_dir: Option<String>,

    /// Image extensions recognized in the uploads directory
    pub image_extensions: Option<Vec<String>>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uploads_dir: Some(uploads::DEFAULT_DIR.to_string()),
            image_extensions: None, // Falls back to the built-in allow-list
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .sitesweep.toml in current directory
        if let Ok(config) = Self::load_from_file(config_files::STANDARD_NAME) {
            return config;
        }

        // Check for .sitesweep.toml in parent directories
        for i in 1..=config_files::PARENT_SEARCH_LEVELS {
            let path = format!("{}{}", "../".repeat(i), config_files::STANDARD_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref uploads_dir) = cli_config.uploads_dir {
            self.uploads_dir = Some(uploads_dir.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// The effective extension allow-list, lower-cased for comparison
    pub fn extension_set(&self) -> FxHashSet<String> {
        match self.image_extensions {
            Some(ref extensions) => extensions.iter().map(|e| e.to_lowercase()).collect(),
            None => extensions::IMAGE.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// The effective uploads directory name
    pub fn uploads_dir(&self) -> &str {
        self.uploads_dir.as_deref().unwrap_or(uploads::DEFAULT_DIR)
    }
}

/// Configuration options that can come from CLI
#[derive(Debug)]
pub struct CliConfig {
    pub dir: String,
    pub uploads_dir: Option<String>,
    pub assume_yes: bool,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            uploads_dir: None,
            assume_yes: false,
            dry_run: false,
            quiet: false,
            verbose: false,
            config_file: None,
            no_config: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.uploads_dir(), "uploads");
        assert_eq!(config.verbose, Some(false));
        assert!(config.extension_set().contains("png"));
    }

    #[test]
    fn test_config_load_from_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"uploads_dir = \"assets/img\"\nverbose = true")?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.uploads_dir(), "assets/img");
        assert_eq!(config.verbose, Some(true));

        Ok(())
    }

    #[test]
    fn test_config_load_from_file__invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"uploads_dir = [").unwrap();

        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            uploads_dir: Some("media".to_string()),
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.uploads_dir(), "media");
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_extension_set__custom_list_is_lowercased() {
        let config = Config {
            image_extensions: Some(vec!["PNG".to_string(), "jpg".to_string()]),
            ..Default::default()
        };

        let set = config.extension_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("png"));
        assert!(set.contains("jpg"));
        assert!(!set.contains("gif"));
    }

    #[test]
    fn test_extension_set__default_covers_allow_list() {
        let set = Config::default().extension_set();
        for ext in ["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif"] {
            assert!(set.contains(ext), "missing {ext}");
        }
    }
}
