//! Configuration management
//!
//! Defaults for the tools, stored in `~/.config/stool/config.toml`.
//! Priority: CLI argument > STOOL_BIO_TEMPLATE environment variable > config.toml

use super::Result;
use crate::bio::BioTemplate;
use crate::error::{ConfigError, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const BIO_TEMPLATE_ENV: &str = "STOOL_BIO_TEMPLATE";

/// Bio maker settings
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BioConfig {
    /// Template selected when none is given on the command line
    pub default_template: Option<String>,
    /// Extra templates; an id matching a built-in replaces it
    pub templates: Vec<BioTemplate>,
}

/// Image resizer settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ResizeConfig {
    /// Keep the loaded image's aspect ratio when one side changes
    pub aspect_lock: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self { aspect_lock: true }
    }
}

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub resize: ResizeConfig,
    pub bio: BioConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        log::info!("configuration written to {}", config_path.display());
        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("stool");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Get default bio template with fallback to environment variable
    pub fn get_bio_template(&self) -> Option<String> {
        std::env::var(BIO_TEMPLATE_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.bio.default_template.clone())
    }

    /// Custom templates need an id and a template body, and ids must be unique.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for template in &self.bio.templates {
            if template.id.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "bio.templates.id".to_string(),
                    field_type: "string".to_string(),
                });
            }
            if template.template.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "bio.templates.template".to_string(),
                    value: template.id.clone(),
                    reason: "template body is empty".to_string(),
                });
            }
            if !seen.insert(template.id.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "bio.templates.id".to_string(),
                    value: template.id.clone(),
                    reason: "declared more than once".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn set_bio_template(&mut self, id: String) {
        self.bio.default_template = Some(id);
    }

    pub fn set_aspect_lock(&mut self, enabled: bool) {
        self.resize.aspect_lock = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.bio.default_template.is_none());
        assert!(config.bio.templates.is_empty());
        assert!(config.resize.aspect_lock);
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_bio_template("minimal".to_string());
        config.set_aspect_lock(false);
        config
            .bio
            .templates
            .push(BioTemplate::new("gamer", "Gamer", "🎮 {{name}}"));

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(nonexistent_path));
        assert!(config.is_ok());

        let config = config.expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[resize]\naspect_lock = false\n").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert!(!config.resize.aspect_lock);
        assert!(config.bio.default_template.is_none());
    }

    #[test]
    fn test_validate_custom_templates() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config
            .bio
            .templates
            .push(BioTemplate::new("gamer", "Gamer", "🎮 {{name}}"));
        assert!(config.validate().is_ok());

        config
            .bio
            .templates
            .push(BioTemplate::new("gamer", "Gamer 2", "{{name}}"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        config.bio.templates = vec![BioTemplate::new(" ", "Blank", "{{name}}")];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField { .. })
        ));

        config.bio.templates = vec![BioTemplate::new("empty", "Empty", "")];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "resize = [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(StorageError::ConfigParseError { .. })));
    }
}
