//! Configuration service for managing application configuration

use crate::AppError;
use crate::bio::{DEFAULT_TEMPLATE_ID, TemplateCatalog};
use crate::storage::config::Config;
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bio template to use: CLI argument, then STOOL_BIO_TEMPLATE, then the
    /// config file, then the built-in default.
    pub fn bio_template(&self, cli_value: Option<&str>) -> String {
        cli_value
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| self.config.get_bio_template())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string())
    }

    /// Set the default bio template. The id must name a built-in or a
    /// configured template.
    pub fn set_bio_template(&mut self, id: &str) -> Result<(), AppError> {
        let catalog = TemplateCatalog::with_custom(&self.config.bio.templates);
        catalog.find(id)?;
        self.config.set_bio_template(id.to_string());
        Ok(())
    }

    pub fn aspect_lock(&self) -> bool {
        self.config.resize.aspect_lock
    }

    pub fn set_aspect_lock(&mut self, enabled: bool) {
        self.config.set_aspect_lock(enabled);
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::BioTemplate;
    use crate::error::BioError;
    use crate::storage::config::BIO_TEMPLATE_ENV;
    use tempfile::tempdir;

    #[test]
    fn test_bio_template_priority() {
        // Temporarily clear STOOL_BIO_TEMPLATE to ensure test isolation
        let original = std::env::var(BIO_TEMPLATE_ENV).ok();
        unsafe {
            std::env::remove_var(BIO_TEMPLATE_ENV);
        }

        let mut service = ConfigService::new(Config::default());
        assert_eq!(service.bio_template(None), "professional");

        service.set_bio_template("creative").unwrap();
        assert_eq!(service.bio_template(None), "creative");
        assert_eq!(service.bio_template(Some("minimal")), "minimal");
        assert_eq!(service.bio_template(Some("")), "creative");

        // Restore original state
        unsafe {
            if let Some(value) = original {
                std::env::set_var(BIO_TEMPLATE_ENV, value);
            }
        }
    }

    #[test]
    fn test_set_unknown_bio_template() {
        let mut service = ConfigService::new(Config::default());
        let result = service.set_bio_template("pirate");
        assert!(matches!(
            result,
            Err(AppError::Bio(BioError::UnknownTemplate { .. }))
        ));
        assert!(service.config().bio.default_template.is_none());
    }

    #[test]
    fn test_set_custom_bio_template() {
        let mut config = Config::default();
        config
            .bio
            .templates
            .push(BioTemplate::new("gamer", "Gamer", "🎮 {{name}}"));
        let mut service = ConfigService::new(config);
        service.set_bio_template("gamer").unwrap();
        assert_eq!(
            service.config().bio.default_template.as_deref(),
            Some("gamer")
        );
    }

    #[test]
    fn test_aspect_lock_round_trip() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");

        let mut service = ConfigService::new(Config::default());
        assert!(service.aspect_lock());
        service.set_aspect_lock(false);
        service.save_config(Some(path.clone())).unwrap();

        let reloaded = ConfigService::new(Config::load(Some(path)).unwrap());
        assert!(!reloaded.aspect_lock());
    }
}
