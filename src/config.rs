//! Site configuration (`assets/site.ron`)
//!
//! Every field has a default, so a partial file only overrides what it names.
//! A missing or broken file is never fatal: the page runs on defaults.

use macroquad::logging::{info, warn};
use serde::{Deserialize, Serialize};

/// Where the config lives relative to the asset root
pub const CONFIG_PATH: &str = "assets/site.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(ron::error::SpannedError),
    Validation(String),
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Cover image applied to the front face of the magazine
    pub cover_texture: String,
    /// Recipient for the contact form's "Send Message"
    pub contact_email: String,
    /// Below this window width the header collapses to a menu button
    pub mobile_breakpoint: f32,
    /// Radians of orbit per pixel of drag
    pub orbit_sensitivity: f32,
    pub show_fps: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cover_texture: "assets/magazine-cover.png".to_string(),
            contact_email: "hello@artisanattitude.example".to_string(),
            mobile_breakpoint: 768.0,
            orbit_sensitivity: 0.005,
            show_fps: false,
        }
    }
}

impl SiteConfig {
    /// Parse and validate RON text
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint < 0.0 {
            return Err(ConfigError::Validation(format!(
                "mobile_breakpoint must be a non-negative number, got {}",
                self.mobile_breakpoint
            )));
        }
        if !self.orbit_sensitivity.is_finite() || self.orbit_sensitivity <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "orbit_sensitivity must be positive, got {}",
                self.orbit_sensitivity
            )));
        }
        if self.cover_texture.trim().is_empty() {
            return Err(ConfigError::Validation("cover_texture is empty".to_string()));
        }
        Ok(())
    }

    /// Read a config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load the site config, falling back to defaults on any error
    pub async fn load(path: &str) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let result = Self::read_file(std::path::Path::new(path));

        #[cfg(target_arch = "wasm32")]
        let result = match macroquad::file::load_string(path).await {
            Ok(contents) => Self::from_ron_str(&contents),
            Err(e) => Err(ConfigError::Io(e.to_string())),
        };

        Self::or_default(path, result)
    }

    fn or_default(path: &str, result: Result<Self, ConfigError>) -> Self {
        match result {
            Ok(config) => {
                info!("Loaded site config from {}", path);
                config
            }
            Err(e) => {
                warn!("Using default site config ({}: {})", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = SiteConfig::from_ron_str("(show_fps: true, mobile_breakpoint: 600.0)").unwrap();
        assert!(config.show_fps);
        assert_eq!(config.mobile_breakpoint, 600.0);
        assert_eq!(config.cover_texture, SiteConfig::default().cover_texture);

        assert_eq!(SiteConfig::from_ron_str("()").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_parse_and_validation_errors() {
        assert!(matches!(SiteConfig::from_ron_str("(show_fps: maybe)"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            SiteConfig::from_ron_str("(orbit_sensitivity: 0.0)"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            SiteConfig::from_ron_str("(cover_texture: \"  \")"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(contact_email: \"desk@example.org\")").unwrap();
        let config = SiteConfig::read_file(file.path()).unwrap();
        assert_eq!(config.contact_email, "desk@example.org");

        let dir = tempfile::tempdir().unwrap();
        let missing = SiteConfig::read_file(&dir.path().join("site.ron"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(mobile_breakpoint: \"wide\")").unwrap();
        let result = SiteConfig::read_file(&path);
        assert!(result.is_err());
        assert_eq!(SiteConfig::or_default("broken.ron", result), SiteConfig::default());
    }
}
