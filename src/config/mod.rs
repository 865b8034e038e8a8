// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[intake]` - maximum file size, accepted MIME types and extensions
//!
//! Every key is optional; missing keys fall back to the built-in intake
//! policy. The file location follows [`crate::app::paths`].
//!
//! # Examples
//!
//! ```no_run
//! use pricing_intake::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.intake.max_file_size = Some(5 * 1024 * 1024);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::intake::IntakePolicy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning raised when `settings.toml` cannot be parsed.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Intake policy overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IntakeConfig {
    /// Maximum accepted file size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,

    /// Accepted declared MIME types. Replaces the defaults when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_types: Option<Vec<String>>,

    /// Accepted extensions, with or without a leading dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_extensions: Option<Vec<String>>,
}

impl IntakeConfig {
    /// Builds the effective policy: defaults overlaid with the configured values.
    #[must_use]
    pub fn policy(&self) -> IntakePolicy {
        let mut policy = IntakePolicy::default();
        if let Some(max) = self.max_file_size {
            policy.set_max_file_size(max.clamp(MIN_MAX_FILE_SIZE, MAX_MAX_FILE_SIZE));
        }
        if let Some(types) = &self.allowed_types {
            policy.set_allowed_types(types.iter().map(String::as_str));
        }
        if let Some(extensions) = &self.allowed_extensions {
            policy.set_allowed_extensions(extensions.iter().map(String::as_str));
        }
        policy
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub intake: IntakeConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns `(config, warning_key)`. A missing file is not a problem; an
/// unreadable or invalid one yields defaults plus [`LOAD_WARNING_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default settings");
            (Config::default(), Some(LOAD_WARNING_KEY.to_string()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::DEFAULT_MAX_FILE_SIZE;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            intake: IntakeConfig {
                max_file_size: Some(2048),
                allowed_types: Some(vec!["text/csv".into()]),
                allowed_extensions: Some(vec!["csv".into()]),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn load_from_path_reports_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[intake]\nmax_file_size = \"big\"\n").expect("failed to write file");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn partial_sections_are_accepted() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[intake]\nallowed_extensions = [\".CSV\"]\n")
            .expect("failed to write file");

        let config = load_from_path(&path).expect("config should parse");
        assert!(config.general.language.is_none());

        let policy = config.intake.policy();
        assert!(policy.allows_extension("csv"));
        assert!(!policy.allows_extension("pdf"));
        assert!(policy.allows_type("application/pdf"));
        assert_eq!(policy.max_file_size(), DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn max_file_size_is_clamped() {
        let tiny = IntakeConfig {
            max_file_size: Some(1),
            ..IntakeConfig::default()
        };
        assert_eq!(tiny.policy().max_file_size(), MIN_MAX_FILE_SIZE);

        let huge = IntakeConfig {
            max_file_size: Some(u64::MAX),
            ..IntakeConfig::default()
        };
        assert_eq!(huge.policy().max_file_size(), MAX_MAX_FILE_SIZE);
    }

    #[test]
    fn default_config_serializes_to_empty_sections() {
        let content = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert!(!content.contains("max_file_size"));
        assert!(!content.contains("language"));
    }
}
