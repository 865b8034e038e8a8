// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (tests)
//! 2. **CLI argument** `--config-dir` - set once via [`init_cli_overrides`]
//! 3. **Environment variable** `PRICING_INTAKE_CONFIG_DIR`
//! 4. **Platform default** - `dirs::config_dir()` joined with the app name

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "PricingIntake";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PRICING_INTAKE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Directory holding `settings.toml`.
///
/// Platform defaults:
/// - Linux: `~/.config/PricingIntake/`
/// - macOS: `~/Library/Application Support/PricingIntake/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\PricingIntake\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
