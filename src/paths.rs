//! Centralized path definitions for markflow
//!
//! ## Layout
//!
//! ```text
//! ~/.markflow/
//! └── config.toml      # User preferences (urgency thresholds, default docket)
//!
//! ./docket.toml        # Default docket file when none is configured
//! ```
//!
//! `MARKFLOW_CONFIG` overrides the config file location.

use std::path::PathBuf;

/// Environment variable naming an alternate config file
pub const CONFIG_ENV: &str = "MARKFLOW_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".markflow";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Docket filename used when nothing else is configured
pub const DEFAULT_DOCKET_FILE: &str = "docket.toml";

/// Get the global markflow directory.
///
/// Returns `~/.markflow/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// `$MARKFLOW_CONFIG` if set and non-empty, otherwise `~/.markflow/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}

/// Get the default docket path (`./docket.toml`)
#[must_use]
pub fn default_docket() -> PathBuf {
    PathBuf::from(DEFAULT_DOCKET_FILE)
}
