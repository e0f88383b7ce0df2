//! User configuration
//!
//! Stored at `~/.markflow/config.toml` (or `$MARKFLOW_CONFIG`):
//!
//! ```toml
//! [urgency]
//! urgent_within_days = 7
//! warning_within_days = 30
//!
//! [docket]
//! path = "/srv/docket/firm.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::UrgencyThresholds;
use crate::paths;

/// Global markflow configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Urgency bucket thresholds
    #[serde(default)]
    pub urgency: UrgencyThresholds,
    /// Docket file settings
    #[serde(default)]
    pub docket: DocketConfig,
}

/// Docket file settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocketConfig {
    /// Docket file used when `--docket` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from `path`, or defaults if absent or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        let config = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<Self>(&content).map_err(|e| e.to_string()));

        match config {
            Ok(config) => config.normalized(),
            Err(e) => {
                log::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Docket path: explicit override, then configured path, then `./docket.toml`
    #[must_use]
    pub fn docket_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.docket.path.clone())
            .unwrap_or_else(paths::default_docket)
    }

    /// Thresholds with the warning bound lifted to at least the urgent bound
    fn normalized(mut self) -> Self {
        if self.urgency.warning_within_days < self.urgency.urgent_within_days {
            log::warn!(
                "warning_within_days ({}) is below urgent_within_days ({}); using {}",
                self.urgency.warning_within_days,
                self.urgency.urgent_within_days,
                self.urgency.urgent_within_days
            );
            self.urgency.warning_within_days = self.urgency.urgent_within_days;
        }
        self
    }
}
