//! Desktop shell settings, persisted as TOML.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{build_base_url, HostEnvironment};
use crate::Result;

/// Origin of a locally running Refinery server.
pub const DEFAULT_ORIGIN: &str = "http://localhost:1312";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server origin the editor talks to.
    pub origin: String,
    /// Overrides the compile-time base URL.
    pub base_url: Option<String>,
    /// Skip width animations.
    pub reduce_motion: bool,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            base_url: None,
            reduce_motion: false,
            theme: "dark".to_string(),
        }
    }
}

impl Settings {
    /// Default settings file path.
    ///
    /// `$REFINERY_DESKTOP_SETTINGS` wins, otherwise
    /// `<config dir>/refinery/desktop.toml`.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("REFINERY_DESKTOP_SETTINGS") {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("refinery/desktop.toml"))
            .unwrap_or_else(|| PathBuf::from("desktop.toml"))
    }

    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn host_environment(&self) -> HostEnvironment {
        let base_url = self.base_url.as_deref().unwrap_or_else(|| build_base_url());
        HostEnvironment::new(self.origin.as_str(), base_url)
    }
}
