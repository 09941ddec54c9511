//! Configuration loading.
//!
//! Configuration only affects presentation: labels, theme and input polling. With the
//! `config` feature (on by default) settings are read from a TOML file; without it the
//! defaults are always used.

use crate::error::{Result, WatchlistError};
use crate::render::ui::{Labels, ThemeName};
use std::path::Path;
#[cfg(feature = "config")]
use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "config")]
const APP_DIR: &str = "watchlist";
#[cfg(feature = "config")]
const CONFIG_FILE: &str = "config.toml";

const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Application settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct AppConfig {
    /// Screen heading
    pub heading: String,
    /// Message shown while the list is empty
    pub placeholder: String,
    /// Hint inside the empty title field
    pub draft_hint: String,
    /// Hint inside an empty note
    pub note_hint: String,
    pub theme: ThemeName,
    /// How long the input thread blocks per poll
    pub poll_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let labels = Labels::default();
        Self {
            heading: labels.heading,
            placeholder: labels.placeholder,
            draft_hint: labels.draft_hint,
            note_hint: labels.note_hint,
            theme: ThemeName::default(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the file in the user's config
    /// directory is used when present, and defaults otherwise.
    #[cfg(feature = "config")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(WatchlistError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)?
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => {
                    log::debug!("no configuration file, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// Built without the `config` feature, so only defaults are available.
    #[cfg(not(feature = "config"))]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Err(WatchlistError::config(format!(
                "cannot read {}: built without configuration file support",
                path.display()
            )));
        }
        Ok(Self::default())
    }

    /// Parse a TOML document.
    #[cfg(feature = "config")]
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| WatchlistError::config(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "config")]
    fn from_file(path: &Path) -> Result<Self> {
        log::debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            WatchlistError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(WatchlistError::config("poll_interval_ms must be greater than 0"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn labels(&self) -> Labels {
        Labels {
            heading: self.heading.clone(),
            placeholder: self.placeholder.clone(),
            draft_hint: self.draft_hint.clone(),
            note_hint: self.note_hint.clone(),
        }
    }
}

/// `<config_dir>/watchlist/config.toml`, when the platform has a config directory.
#[cfg(feature = "config")]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
