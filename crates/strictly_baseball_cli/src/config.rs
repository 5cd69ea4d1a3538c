//! Play configuration loaded from TOML, `.env` and flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable that overrides the configured seed.
pub const SEED_ENV: &str = "BASEBALL_SEED";

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Fixed RNG seed; drawn from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the secret when a round starts (for debugging).
    #[serde(default)]
    reveal_secret: bool,

    /// Emit one JSON object per event instead of prose.
    #[serde(default)]
    json: bool,

    /// Drop non-digits, a leading 0 and repeated digits before submitting.
    #[serde(default)]
    sanitize_input: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reveal_secret: false,
            json: false,
            sanitize_input: false,
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, json = config.json, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies the [`SEED_ENV`] value, if one was set.
    #[instrument(skip(self))]
    pub fn with_env_seed(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = value {
            let seed = raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::new(format!("{} must be an unsigned integer: {}", SEED_ENV, e))
            })?;
            debug!(seed, "Seed taken from environment");
            self.seed = Some(seed);
        }
        Ok(self)
    }

    /// Applies command-line flags. Flags only ever switch features on.
    #[instrument(skip(self))]
    pub fn with_flags(
        mut self,
        seed: Option<u64>,
        reveal: bool,
        json: bool,
        sanitize: bool,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self.reveal_secret |= reveal;
        self.json |= json;
        self.sanitize_input |= sanitize;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(config.seed(), &None);
        assert!(!*config.json());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PlayConfig = toml::from_str("seed = 12\n").unwrap();
        assert_eq!(config.seed(), &Some(12));
        assert!(!*config.reveal_secret());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_env_seed_overrides_file() {
        let config: PlayConfig = toml::from_str("seed = 12\n").unwrap();
        let config = config.with_env_seed(Some(" 99 ")).unwrap();
        assert_eq!(config.seed(), &Some(99));
    }

    #[test]
    fn test_bad_env_seed_is_error() {
        let err = PlayConfig::default().with_env_seed(Some("abc")).unwrap_err();
        assert!(err.message.contains(SEED_ENV));
    }

    #[test]
    fn test_flags_override() {
        let config = PlayConfig::default()
            .with_env_seed(Some("5"))
            .unwrap()
            .with_flags(Some(6), true, false, true);
        assert_eq!(config.seed(), &Some(6));
        assert!(*config.reveal_secret());
        assert!(!*config.json());
        assert!(*config.sanitize_input());
    }
}
