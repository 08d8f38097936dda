//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, output paths and reload port come from `[package.metadata.leptos]`.

use std::time::Duration;

pub const COMPRESSION_VAR: &str = "LANDING_COMPRESSION";
pub const CACHE_MAX_AGE_VAR: &str = "LANDING_CACHE_MAX_AGE";

const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false/1/0/yes/no/on/off), got `{value}`")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be a whole number of seconds, got `{value}`")]
    InvalidSeconds { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress dynamic responses (brotli + gzip)
    pub compression: bool,

    /// `Cache-Control: max-age` for the `/pkg` bundle
    /// Zero disables caching
    pub cache_max_age: Duration,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for malformed values.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid configuration, using defaults");
            Self::default()
        })
    }

    /// Strict variant of [`Config::from_env`]
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let compression = match lookup(COMPRESSION_VAR) {
            Some(value) => parse_bool(COMPRESSION_VAR, &value)?,
            None => defaults.compression,
        };

        let cache_max_age = match lookup(CACHE_MAX_AGE_VAR) {
            Some(value) => parse_seconds(CACHE_MAX_AGE_VAR, &value)?,
            None => defaults.cache_max_age,
        };

        Ok(Self {
            compression,
            cache_max_age,
        })
    }

    /// `Cache-Control` value for static assets
    pub fn cache_control(&self) -> String {
        match self.cache_max_age.as_secs() {
            0 => "no-cache".to_string(),
            secs => format!("public, max-age={secs}"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            cache_max_age: Duration::from_secs(DEFAULT_CACHE_MAX_AGE_SECS),
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_seconds(var: &'static str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidSeconds {
            var,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no process env mutation - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert!(config.compression);
        assert_eq!(config.cache_max_age, Duration::from_secs(3600));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_both_values() {
        let config = Config::from_lookup(lookup(&[
            (COMPRESSION_VAR, "off"),
            (CACHE_MAX_AGE_VAR, " 86400 "),
        ]))
        .unwrap();

        assert!(!config.compression);
        assert_eq!(config.cache_max_age, Duration::from_secs(86400));
    }

    #[test]
    fn test_bool_spellings() {
        for value in ["1", "true", "TRUE", "yes", "On"] {
            let config = Config::from_lookup(lookup(&[(COMPRESSION_VAR, value)])).unwrap();
            assert!(config.compression, "{value} should enable compression");
        }
        for value in ["0", "false", "No", "off"] {
            let config = Config::from_lookup(lookup(&[(COMPRESSION_VAR, value)])).unwrap();
            assert!(!config.compression, "{value} should disable compression");
        }
    }

    #[test]
    fn test_invalid_bool() {
        let err = Config::from_lookup(lookup(&[(COMPRESSION_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                var: COMPRESSION_VAR,
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_seconds() {
        let err = Config::from_lookup(lookup(&[(CACHE_MAX_AGE_VAR, "-5")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeconds { .. }));
        assert!(err.to_string().contains(CACHE_MAX_AGE_VAR));
    }

    #[test]
    fn test_cache_control_header() {
        let config = Config::default();
        assert_eq!(config.cache_control(), "public, max-age=3600");

        let config = Config {
            cache_max_age: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(config.cache_control(), "no-cache");
    }
}
