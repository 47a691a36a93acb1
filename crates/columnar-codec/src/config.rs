//! Codec configuration.
//!
//! Provides configuration file support via `columnar.toml`, environment
//! variables, and runtime overrides.
//!
//! # Priority (highest to lowest)
//!
//! 1. Runtime overrides (fields set on a loaded [`CodecConfig`])
//! 2. Environment variables (`COLUMNAR_*`, sections split on `__`,
//!    e.g. `COLUMNAR_LIMITS__MAX_VALUES`)
//! 3. Configuration file (`columnar.toml`)
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Largest count representable by the 32-bit run lengths and indices.
pub const MAX_ENCODABLE: usize = u32::MAX as usize;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },
}

/// Input limits applied by the encoders.
///
/// Encoders fail fast with an error instead of letting a 32-bit run length
/// or index wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeLimits {
    /// Maximum number of input values per column.
    pub max_values: usize,
    /// Maximum number of distinct values in a dictionary.
    pub max_dictionary_entries: usize,
}

impl Default for EncodeLimits {
    fn default() -> Self {
        Self {
            max_values: MAX_ENCODABLE,
            max_dictionary_entries: MAX_ENCODABLE,
        }
    }
}

impl EncodeLimits {
    /// Effective value limit, never above what a `u32` count can hold.
    #[must_use]
    pub fn effective_max_values(&self) -> usize {
        self.max_values.min(MAX_ENCODABLE)
    }

    /// Effective dictionary limit, never above what a `u32` index can address.
    #[must_use]
    pub fn effective_max_dictionary_entries(&self) -> usize {
        self.max_dictionary_entries.min(MAX_ENCODABLE)
    }

    /// Checks that `len` input values fit under the value limit.
    pub(crate) fn check_len(&self, len: usize) -> crate::Result<()> {
        let max = self.effective_max_values();
        if len > max {
            tracing::warn!(len, max, "encode rejected: too many values");
            return Err(crate::Error::TooManyValues { len, max });
        }
        Ok(())
    }
}

/// Main codec configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Encoder limits.
    pub limits: EncodeLimits,
}

impl CodecConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("columnar.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        tracing::trace!(path = %path.as_ref().display(), "loading codec configuration");
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("COLUMNAR_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("limits.max_values", self.limits.max_values),
            (
                "limits.max_dictionary_entries",
                self.limits.max_dictionary_entries,
            ),
        ];

        for (key, value) in checks {
            if value == 0 || value > MAX_ENCODABLE {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("value {value} is out of range [1, {MAX_ENCODABLE}]"),
                });
            }
        }

        Ok(())
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
