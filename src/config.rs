//! Protocol configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default upper bound on identifier length, in bytes.
pub const DEFAULT_MAX_IDENTIFIER_BYTES: usize = 256;

/// Default number of rejection-sampling draws before the random source is declared unusable.
pub const DEFAULT_MAX_SAMPLING_ATTEMPTS: u32 = 64;

/// Tunable limits shared by the key generator, prover and verifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    /// Longest identifier accepted for binding into a challenge.
    pub max_identifier_bytes: usize,
    /// Draws allowed when sampling a scalar in `[1, n - 1]`.
    pub max_sampling_attempts: u32,
}

impl ProtocolConfig {
    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_identifier_bytes == 0 {
            return Err(Error::InvalidConfig(
                "max_identifier_bytes must be positive".to_string(),
            ));
        }

        if self.max_sampling_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_sampling_attempts must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Parses and validates a JSON configuration; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            max_identifier_bytes: DEFAULT_MAX_IDENTIFIER_BYTES,
            max_sampling_attempts: DEFAULT_MAX_SAMPLING_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ProtocolConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_takes_defaults() {
        let config = ProtocolConfig::from_json(r#"{ "max_identifier_bytes": 64 }"#).unwrap();
        assert_eq!(config.max_identifier_bytes, 64);
        assert_eq!(config.max_sampling_attempts, DEFAULT_MAX_SAMPLING_ATTEMPTS);
    }

    #[test]
    fn zero_limits_are_rejected() {
        assert!(matches!(
            ProtocolConfig::from_json(r#"{ "max_sampling_attempts": 0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            ProtocolConfig::from_json(r#"{ "max_identifier_bytes": 0 }"#),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            ProtocolConfig::from_json("not json"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_file_is_rejected() {
        assert!(ProtocolConfig::from_file("/nonexistent/pop-config.json").is_err());
    }
}
