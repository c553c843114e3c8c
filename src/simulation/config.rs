// src/simulation/config.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("start balance must be finite, got {0}")]
    NonFiniteStart(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Balance held by the device before day 0.
    pub start_balance: f64,
    /// Emit a progress log line every this many days (0 = never).
    pub log_every: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_balance: 0.0,
            log_every: 7,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_balance.is_finite() {
            return Err(ConfigError::NonFiniteStart(self.start_balance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SimulationConfig::from_json_str(r#"{ "start_balance": 250.0 }"#).unwrap();
        assert_eq!(config.start_balance, 250.0);
        assert_eq!(config.log_every, 7);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimulationConfig::from_json_str("{ start_balance: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
