//! # Configuration State
//!
//! Stores host configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CALC_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Default number of entries kept on the history tape.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// How each display update is written to stdout
    pub output: OutputFormat,

    /// Print the expression next to the display (text output only)
    pub show_expression: bool,

    /// Maximum entries on the history tape (0 disables it)
    pub history_limit: usize,
}

/// Output format for display updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain display text, one line per update
    #[default]
    Text,

    /// One JSON snapshot per update
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Output: text
    /// - Expression shown: no
    /// - History: 50 entries
    fn default() -> Self {
        ConfigState {
            output: OutputFormat::Text,
            show_expression: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CALC_OUTPUT`: `text` or `json`
    /// - `CALC_SHOW_EXPRESSION`: `true` or `false`
    /// - `CALC_HISTORY_LIMIT`: non-negative integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(output) = lookup("CALC_OUTPUT") {
            config.output = output
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CALC_OUTPUT".to_string()))?;
        }

        if let Some(show) = lookup("CALC_SHOW_EXPRESSION") {
            config.show_expression = show
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CALC_SHOW_EXPRESSION".to_string()))?;
        }

        if let Some(limit) = lookup("CALC_HISTORY_LIMIT") {
            config.history_limit = limit
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CALC_HISTORY_LIMIT".to_string()))?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.history_limit, 50);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("CALC_OUTPUT", "JSON"),
            ("CALC_SHOW_EXPRESSION", "true"),
            ("CALC_HISTORY_LIMIT", " 5 "),
        ]))
        .unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.show_expression);
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ConfigState::from_lookup(lookup(&[("CALC_HISTORY_LIMIT", "-1")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("CALC_HISTORY_LIMIT".to_string()));
        assert_eq!(err.to_string(), "Invalid value for CALC_HISTORY_LIMIT");

        assert!(ConfigState::from_lookup(lookup(&[("CALC_OUTPUT", "xml")])).is_err());
        assert!(ConfigState::from_lookup(lookup(&[("CALC_SHOW_EXPRESSION", "yes")])).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["output"], "text");
        assert_eq!(json["showExpression"], false);
        assert_eq!(json["historyLimit"], 50);
    }
}
