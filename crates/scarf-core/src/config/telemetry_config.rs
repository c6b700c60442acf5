//! Telemetry client configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Configuration for the event dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Collection endpoint URL. Required before a dispatcher can be built.
    pub endpoint: Option<String>,
    /// Default request deadline in seconds. Fractions allowed.
    pub timeout_secs: f64,
    /// Product token reported in the user-agent.
    pub product: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            product: defaults::DEFAULT_PRODUCT.to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Config pointing at `endpoint` with every other field defaulted.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.endpoint.as_deref() {
            None => return Err(ConfigError::MissingEndpoint),
            Some(url) if url.trim().is_empty() => return Err(ConfigError::BlankEndpoint),
            Some(_) => {}
        }
        if !self.timeout_secs.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                message: format!("must be a finite number of seconds, got {}", self.timeout_secs),
            });
        }
        if self.product.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "product".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = TelemetryConfig::from_toml("").unwrap();
        assert_eq!(config, TelemetryConfig::default());
        assert_eq!(config.timeout_secs, 3.0);
        assert_eq!(config.product, "scarf-rust");
    }

    #[test]
    fn missing_endpoint_fails_validation() {
        let err = TelemetryConfig::default().validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint));
    }
}
