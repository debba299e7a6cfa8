//! Simulated-backend configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. There is exactly one knob: how much artificial latency the
//! mock network adds.

use std::env;

/// Simulated-backend configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Multiplier applied to every operation's base latency.
    ///
    /// `1.0` reproduces the storefront's stock delays (300-1500 ms per
    /// call), `0.0` disables sleeping entirely - tests run with that.
    pub latency_scale: f64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `BAZAAR_LATENCY_SCALE`: non-negative float, default `1.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        let latency_scale = env::var("BAZAAR_LATENCY_SCALE")
            .unwrap_or_else(|_| "1.0".to_string())
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidValue("BAZAAR_LATENCY_SCALE".to_string()))?;

        if !latency_scale.is_finite() || latency_scale < 0.0 {
            return Err(ConfigError::InvalidValue("BAZAAR_LATENCY_SCALE".to_string()));
        }

        Ok(ApiConfig { latency_scale })
    }

    /// A configuration with latency disabled.
    pub fn instant() -> Self {
        ApiConfig { latency_scale: 0.0 }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig { latency_scale: 1.0 }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_one() {
        assert_eq!(ApiConfig::default().latency_scale, 1.0);
    }

    #[test]
    fn test_instant_disables_latency() {
        assert_eq!(ApiConfig::instant().latency_scale, 0.0);
    }
}
