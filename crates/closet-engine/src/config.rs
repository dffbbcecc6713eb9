//! Engine configuration
//!
//! Loaded from the `[engine]` table of the API config file.

use crate::EngineError;
use closet_domain::weather::DEFAULT_COLD_THRESHOLD_C;
use closet_domain::WeatherPolicy;
use serde::{Deserialize, Serialize};

/// When outerwear is added without a weather requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OuterwearPolicy {
    /// Include a compatible outerwear piece whenever the closet has one
    #[default]
    Opportunistic,

    /// Include outerwear only when the weather policy requires it
    WeatherOnly,
}

/// Tunables for the recommendation engine
///
/// # Examples
///
/// ```
/// use closet_engine::{EngineConfig, OuterwearPolicy};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.cold_threshold_c, 15.0);
/// assert_eq!(config.outerwear, OuterwearPolicy::Opportunistic);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Temperature in °C below which outerwear becomes required
    /// Default: 15.0
    pub cold_threshold_c: f64,

    /// Whether outerwear is included when weather does not require it
    /// Default: opportunistic
    pub outerwear: OuterwearPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cold_threshold_c: DEFAULT_COLD_THRESHOLD_C,
            outerwear: OuterwearPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.cold_threshold_c.is_finite() {
            return Err(EngineError::InvalidConfig(format!(
                "cold_threshold_c must be finite, got {}",
                self.cold_threshold_c
            )));
        }
        Ok(())
    }

    /// The weather rule table this configuration describes
    pub fn weather_policy(&self) -> WeatherPolicy {
        WeatherPolicy::with_cold_threshold(self.cold_threshold_c)
    }
}
