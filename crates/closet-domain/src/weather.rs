//! Weather policy - weather conditions as data
//!
//! Each rule maps a condition on the request to a category the outfit must
//! include when the closet can supply one. Thresholds live here, not in the
//! engine.

use crate::{Category, RecommendationRequest};

/// Temperature (°C) below which the default policy treats the day as cold
pub const DEFAULT_COLD_THRESHOLD_C: f64 = 15.0;

/// A condition a request may satisfy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeatherCondition {
    /// Temperature strictly below the given Celsius value
    ColderThan(f64),

    /// The request reports rain
    Raining,
}

impl WeatherCondition {
    /// Whether the request satisfies this condition
    ///
    /// A request without a temperature never satisfies a temperature rule.
    pub fn holds(&self, request: &RecommendationRequest) -> bool {
        match self {
            WeatherCondition::ColderThan(threshold) => request
                .temperature_celsius()
                .is_some_and(|t| t < *threshold),
            WeatherCondition::Raining => request.raining(),
        }
    }

    /// Short lowercase description used in outfit notes
    pub fn describe(&self) -> &'static str {
        match self {
            WeatherCondition::ColderThan(_) => "cold weather",
            WeatherCondition::Raining => "rain",
        }
    }
}

/// A single `{condition -> required category}` entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRule {
    /// When the rule applies
    pub condition: WeatherCondition,

    /// Category that becomes required-if-available
    pub requires: Category,
}

/// Ordered table of weather rules
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPolicy {
    rules: Vec<WeatherRule>,
}

impl WeatherPolicy {
    /// Build a policy from explicit rules
    pub fn new(rules: Vec<WeatherRule>) -> Self {
        Self { rules }
    }

    /// The standard policy: cold or rain requires outerwear
    pub fn with_cold_threshold(threshold_c: f64) -> Self {
        Self::new(vec![
            WeatherRule {
                condition: WeatherCondition::ColderThan(threshold_c),
                requires: Category::Outerwear,
            },
            WeatherRule {
                condition: WeatherCondition::Raining,
                requires: Category::Outerwear,
            },
        ])
    }

    /// All rules in table order
    pub fn rules(&self) -> &[WeatherRule] {
        &self.rules
    }

    /// Conditions that make `category` required for this request
    ///
    /// Empty when weather does not require the category.
    pub fn reasons_for(
        &self,
        request: &RecommendationRequest,
        category: Category,
    ) -> Vec<WeatherCondition> {
        self.rules
            .iter()
            .filter(|rule| rule.requires == category && rule.condition.holds(request))
            .map(|rule| rule.condition)
            .collect()
    }

    /// Whether weather requires `category` for this request
    pub fn requires(&self, request: &RecommendationRequest, category: Category) -> bool {
        !self.reasons_for(request, category).is_empty()
    }
}

impl Default for WeatherPolicy {
    fn default() -> Self {
        Self::with_cold_threshold(DEFAULT_COLD_THRESHOLD_C)
    }
}
