//! Outfit module - recommendation requests and their answers

use crate::{DomainError, Garment, Occasion};

/// What the caller wants to wear today
///
/// Only built through [`RecommendationRequest::new`] or
/// [`RecommendationRequest::for_occasion`], so the temperature is always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationRequest {
    occasion: Occasion,
    temperature_celsius: Option<f64>,
    raining: bool,
}

impl RecommendationRequest {
    /// Build a request, rejecting non-finite temperatures
    ///
    /// # Errors
    /// Returns `InvalidArgument` for NaN or infinite temperatures
    pub fn new(
        occasion: Occasion,
        temperature_celsius: Option<f64>,
        raining: bool,
    ) -> Result<Self, DomainError> {
        if let Some(t) = temperature_celsius {
            if !t.is_finite() {
                return Err(DomainError::invalid(format!(
                    "temperature must be a finite number, got {}",
                    t
                )));
            }
        }

        Ok(Self {
            occasion,
            temperature_celsius,
            raining,
        })
    }

    /// A request with no weather information
    pub fn for_occasion(occasion: Occasion) -> Self {
        Self {
            occasion,
            temperature_celsius: None,
            raining: false,
        }
    }

    /// Occasion to dress for
    pub fn occasion(&self) -> Occasion {
        self.occasion
    }

    /// Temperature in Celsius; `None` means weather is not considered
    pub fn temperature_celsius(&self) -> Option<f64> {
        self.temperature_celsius
    }

    /// Whether it is raining
    pub fn raining(&self) -> bool {
        self.raining
    }
}

/// A recommended outfit
///
/// Built fresh for every request. An empty `items` list is a valid answer,
/// in which case `notes` explains what is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Outfit {
    /// Occasion echoed from the request
    pub occasion: Occasion,

    /// Chosen garments in category order
    pub items: Vec<Garment>,

    /// Human-readable explanation of adjustments or shortfalls
    pub notes: Option<String>,
}

impl Outfit {
    /// An outfit with no items and an explanation
    pub fn empty(occasion: Occasion, notes: impl Into<String>) -> Self {
        Self {
            occasion,
            items: Vec::new(),
            notes: Some(notes.into()),
        }
    }

    /// Whether nothing could be recommended
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_non_finite_temperature() {
        for t in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = RecommendationRequest::new(Occasion::Casual, Some(t), false).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_request_accepts_negative_temperature() {
        let req = RecommendationRequest::new(Occasion::Formal, Some(-12.5), true).unwrap();
        assert_eq!(req.occasion(), Occasion::Formal);
        assert_eq!(req.temperature_celsius(), Some(-12.5));
        assert!(req.raining());
    }

    #[test]
    fn test_for_occasion_has_no_weather() {
        let req = RecommendationRequest::for_occasion(Occasion::Athleisure);
        assert_eq!(req.temperature_celsius(), None);
        assert!(!req.raining());
    }

    #[test]
    fn test_empty_outfit_has_notes() {
        let outfit = Outfit::empty(Occasion::Business, "nothing to wear");
        assert!(outfit.is_empty());
        assert_eq!(outfit.notes.as_deref(), Some("nothing to wear"));
    }
}
