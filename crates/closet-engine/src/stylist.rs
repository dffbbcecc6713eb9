//! The recommendation pass itself

use crate::config::{EngineConfig, OuterwearPolicy};
use crate::select::pick;
use crate::EngineError;
use closet_domain::{
    Category, Garment, Occasion, Outfit, RecommendationRequest, WeatherCondition, WeatherPolicy,
};

/// Builds outfits from inventory snapshots
///
/// Holds only configuration; [`Stylist::recommend`] is a pure function of
/// its arguments.
#[derive(Debug, Clone)]
pub struct Stylist {
    policy: WeatherPolicy,
    outerwear: OuterwearPolicy,
}

impl Stylist {
    /// Create a stylist from validated configuration
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::with_policy(config.weather_policy(), config.outerwear))
    }

    /// Create a stylist with an explicit weather rule table
    pub fn with_policy(policy: WeatherPolicy, outerwear: OuterwearPolicy) -> Self {
        Self { policy, outerwear }
    }

    /// The weather rules in effect
    pub fn weather_policy(&self) -> &WeatherPolicy {
        &self.policy
    }

    /// Recommend an outfit for `request` from `snapshot`
    ///
    /// `snapshot` must be in insertion order; ties between equally good
    /// garments go to the earliest one. Never fails: when top or bottom has
    /// no candidate the outfit is empty and `notes` says what is missing.
    pub fn recommend(&self, snapshot: &[Garment], request: &RecommendationRequest) -> Outfit {
        let occasion = request.occasion();

        let missing: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| c.is_essential() && pick(snapshot, *c, occasion).is_none())
            .collect();
        if !missing.is_empty() {
            return Outfit::empty(occasion, missing_note(&missing, occasion));
        }

        let mut items = Vec::new();
        let mut notes = Vec::new();

        for category in Category::ALL {
            let reasons = self.policy.reasons_for(request, category);
            let candidate = pick(snapshot, category, occasion);

            match candidate {
                Some((garment, _)) if !reasons.is_empty() || self.includes_freely(category) => {
                    if !reasons.is_empty() {
                        notes.push(format!("Added {} for {}.", category, describe(&reasons)));
                    }
                    items.push(garment.clone());
                }
                Some(_) => {}
                None if !reasons.is_empty() => {
                    notes.push(format!(
                        "{} but no suitable {} available.",
                        capitalize(&describe(&reasons)),
                        category
                    ));
                }
                None => {}
            }
        }

        Outfit {
            occasion,
            items,
            notes: (!notes.is_empty()).then(|| notes.join(" ")),
        }
    }

    /// Whether a category is worn whenever a candidate exists
    fn includes_freely(&self, category: Category) -> bool {
        match category {
            Category::Top | Category::Bottom | Category::Shoes | Category::Accessory => true,
            Category::Outerwear => self.outerwear == OuterwearPolicy::Opportunistic,
        }
    }
}

impl Default for Stylist {
    fn default() -> Self {
        Self::with_policy(WeatherPolicy::default(), OuterwearPolicy::default())
    }
}

fn missing_note(missing: &[Category], occasion: Occasion) -> String {
    let names: Vec<String> = missing.iter().map(|c| format!("one {}", c)).collect();
    format!(
        "No valid combo yet: add at least {} suitable for {} occasions.",
        names.join(" and "),
        occasion
    )
}

fn describe(reasons: &[WeatherCondition]) -> String {
    let mut parts: Vec<&str> = reasons.iter().map(|r| r.describe()).collect();
    parts.dedup();
    parts.join(" and ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
