//! JSON request and response shapes
//!
//! Field names match what the mobile client sends and reads. Unknown request
//! fields (such as the client's `user_id`) are ignored.

use closet_domain::{DomainError, Garment, NewGarment, Occasion, Outfit, RecommendationRequest};
use serde::{Deserialize, Serialize};

/// A garment as listed and returned by the closet endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentRecord {
    /// Garment id (UUID string)
    pub id: String,
    /// Display name
    pub name: String,
    /// Category name
    pub category: String,
    /// Formality name, `null` when unknown
    pub formality: Option<String>,
    /// Image handle, `null` when none
    pub image_url: Option<String>,
}

impl From<&Garment> for GarmentRecord {
    fn from(garment: &Garment) -> Self {
        Self {
            id: garment.id.to_string(),
            name: garment.name.clone(),
            category: garment.category.as_str().to_string(),
            formality: garment.formality.map(|f| f.as_str().to_string()),
            image_url: garment.image_reference.clone(),
        }
    }
}

/// Body of `POST /closet`
#[derive(Debug, Clone, Deserialize)]
pub struct AddGarmentRequest {
    /// Display name
    pub name: String,
    /// Category name
    pub category: String,
    /// Optional formality name
    #[serde(default)]
    pub formality: Option<String>,
    /// Optional image handle
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TryFrom<AddGarmentRequest> for NewGarment {
    type Error = DomainError;

    fn try_from(request: AddGarmentRequest) -> Result<Self, Self::Error> {
        Ok(
            NewGarment::parse(&request.name, &request.category, request.formality.as_deref())?
                .with_image_reference(request.image_url),
        )
    }
}

/// Body of `POST /recommendations`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    /// Occasion name
    pub occasion: String,
    /// Temperature in Celsius
    #[serde(default)]
    pub temp_c: Option<f64>,
    /// Whether it is raining; absent means no
    #[serde(default)]
    pub raining: Option<bool>,
}

impl TryFrom<RecommendRequest> for RecommendationRequest {
    type Error = DomainError;

    fn try_from(request: RecommendRequest) -> Result<Self, Self::Error> {
        let occasion: Occasion = request.occasion.parse()?;
        RecommendationRequest::new(occasion, request.temp_c, request.raining.unwrap_or(false))
    }
}

/// One garment inside an outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitItemRecord {
    /// Garment id
    pub id: String,
    /// Display name
    pub name: String,
    /// Category name
    pub category: String,
}

/// Response of `POST /recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecord {
    /// Occasion echoed from the request
    pub occasion: String,
    /// Chosen garments in category order
    pub items: Vec<OutfitItemRecord>,
    /// Explanation, `null` when there is nothing to say
    pub notes: Option<String>,
}

impl From<&Outfit> for OutfitRecord {
    fn from(outfit: &Outfit) -> Self {
        Self {
            occasion: outfit.occasion.as_str().to_string(),
            items: outfit
                .items
                .iter()
                .map(|g| OutfitItemRecord {
                    id: g.id.to_string(),
                    name: g.name.clone(),
                    category: g.category.as_str().to_string(),
                })
                .collect(),
            notes: outfit.notes.clone(),
        }
    }
}

/// Response of `DELETE /closet/:id`: the inventory after removal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveResponse {
    /// Always true; removal is idempotent
    pub ok: bool,
    /// Remaining garments in insertion order
    pub items: Vec<GarmentRecord>,
}

/// Response of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" when the store answers
    pub status: String,
    /// Number of garments in the closet
    pub garments: usize,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_domain::{Category, Formality, GarmentId};

    #[test]
    fn test_garment_record_nulls() {
        let garment = Garment {
            id: GarmentId::new(),
            name: "Scarf".to_string(),
            category: Category::Accessory,
            formality: None,
            image_reference: None,
        };

        let json = serde_json::to_value(GarmentRecord::from(&garment)).unwrap();
        assert_eq!(json["category"], "accessory");
        assert!(json["formality"].is_null());
        assert!(json["image_url"].is_null());
        assert_eq!(json["id"], garment.id.to_string());
    }

    #[test]
    fn test_add_request_ignores_client_extras() {
        let request: AddGarmentRequest = serde_json::from_str(
            r#"{"user_id": "demo", "name": "Tee", "category": "top", "formality": "casual", "image_url": null}"#,
        )
        .unwrap();

        let new = NewGarment::try_from(request).unwrap();
        assert_eq!(new.category(), Category::Top);
        assert_eq!(new.formality(), Some(Formality::Casual));
        assert_eq!(new.image_reference(), None);
    }

    #[test]
    fn test_recommend_request_defaults() {
        let request: RecommendRequest = serde_json::from_str(r#"{"occasion": "formal"}"#).unwrap();
        let request = RecommendationRequest::try_from(request).unwrap();
        assert_eq!(request.occasion(), Occasion::Formal);
        assert_eq!(request.temperature_celsius(), None);
        assert!(!request.raining());
    }

    #[test]
    fn test_recommend_request_rejects_unknown_occasion() {
        let request: RecommendRequest =
            serde_json::from_str(r#"{"occasion": "wedding", "temp_c": 20.0}"#).unwrap();
        assert!(RecommendationRequest::try_from(request).is_err());
    }

    #[test]
    fn test_empty_outfit_serializes_notes() {
        let outfit = Outfit::empty(Occasion::Casual, "add a bottom");
        let json = serde_json::to_value(OutfitRecord::from(&outfit)).unwrap();
        assert_eq!(json["occasion"], "casual");
        assert_eq!(json["items"], serde_json::json!([]));
        assert_eq!(json["notes"], "add a bottom");
    }
}
