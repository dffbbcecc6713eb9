//! Closet Recommendation Engine
//!
//! Picks one garment per category from an inventory snapshot for a given
//! occasion and weather. The engine is pure: it takes no locks, performs no
//! I/O and keeps no state between calls, so independent requests can run in
//! parallel against their own snapshots.
//!
//! An unmatched closet is a result, not an error: the engine always returns
//! an [`Outfit`](closet_domain::Outfit), empty with notes when top or bottom
//! coverage is missing.
//!
//! # Examples
//!
//! ```
//! use closet_domain::{Category, Formality, Garment, GarmentId, Occasion, RecommendationRequest};
//! use closet_engine::Stylist;
//!
//! let closet = vec![
//!     Garment {
//!         id: GarmentId::new(),
//!         name: "Tee".to_string(),
//!         category: Category::Top,
//!         formality: Some(Formality::Casual),
//!         image_reference: None,
//!     },
//!     Garment {
//!         id: GarmentId::new(),
//!         name: "Jeans".to_string(),
//!         category: Category::Bottom,
//!         formality: None,
//!         image_reference: None,
//!     },
//! ];
//!
//! let stylist = Stylist::default();
//! let outfit = stylist.recommend(&closet, &RecommendationRequest::for_occasion(Occasion::Casual));
//! assert_eq!(outfit.items.len(), 2);
//! assert!(outfit.notes.is_none());
//! ```

#![warn(missing_docs)]

pub mod config;
mod select;
mod stylist;

pub use config::{EngineConfig, OuterwearPolicy};
pub use stylist::Stylist;

use thiserror::Error;

/// Errors raised while configuring the engine
///
/// Recommending never fails; only building a [`Stylist`] can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Configuration value out of range
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}
