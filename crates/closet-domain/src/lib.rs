//! Closet Domain Layer
//!
//! This crate defines the garment catalog: the entities, closed enumerations
//! and value objects shared by the store, the recommendation engine and the
//! HTTP boundary. It holds no I/O and no serialization concerns.
//!
//! ## Key Concepts
//!
//! - **Garment**: a single clothing item with a category and optional formality
//! - **Category / Formality / Occasion**: closed sets, matched exhaustively
//! - **RecommendationRequest**: occasion plus optional weather conditions
//! - **Outfit**: the engine's ephemeral answer, never persisted
//! - **WeatherPolicy**: weather conditions as data, mapped to category requirements
//!
//! ## Architecture
//!
//! - Pure data and validation only
//! - Storage lives behind the [`traits::ClosetStore`] trait
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod garment;
pub mod outfit;
pub mod traits;
pub mod weather;

// Re-exports for convenience
pub use catalog::{Category, Formality, Occasion};
pub use error::DomainError;
pub use garment::{Garment, GarmentId, NewGarment};
pub use outfit::{Outfit, RecommendationRequest};
pub use traits::ClosetStore;
pub use weather::{WeatherCondition, WeatherPolicy, WeatherRule};
