//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain and storage.
//! Implementations live in closet-store.

use crate::{Garment, GarmentId, NewGarment};

/// Trait for storing and retrieving garments
///
/// Receivers are `&self`: implementations serialize mutations internally so
/// one store can be shared across request handlers.
pub trait ClosetStore: Send + Sync {
    /// Error type for store operations
    type Error;

    /// Add a garment, assigning it a fresh unique id
    fn add_garment(&self, garment: NewGarment) -> Result<Garment, Self::Error>;

    /// All garments in insertion order, as one consistent snapshot
    fn list_garments(&self) -> Result<Vec<Garment>, Self::Error>;

    /// Get a garment by id, failing with a not-found error if absent
    fn get_garment(&self, id: GarmentId) -> Result<Garment, Self::Error>;

    /// Remove a garment by id
    ///
    /// Idempotent: removing an absent id succeeds. Returns whether a garment
    /// was actually removed.
    fn remove_garment(&self, id: GarmentId) -> Result<bool, Self::Error>;
}
