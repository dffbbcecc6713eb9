//! In-memory inventory backed by an insertion-ordered vector

use crate::StoreError;
use closet_domain::{ClosetStore, Garment, GarmentId, NewGarment};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// In-memory implementation of ClosetStore
///
/// One writer at a time, any number of concurrent readers. Every mutation is
/// a single `push` or `retain` under the write lock, so a poisoned lock still
/// guards a consistent vector and is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct MemoryStore {
    garments: RwLock<Vec<Garment>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of garments currently stored
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no garments
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Garment>> {
        self.garments.read().unwrap_or_else(|poisoned| {
            warn!("Recovering poisoned inventory lock (read)");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Garment>> {
        self.garments.write().unwrap_or_else(|poisoned| {
            warn!("Recovering poisoned inventory lock (write)");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl ClosetStore for MemoryStore {
    type Error = StoreError;

    fn add_garment(&self, garment: NewGarment) -> Result<Garment, Self::Error> {
        let mut garments = self.write();

        let mut id = GarmentId::new();
        while garments.iter().any(|g| g.id == id) {
            id = GarmentId::new();
        }

        let garment = Garment::from_new(id, garment);
        garments.push(garment.clone());

        info!(
            "Added garment {} ({}, {})",
            garment.id, garment.name, garment.category
        );
        Ok(garment)
    }

    fn list_garments(&self) -> Result<Vec<Garment>, Self::Error> {
        Ok(self.read().clone())
    }

    fn get_garment(&self, id: GarmentId) -> Result<Garment, Self::Error> {
        self.read()
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn remove_garment(&self, id: GarmentId) -> Result<bool, Self::Error> {
        let mut garments = self.write();
        let before = garments.len();
        garments.retain(|g| g.id != id);
        let removed = garments.len() < before;

        if removed {
            info!("Removed garment {}", id);
        } else {
            info!("Remove of absent garment {} ignored", id);
        }
        Ok(removed)
    }
}
