//! Closet Storage Layer
//!
//! Implements the [`ClosetStore`](closet_domain::ClosetStore) trait twice:
//!
//! - [`MemoryStore`]: the default, an insertion-ordered vector behind a `RwLock`
//! - [`SqliteStore`]: a durable backend for deployments that keep the closet
//!   across restarts
//!
//! Both serialize mutations behind a single lock, so concurrent adds never
//! lose an insertion and readers never observe a half-written garment.
//!
//! # Examples
//!
//! ```
//! use closet_domain::{Category, ClosetStore, NewGarment};
//! use closet_store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let shirt = store
//!     .add_garment(NewGarment::new("Oxford shirt", Category::Top, None).unwrap())
//!     .unwrap();
//! assert_eq!(store.list_garments().unwrap(), vec![shirt]);
//! ```

#![warn(missing_docs)]

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use closet_domain::GarmentId;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Garment not found
    #[error("Garment not found: {0}")]
    NotFound(GarmentId),

    /// Stored data could not be read back as a garment
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
