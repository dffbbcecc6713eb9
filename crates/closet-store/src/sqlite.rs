//! SQLite-backed inventory

use crate::StoreError;
use closet_domain::{Category, ClosetStore, Formality, Garment, GarmentId, NewGarment};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

const SELECT_GARMENT: &str =
    "SELECT id, name, category, formality, image_reference FROM garments";

/// SQLite-based implementation of ClosetStore
///
/// A single connection sits behind a mutex, which serializes every
/// statement. Insertion order is the table's autoincrement `seq` column.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a store at the given path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use closet_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("closet.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        conn.execute_batch(include_str!("schema.sql"))?;
        info!("Opened SQLite closet at {}", path.as_ref().display());

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Convert GarmentId to bytes for storage
    fn id_to_bytes(id: GarmentId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to GarmentId
    fn bytes_to_id(bytes: &[u8]) -> Result<GarmentId, StoreError> {
        let arr: [u8; 16] = bytes.try_into().map_err(|_| {
            StoreError::InvalidData(format!(
                "Expected 16 bytes for GarmentId, got {}",
                bytes.len()
            ))
        })?;
        Ok(GarmentId::from_value(u128::from_be_bytes(arr)))
    }

    fn conversion_error(column: usize, kind: rusqlite::types::Type, e: StoreError) -> rusqlite::Error {
        rusqlite::Error::FromSqlConversionFailure(column, kind, Box::new(e))
    }

    fn row_to_garment(row: &Row<'_>) -> rusqlite::Result<Garment> {
        use rusqlite::types::Type;

        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_id(&id_bytes).map_err(|e| Self::conversion_error(0, Type::Blob, e))?;

        let category: String = row.get(2)?;
        let category = Category::parse(&category).ok_or_else(|| {
            Self::conversion_error(
                2,
                Type::Text,
                StoreError::InvalidData(format!("Unknown category: {}", category)),
            )
        })?;

        let formality: Option<String> = row.get(3)?;
        let formality = formality
            .map(|f| {
                Formality::parse(&f).ok_or_else(|| {
                    Self::conversion_error(
                        3,
                        Type::Text,
                        StoreError::InvalidData(format!("Unknown formality: {}", f)),
                    )
                })
            })
            .transpose()?;

        Ok(Garment {
            id,
            name: row.get(1)?,
            category,
            formality,
            image_reference: row.get(4)?,
        })
    }
}

impl ClosetStore for SqliteStore {
    type Error = StoreError;

    fn add_garment(&self, garment: NewGarment) -> Result<Garment, Self::Error> {
        let conn = self.conn();

        let mut id = GarmentId::new();
        loop {
            let taken = conn
                .query_row(
                    "SELECT 1 FROM garments WHERE id = ?1",
                    params![Self::id_to_bytes(id)],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            if !taken {
                break;
            }
            id = GarmentId::new();
        }

        let garment = Garment::from_new(id, garment);
        conn.execute(
            "INSERT INTO garments (id, name, category, formality, image_reference)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                Self::id_to_bytes(garment.id),
                &garment.name,
                garment.category.as_str(),
                garment.formality.map(|f| f.as_str()),
                &garment.image_reference,
            ],
        )?;

        info!(
            "Added garment {} ({}, {})",
            garment.id, garment.name, garment.category
        );
        Ok(garment)
    }

    fn list_garments(&self) -> Result<Vec<Garment>, Self::Error> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("{} ORDER BY seq", SELECT_GARMENT))?;
        let garments = stmt
            .query_map([], Self::row_to_garment)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Listed {} garments", garments.len());
        Ok(garments)
    }

    fn get_garment(&self, id: GarmentId) -> Result<Garment, Self::Error> {
        let conn = self.conn();
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_GARMENT),
            params![Self::id_to_bytes(id)],
            Self::row_to_garment,
        )
        .optional()?
        .ok_or(StoreError::NotFound(id))
    }

    fn remove_garment(&self, id: GarmentId) -> Result<bool, Self::Error> {
        let conn = self.conn();
        let deleted = conn.execute(
            "DELETE FROM garments WHERE id = ?1",
            params![Self::id_to_bytes(id)],
        )?;

        if deleted > 0 {
            info!("Removed garment {}", id);
        } else {
            info!("Remove of absent garment {} ignored", id);
        }
        Ok(deleted > 0)
    }
}
