//! Garment module - the unit of inventory

use crate::{Category, DomainError, Formality};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a garment, backed by a UUIDv7
///
/// UUIDv7 values are time-ordered and need no coordination to generate,
/// so two garments never share an id and ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GarmentId(u128);

impl GarmentId {
    /// Generate a new UUIDv7-based GarmentId
    ///
    /// # Examples
    ///
    /// ```
    /// use closet_domain::GarmentId;
    ///
    /// let id = GarmentId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a GarmentId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for GarmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GarmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl FromStr for GarmentId {
    type Err = DomainError;

    /// Parse a GarmentId from its hyphenated UUID form
    ///
    /// # Examples
    ///
    /// ```
    /// use closet_domain::GarmentId;
    ///
    /// let id = GarmentId::new();
    /// let parsed: GarmentId = id.to_string().parse().unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s.trim())
            .map(|u| Self(u.as_u128()))
            .map_err(|e| DomainError::invalid(format!("invalid garment id {:?}: {}", s, e)))
    }
}

/// A garment in the closet
///
/// Only the store creates garments, so every instance carries an id the
/// store assigned and a name that was validated on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct Garment {
    /// Unique identifier
    pub id: GarmentId,

    /// Display name, trimmed and never empty
    pub name: String,

    /// Category from the closed set
    pub category: Category,

    /// Declared formality; `None` is a wildcard eligible for any occasion
    pub formality: Option<Formality>,

    /// Opaque handle to a stored image
    pub image_reference: Option<String>,
}

impl Garment {
    /// Materialize a validated [`NewGarment`] under the given id
    pub fn from_new(id: GarmentId, new: NewGarment) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            formality: new.formality,
            image_reference: new.image_reference,
        }
    }
}

/// Validated input for adding a garment
#[derive(Debug, Clone, PartialEq)]
pub struct NewGarment {
    name: String,
    category: Category,
    formality: Option<Formality>,
    image_reference: Option<String>,
}

impl NewGarment {
    /// Build a new garment description
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the name is empty after trimming
    pub fn new(
        name: impl Into<String>,
        category: Category,
        formality: Option<Formality>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid("garment name cannot be empty"));
        }

        Ok(Self {
            name: trimmed.to_string(),
            category,
            formality,
            image_reference: None,
        })
    }

    /// Build a new garment from raw wire strings
    ///
    /// Blank formality is treated as absent; unknown values are rejected.
    pub fn parse(
        name: &str,
        category: &str,
        formality: Option<&str>,
    ) -> Result<Self, DomainError> {
        let category = category.parse()?;
        let formality = Formality::parse_optional(formality)?;
        Self::new(name, category, formality)
    }

    /// Attach an image reference; blank references are dropped
    pub fn with_image_reference(mut self, reference: Option<String>) -> Self {
        self.image_reference = reference.filter(|r| !r.trim().is_empty());
        self
    }

    /// Trimmed display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Declared formality
    pub fn formality(&self) -> Option<Formality> {
        self.formality
    }

    /// Image reference
    pub fn image_reference(&self) -> Option<&str> {
        self.image_reference.as_deref()
    }
}
