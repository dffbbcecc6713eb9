//! Catalog module - the closed enumerations garments are described with

use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Garment category
///
/// The declaration order is the order garments appear in an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Shirts, blouses, sweaters
    Top,

    /// Trousers, skirts, shorts
    Bottom,

    /// Jackets and coats
    Outerwear,

    /// Any footwear
    Shoes,

    /// Belts, scarves, hats, jewelry
    Accessory,
}

impl Category {
    /// Every category, in outfit order
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessory,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessory => "accessory",
        }
    }

    /// Parse a category from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "top" => Some(Category::Top),
            "bottom" => Some(Category::Bottom),
            "outerwear" => Some(Category::Outerwear),
            "shoes" => Some(Category::Shoes),
            "accessory" => Some(Category::Accessory),
            _ => None,
        }
    }

    /// Whether an outfit without this category counts as incomplete
    pub fn is_essential(&self) -> bool {
        match self {
            Category::Top | Category::Bottom => true,
            Category::Outerwear | Category::Shoes | Category::Accessory => false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::invalid(format!("unknown category: {:?}", s)))
    }
}

/// Declared formality of a garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formality {
    /// Everyday wear
    Casual,

    /// Sportswear worn casually
    Athleisure,

    /// Office wear
    Business,

    /// Evening and ceremony wear
    Formal,
}

impl Formality {
    /// Every formality level
    pub const ALL: [Formality; 4] = [
        Formality::Casual,
        Formality::Athleisure,
        Formality::Business,
        Formality::Formal,
    ];

    /// Get the formality name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::Athleisure => "athleisure",
            Formality::Business => "business",
            Formality::Formal => "formal",
        }
    }

    /// Parse a formality from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Some(Formality::Casual),
            "athleisure" => Some(Formality::Athleisure),
            "business" => Some(Formality::Business),
            "formal" => Some(Formality::Formal),
            _ => None,
        }
    }

    /// Parse an optional wire value where absent and blank both mean "unknown"
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, DomainError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }

    /// Whether this formality is the one an occasion calls for
    pub fn suits(&self, occasion: Occasion) -> bool {
        *self == occasion.formality()
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::invalid(format!("unknown formality: {:?}", s)))
    }
}

/// Occasion an outfit is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occasion {
    /// Everyday outing
    Casual,

    /// Office or meeting
    Business,

    /// Evening event or ceremony
    Formal,

    /// Gym, errands, sport
    Athleisure,
}

impl Occasion {
    /// Get the occasion name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Occasion::Casual => "casual",
            Occasion::Business => "business",
            Occasion::Formal => "formal",
            Occasion::Athleisure => "athleisure",
        }
    }

    /// Parse an occasion from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Some(Occasion::Casual),
            "business" => Some(Occasion::Business),
            "formal" => Some(Occasion::Formal),
            "athleisure" => Some(Occasion::Athleisure),
            _ => None,
        }
    }

    /// The garment formality that exactly matches this occasion
    pub fn formality(&self) -> Formality {
        match self {
            Occasion::Casual => Formality::Casual,
            Occasion::Business => Formality::Business,
            Occasion::Formal => Formality::Formal,
            Occasion::Athleisure => Formality::Athleisure,
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::invalid(format!("unknown occasion: {:?}", s)))
    }
}
