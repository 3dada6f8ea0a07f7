//! Unit types and cost-base conversion
//!
//! Catalog prices are denominated per kilogram or per liter; line items
//! may use the matching sub-units (g, ml), normalized by division by 1000.

use serde::{Deserialize, Serialize};

/// Base unit a catalog price is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseUnit {
    /// Priced per kilogram (solids, powders)
    #[serde(rename = "kg")]
    Kg,
    /// Priced per liter (liquids)
    #[serde(rename = "L")]
    L,
}

impl BaseUnit {
    /// Get the unit string as it appears in persisted tables
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseUnit::Kg => "kg",
            BaseUnit::L => "L",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "kg" => Some(BaseUnit::Kg),
            "L" => Some(BaseUnit::L),
            _ => None,
        }
    }
}

/// Unit of a batch or recipe line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "ml")]
    Ml,
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Milliliters per liter
pub const ML_PER_L: f64 = 1000.0;

impl Unit {
    /// Get the unit string as it appears in persisted tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "L",
            Unit::Ml => "ml",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "kg" => Some(Unit::Kg),
            "g" => Some(Unit::G),
            "L" => Some(Unit::L),
            "ml" => Some(Unit::Ml),
            _ => None,
        }
    }

    /// Whether this unit measures volume and therefore needs a density
    /// entry to resolve to a physical weight
    pub fn is_volume(&self) -> bool {
        matches!(self, Unit::L | Unit::Ml)
    }
}

/// Convert a quantity to its base-unit magnitude for cost purposes.
///
/// `g` and `ml` divide by 1000; `kg` and `L` pass through. This is a
/// cost-base conversion rather than a mass conversion: catalog prices are
/// always per kg or per L, so the one factor serves both axes.
pub fn to_base(qty: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Kg | Unit::L => qty,
        Unit::G => qty / G_PER_KG,
        Unit::Ml => qty / ML_PER_L,
    }
}
