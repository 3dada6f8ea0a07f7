//! Ingredient catalog model
//!
//! Package-based pricing: a catalog entry records the package size in its
//! base unit and the package price; the unit cost is derived, never stored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{StateError, StateResult};
use crate::costing::BaseUnit;
use crate::store::AppState;

/// A catalog entry priced by package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unit the price is denominated in (per kg or per L)
    pub unit: BaseUnit,
    /// Package size in the base unit
    pub package_qty: f64,
    /// Price of one package
    pub package_price: f64,
}

/// Catalog table keyed by ingredient name, insertion-ordered
pub type Catalog = IndexMap<String, Ingredient>;

/// Densities in kg per liter, keyed by ingredient name.
/// Absence of an entry is a valid state ("unknown density").
pub type DensityTable = IndexMap<String, f64>;

/// Data for updating a catalog entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientUpdate {
    pub unit: Option<BaseUnit>,
    pub package_qty: Option<f64>,
    pub package_price: Option<f64>,
}

impl Ingredient {
    /// Add a new ingredient to the catalog
    pub fn create(state: &mut AppState, name: &str, data: Ingredient) -> StateResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StateError::EmptyName);
        }
        if state.ingredients.contains_key(name) {
            return Err(StateError::Duplicate(name.to_string()));
        }
        state.ingredients.insert(name.to_string(), data);
        Ok(())
    }

    /// Update package fields in place; `None` if the name is unknown
    pub fn update(state: &mut AppState, name: &str, data: &IngredientUpdate) -> Option<Ingredient> {
        let entry = state.ingredients.get_mut(name)?;
        if let Some(unit) = data.unit {
            entry.unit = unit;
        }
        if let Some(qty) = data.package_qty {
            entry.package_qty = qty;
        }
        if let Some(price) = data.package_price {
            entry.package_price = price;
        }
        Some(entry.clone())
    }
}
