//! Recipe model
//!
//! A finished sellable item: batch portions plus extra ingredients whose
//! quantities are per output portion. Recipes are keyed by unique name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{LineItem, StateError, StateResult};
use crate::store::AppState;

/// Portions of one batch consumed by a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUse {
    pub batch_id: String,
    pub portions: f64,
}

/// A recipe composed of batch portions plus extra ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Output portions the recipe yields (divisor for extra items)
    pub portions: u32,
    #[serde(default)]
    pub batch_uses: Vec<BatchUse>,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Recipe table keyed by name, insertion-ordered
pub type RecipeTable = IndexMap<String, Recipe>;

impl Recipe {
    /// Create an empty recipe under a unique name
    pub fn create(state: &mut AppState, name: &str, portions: u32) -> StateResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StateError::EmptyName);
        }
        if portions == 0 {
            return Err(StateError::InvalidPortions);
        }
        if state.recipes.contains_key(name) {
            return Err(StateError::Duplicate(name.to_string()));
        }
        state.recipes.insert(
            name.to_string(),
            Recipe {
                portions,
                batch_uses: vec![],
                items: vec![],
            },
        );
        Ok(())
    }

    /// Attach a batch to a recipe; `false` if either side is unknown
    pub fn attach_batch(state: &mut AppState, name: &str, batch_id: &str, portions: f64) -> bool {
        if !state.batches.contains_key(batch_id) {
            return false;
        }
        match state.recipes.get_mut(name) {
            Some(recipe) => {
                recipe.batch_uses.push(BatchUse {
                    batch_id: batch_id.to_string(),
                    portions,
                });
                true
            }
            None => false,
        }
    }

    /// Append an extra line item (quantity per output portion)
    pub fn push_item(state: &mut AppState, name: &str, item: LineItem) -> bool {
        match state.recipes.get_mut(name) {
            Some(recipe) => {
                recipe.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Remove the most recently added extra item
    pub fn pop_item(state: &mut AppState, name: &str) -> Option<LineItem> {
        state.recipes.get_mut(name)?.items.pop()
    }

    /// Delete a recipe; nothing references recipes, so no cascade
    pub fn delete(state: &mut AppState, name: &str) -> bool {
        state.recipes.shift_remove(name).is_some()
    }
}
