//! Session state
//!
//! The application state is an explicit struct handed into every costing
//! call and lifecycle operation; there are no ambient globals. It is
//! constructed once at session start (usually via `Store::load`) and
//! persisted wholesale after each mutating action.

use indexmap::IndexMap;

use crate::costing::BaseUnit;
use crate::models::{BatchTable, Catalog, DensityTable, Ingredient, RecipeTable};

/// In-memory session store: the four tables plus the batch id counter
#[derive(Debug, Clone)]
pub struct AppState {
    pub ingredients: Catalog,
    pub densities: DensityTable,
    pub batches: BatchTable,
    pub recipes: RecipeTable,
    batch_id_counter: u64,
}

impl AppState {
    /// Empty state with no seed data
    pub fn new() -> Self {
        Self {
            ingredients: Catalog::new(),
            densities: DensityTable::new(),
            batches: BatchTable::new(),
            recipes: RecipeTable::new(),
            batch_id_counter: 1,
        }
    }

    /// State seeded with the default catalog and density table
    pub fn with_defaults() -> Self {
        Self {
            ingredients: default_catalog(),
            densities: default_densities(),
            batches: BatchTable::new(),
            recipes: RecipeTable::new(),
            batch_id_counter: 1,
        }
    }

    /// Drop every table and restore the seeded defaults
    pub fn reset(&mut self) {
        *self = Self::with_defaults();
    }

    /// Next unique batch id: `b1`, `b2`, ... Ids are never reused.
    pub(crate) fn next_batch_id(&mut self) -> String {
        let id = format!("b{}", self.batch_id_counter);
        self.batch_id_counter += 1;
        id
    }

    /// Rebuild the id counter from loaded batch ids (max numeric suffix + 1),
    /// so ids stay monotone across persisted sessions.
    pub(crate) fn rebuild_batch_counter(&mut self) {
        let max = self
            .batches
            .keys()
            .filter_map(|id| id.strip_prefix('b').and_then(|n| n.parse::<u64>().ok()))
            .max()
            .unwrap_or(0);
        self.batch_id_counter = max + 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn entry(unit: BaseUnit, package_qty: f64, package_price: f64) -> Ingredient {
    Ingredient {
        unit,
        package_qty,
        package_price,
    }
}

/// Seed catalog shipped with a fresh store
fn default_catalog() -> Catalog {
    IndexMap::from([
        ("Flour 00".to_string(), entry(BaseUnit::Kg, 25.0, 29.90)),
        ("Water".to_string(), entry(BaseUnit::L, 10.0, 1.50)),
        ("Salt".to_string(), entry(BaseUnit::Kg, 1.0, 0.50)),
        ("Yeast".to_string(), entry(BaseUnit::Kg, 1.0, 8.00)),
        ("Mozzarella".to_string(), entry(BaseUnit::Kg, 1.0, 6.50)),
        ("Tomato".to_string(), entry(BaseUnit::Kg, 1.0, 1.40)),
        ("Oil EVO".to_string(), entry(BaseUnit::L, 1.0, 7.00)),
    ])
}

/// Seed densities (kg/L) for volume-to-weight conversion
fn default_densities() -> DensityTable {
    IndexMap::from([("Water".to_string(), 1.0), ("Oil EVO".to_string(), 0.91)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Batch, BatchCreate, Recipe};

    #[test]
    fn test_defaults_are_seeded() {
        let state = AppState::with_defaults();
        assert_eq!(state.ingredients.len(), 7);
        assert_eq!(state.densities.len(), 2);
        assert!(state.batches.is_empty());
        assert_eq!(state.ingredients["Flour 00"].package_qty, 25.0);
        assert_eq!(state.densities["Oil EVO"], 0.91);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = AppState::with_defaults();
        Recipe::create(&mut state, "Margherita", 1).unwrap();
        state.ingredients.shift_remove("Salt");
        state.reset();
        assert_eq!(state.ingredients.len(), 7);
        assert!(state.recipes.is_empty());
    }

    #[test]
    fn test_rebuild_batch_counter_from_loaded_ids() {
        let mut state = AppState::new();
        state.batches.insert(
            "b7".to_string(),
            Batch {
                name: "Dough".to_string(),
                category: String::new(),
                portion_weight_g: 280.0,
                items: vec![],
            },
        );
        state.rebuild_batch_counter();
        let id = Batch::create(
            &mut state,
            BatchCreate {
                name: "Sauce".to_string(),
                category: String::new(),
                portion_weight_g: 100.0,
                items: vec![],
            },
        )
        .unwrap();
        assert_eq!(id, "b8");
    }
}
