//! Batch model
//!
//! A produced intermediate (a dough, a sauce) with TOTAL ingredient
//! quantities and a portion weight in grams that determines yield.
//! Batches are keyed by an opaque generated id (`b1`, `b2`, ...).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{LineItem, StateError, StateResult};
use crate::store::AppState;

/// A batch of a produced intermediate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub portion_weight_g: f64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Batch table keyed by generated id, insertion-ordered
pub type BatchTable = IndexMap<String, Batch>;

/// Data for creating a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreate {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub portion_weight_g: f64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Data for updating a batch's basic fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub portion_weight_g: Option<f64>,
}

impl Batch {
    /// Create a batch under a fresh id, returning the id
    pub fn create(state: &mut AppState, data: BatchCreate) -> StateResult<String> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(StateError::EmptyName);
        }
        if data.portion_weight_g <= 0.0 {
            return Err(StateError::InvalidPortionWeight(data.portion_weight_g));
        }
        let id = state.next_batch_id();
        state.batches.insert(
            id.clone(),
            Batch {
                name: name.to_string(),
                category: data.category.trim().to_string(),
                portion_weight_g: data.portion_weight_g,
                items: data.items,
            },
        );
        Ok(id)
    }

    /// Update basic fields; `Ok(None)` if the id is unknown
    pub fn update(
        state: &mut AppState,
        id: &str,
        data: &BatchUpdate,
    ) -> StateResult<Option<Batch>> {
        if let Some(pw) = data.portion_weight_g {
            if pw <= 0.0 {
                return Err(StateError::InvalidPortionWeight(pw));
            }
        }
        let Some(batch) = state.batches.get_mut(id) else {
            return Ok(None);
        };
        if let Some(ref name) = data.name {
            if name.trim().is_empty() {
                return Err(StateError::EmptyName);
            }
            batch.name = name.trim().to_string();
        }
        if let Some(ref category) = data.category {
            batch.category = category.trim().to_string();
        }
        if let Some(pw) = data.portion_weight_g {
            batch.portion_weight_g = pw;
        }
        Ok(Some(batch.clone()))
    }

    /// Append a line item; `false` if the id is unknown
    pub fn push_item(state: &mut AppState, id: &str, item: LineItem) -> bool {
        match state.batches.get_mut(id) {
            Some(batch) => {
                batch.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Remove the most recently added line item
    pub fn pop_item(state: &mut AppState, id: &str) -> Option<LineItem> {
        state.batches.get_mut(id)?.items.pop()
    }

    /// Delete a batch, pruning every batch-use referencing it from every
    /// recipe so no dangling reference keeps contributing cost.
    pub fn delete(state: &mut AppState, id: &str) -> bool {
        if state.batches.shift_remove(id).is_none() {
            return false;
        }
        let mut pruned = 0usize;
        for recipe in state.recipes.values_mut() {
            let before = recipe.batch_uses.len();
            recipe.batch_uses.retain(|bu| bu.batch_id != id);
            pruned += before - recipe.batch_uses.len();
        }
        if pruned > 0 {
            tracing::warn!(batch_id = id, pruned, "pruned uses of deleted batch from recipes");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::{recipe_cost_per_portion, BaseUnit, Unit};
    use crate::models::{Ingredient, Recipe};

    fn create(state: &mut AppState, name: &str) -> String {
        Batch::create(
            state,
            BatchCreate {
                name: name.to_string(),
                category: String::new(),
                portion_weight_g: 280.0,
                items: vec![],
            },
        )
        .unwrap()
    }

    #[test]
    fn test_ids_are_monotone_and_unique() {
        let mut state = AppState::new();
        assert_eq!(create(&mut state, "Dough"), "b1");
        assert_eq!(create(&mut state, "Sauce"), "b2");
        Batch::delete(&mut state, "b1");
        // Ids are never reused.
        assert_eq!(create(&mut state, "Brine"), "b3");
    }

    #[test]
    fn test_create_validation() {
        let mut state = AppState::new();
        let err = Batch::create(
            &mut state,
            BatchCreate {
                name: "  ".to_string(),
                category: String::new(),
                portion_weight_g: 280.0,
                items: vec![],
            },
        )
        .unwrap_err();
        assert_eq!(err, StateError::EmptyName);

        let err = Batch::create(
            &mut state,
            BatchCreate {
                name: "Dough".to_string(),
                category: String::new(),
                portion_weight_g: 0.0,
                items: vec![],
            },
        )
        .unwrap_err();
        assert_eq!(err, StateError::InvalidPortionWeight(0.0));
    }

    #[test]
    fn test_update_basic_fields() {
        let mut state = AppState::new();
        let id = create(&mut state, "Dough");
        let updated = Batch::update(
            &mut state,
            &id,
            &BatchUpdate {
                category: Some(" Pizza ".to_string()),
                portion_weight_g: Some(300.0),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(updated.category, "Pizza");
        assert_eq!(updated.portion_weight_g, 300.0);

        assert_eq!(
            Batch::update(&mut state, "b99", &BatchUpdate::default()).unwrap(),
            None
        );
        let err = Batch::update(
            &mut state,
            &id,
            &BatchUpdate {
                portion_weight_g: Some(-1.0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, StateError::InvalidPortionWeight(-1.0));
    }

    #[test]
    fn test_push_and_pop_items_keep_order() {
        let mut state = AppState::new();
        let id = create(&mut state, "Dough");
        let flour = LineItem {
            name: "Flour".to_string(),
            qty: 1.0,
            unit: Unit::Kg,
        };
        let water = LineItem {
            name: "Water".to_string(),
            qty: 600.0,
            unit: Unit::Ml,
        };
        assert!(Batch::push_item(&mut state, &id, flour.clone()));
        assert!(Batch::push_item(&mut state, &id, water.clone()));
        // Remove-last pops the tail.
        assert_eq!(Batch::pop_item(&mut state, &id), Some(water));
        assert_eq!(state.batches[&id].items, vec![flour]);
        assert!(!Batch::push_item(
            &mut state,
            "b99",
            LineItem {
                name: "Salt".to_string(),
                qty: 1.0,
                unit: Unit::G
            }
        ));
    }

    #[test]
    fn test_delete_cascades_into_recipes() {
        let mut state = AppState::new();
        Ingredient::create(
            &mut state,
            "Flour",
            Ingredient {
                unit: BaseUnit::Kg,
                package_qty: 1.0,
                package_price: 2.0,
            },
        )
        .unwrap();
        let id = Batch::create(
            &mut state,
            BatchCreate {
                name: "Dough".to_string(),
                category: String::new(),
                portion_weight_g: 280.0,
                items: vec![LineItem {
                    name: "Flour".to_string(),
                    qty: 2.0,
                    unit: Unit::Kg,
                }],
            },
        )
        .unwrap();
        Recipe::create(&mut state, "Margherita", 1).unwrap();
        assert!(Recipe::attach_batch(&mut state, "Margherita", &id, 1.0));

        let before = recipe_cost_per_portion(
            &state.recipes["Margherita"],
            &state.batches,
            &state.ingredients,
            &state.densities,
        );
        assert!(before > 0.0);

        assert!(Batch::delete(&mut state, &id));
        assert!(state.recipes["Margherita"].batch_uses.is_empty());
        let after = recipe_cost_per_portion(
            &state.recipes["Margherita"],
            &state.batches,
            &state.ingredients,
            &state.densities,
        );
        assert_eq!(after, 0.0);

        assert!(!Batch::delete(&mut state, &id));
    }
}
