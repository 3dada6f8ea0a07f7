//! Data models
//!
//! Serde structs for the persisted tables, plus the lifecycle operations
//! that mutate the session state (create, update, item edits, deletion).

mod batch;
mod ingredient;
mod line_item;
mod recipe;

use thiserror::Error;

pub use batch::{Batch, BatchCreate, BatchTable, BatchUpdate};
pub use ingredient::{Catalog, DensityTable, Ingredient, IngredientUpdate};
pub use line_item::LineItem;
pub use recipe::{BatchUse, Recipe, RecipeTable};

/// Lifecycle error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("'{0}' already exists")]
    Duplicate(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("portion weight must be positive, got {0}")]
    InvalidPortionWeight(f64),

    #[error("recipe portions must be positive")]
    InvalidPortions,
}

/// Result type for lifecycle operations
pub type StateResult<T> = Result<T, StateError>;
