//! JSON file persistence
//!
//! One human-editable JSON file per table, read wholesale at session
//! start and rewritten wholesale after each mutating action. There are no
//! partial writes and no locking; two sessions editing the same store
//! resolve as last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::state::AppState;
use crate::models::{Batch, Ingredient, Recipe};

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

const INGREDIENTS_FILE: &str = "ingredients.json";
const DENSITIES_FILE: &str = "densities.json";
const BATCHES_FILE: &str = "batches.json";
const RECIPES_FILE: &str = "recipes.json";

/// JSON-file-backed store rooted at a data directory
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(dir: P) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Load the session state: seeded defaults overlaid with the persisted
    /// entries of each table, keyed by name. The batch id counter is
    /// rederived from the loaded ids.
    pub fn load(&self) -> StoreResult<AppState> {
        let mut state = AppState::with_defaults();
        for (name, ing) in self.read_table::<Ingredient>(INGREDIENTS_FILE)? {
            state.ingredients.insert(name, ing);
        }
        for (name, dens) in self.read_table::<f64>(DENSITIES_FILE)? {
            state.densities.insert(name, dens);
        }
        for (id, b) in self.read_table::<Batch>(BATCHES_FILE)? {
            state.batches.insert(id, b);
        }
        for (name, r) in self.read_table::<Recipe>(RECIPES_FILE)? {
            state.recipes.insert(name, r);
        }
        state.rebuild_batch_counter();
        tracing::info!(
            dir = %self.dir.display(),
            ingredients = state.ingredients.len(),
            batches = state.batches.len(),
            recipes = state.recipes.len(),
            "session state loaded"
        );
        Ok(state)
    }

    /// Persist every table, overwriting the previous files
    pub fn save(&self, state: &AppState) -> StoreResult<()> {
        self.write_table(INGREDIENTS_FILE, &state.ingredients)?;
        self.write_table(DENSITIES_FILE, &state.densities)?;
        self.write_table(BATCHES_FILE, &state.batches)?;
        self.write_table(RECIPES_FILE, &state.recipes)?;
        tracing::debug!(dir = %self.dir.display(), "session state saved");
        Ok(())
    }

    // A missing file is a valid empty overlay, not an error.
    fn read_table<V: DeserializeOwned>(&self, file: &str) -> StoreResult<IndexMap<String, V>> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(IndexMap::new());
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_table<V: Serialize>(&self, file: &str, table: &IndexMap<String, V>) -> StoreResult<()> {
        let text = serde_json::to_string_pretty(table)?;
        fs::write(self.dir.join(file), text)?;
        Ok(())
    }
}
