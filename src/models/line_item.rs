//! Line item model

use serde::{Deserialize, Serialize};

use crate::costing::Unit;

/// One ingredient line inside a batch or recipe.
///
/// The name may reference a catalog entry that does not exist yet; how
/// that resolves depends on the costing tier (see `costing::calc`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub qty: f64,
    pub unit: Unit,
}
