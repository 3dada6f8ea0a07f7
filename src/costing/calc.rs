//! Cost and weight aggregation
//!
//! Pure functions over the in-memory catalog, density and batch/recipe
//! tables. Missing-ingredient handling is deliberately tiered: a single
//! lookup fails hard, a batch total fails carrying every offending name,
//! and recipe extras skip silently. Missing densities are never an error;
//! the affected lines are excluded from weight and counted as unknown.

use thiserror::Error;

use super::units::{to_base, Unit, G_PER_KG, ML_PER_L};
use crate::models::{Batch, BatchTable, Catalog, DensityTable, Recipe};

/// Costing error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    /// One or more line items reference ingredients absent from the catalog
    #[error("ingredient(s) missing from catalog: {}", .0.join(", "))]
    MissingIngredients(Vec<String>),
}

/// Result type for costing operations
pub type CostResult<T> = Result<T, CostError>;

// Guards division by a zero or malformed package quantity.
const QTY_EPSILON: f64 = 1e-9;

/// Per-base-unit cost of a catalog ingredient (package price over package size).
///
/// Fails hard when the name is absent from the catalog; batch-level callers
/// convert that into a non-fatal warning instead of letting it propagate.
pub fn unit_cost(name: &str, catalog: &Catalog) -> CostResult<f64> {
    let entry = catalog
        .get(name)
        .ok_or_else(|| CostError::MissingIngredients(vec![name.to_string()]))?;
    Ok(entry.package_price / entry.package_qty.max(QTY_EPSILON))
}

/// Physical mass of a line quantity in kilograms.
///
/// Volume units need a density entry (kg/L); without one the line
/// contributes `0.0` — the "unknown, exclude" policy, not an error.
pub fn to_weight_kg(name: &str, qty: f64, unit: Unit, densities: &DensityTable) -> f64 {
    match unit {
        Unit::Kg => qty,
        Unit::G => qty / G_PER_KG,
        Unit::L | Unit::Ml => match densities.get(name) {
            Some(&dens) if dens > 0.0 => {
                if unit == Unit::L {
                    dens * qty
                } else {
                    dens * qty / ML_PER_L
                }
            }
            _ => 0.0,
        },
    }
}

/// Total cost of a batch's line items.
///
/// Errs with the full list of offending names if any line references an
/// ingredient absent from the catalog; the batch is uncostable until the
/// catalog gap is fixed.
pub fn batch_total_cost(batch: &Batch, catalog: &Catalog) -> CostResult<f64> {
    let mut missing: Vec<String> = Vec::new();
    for it in &batch.items {
        if !catalog.contains_key(it.name.as_str()) && !missing.contains(&it.name) {
            missing.push(it.name.clone());
        }
    }
    if !missing.is_empty() {
        return Err(CostError::MissingIngredients(missing));
    }

    let mut total = 0.0;
    for it in &batch.items {
        total += unit_cost(&it.name, catalog)? * to_base(it.qty, it.unit);
    }
    Ok(total)
}

/// Total weight of a batch in kg, plus the number of volume lines whose
/// density is unknown (excluded from the total, surfaced as a warning).
pub fn batch_total_weight_kg(batch: &Batch, densities: &DensityTable) -> (f64, usize) {
    let mut total = 0.0;
    let mut unknown = 0;
    for it in &batch.items {
        let wk = to_weight_kg(&it.name, it.qty, it.unit, densities);
        if it.unit.is_volume() && wk == 0.0 {
            unknown += 1;
        }
        total += wk;
    }
    (total, unknown)
}

/// Number of portions a batch yields: floor of total weight over portion
/// weight, clamped at 0. A non-positive portion weight yields 0.
pub fn batch_portions_yield(batch: &Batch, densities: &DensityTable) -> u32 {
    if batch.portion_weight_g <= 0.0 {
        return 0;
    }
    let (total_kg, _) = batch_total_weight_kg(batch, densities);
    let portions = ((total_kg * G_PER_KG) / batch.portion_weight_g).floor();
    if portions > 0.0 {
        portions as u32
    } else {
        0
    }
}

/// Cost of one batch portion, or `None` when the yield is zero.
///
/// The sentinel is deliberate: a zero-yield batch has an undefined portion
/// cost, and returning 0.0 would read as "free".
pub fn batch_cost_per_portion(
    batch: &Batch,
    catalog: &Catalog,
    densities: &DensityTable,
) -> CostResult<Option<f64>> {
    let total = batch_total_cost(batch, catalog)?;
    let portions = batch_portions_yield(batch, densities);
    if portions == 0 {
        return Ok(None);
    }
    Ok(Some(total / f64::from(portions)))
}

/// Cost of one kilogram of the batch, or `None` when the resolvable
/// weight is zero.
pub fn batch_cost_per_kg(
    batch: &Batch,
    catalog: &Catalog,
    densities: &DensityTable,
) -> CostResult<Option<f64>> {
    let total = batch_total_cost(batch, catalog)?;
    let (total_kg, _) = batch_total_weight_kg(batch, densities);
    if total_kg > 0.0 {
        Ok(Some(total / total_kg))
    } else {
        Ok(None)
    }
}

/// Per-line cost contributions of a batch, for display breakdowns.
/// Lines whose ingredient is absent from the catalog are skipped.
pub fn batch_cost_breakdown(batch: &Batch, catalog: &Catalog) -> Vec<(String, f64)> {
    let mut parts = Vec::new();
    for it in &batch.items {
        if let Ok(cost) = unit_cost(&it.name, catalog) {
            parts.push((it.name.clone(), cost * to_base(it.qty, it.unit)));
        }
    }
    parts
}

/// Cost of a recipe's own extra ingredients per output portion.
///
/// Quantities are per portion already; the sum is divided by the recipe's
/// portion count (floored at 1). Absent ingredients are skipped silently —
/// a looser policy than the batch tier, kept as observed.
pub fn toppings_cost_per_portion(recipe: &Recipe, catalog: &Catalog) -> f64 {
    let mut total = 0.0;
    for it in &recipe.items {
        let Ok(cost) = unit_cost(&it.name, catalog) else {
            continue;
        };
        total += cost * to_base(it.qty, it.unit);
    }
    total / f64::from(recipe.portions.max(1))
}

/// Cost of one recipe portion: batch contributions plus extra ingredients.
///
/// A batch-use contributes 0 when its id dangles (a consistent store prunes
/// these on batch deletion, but the roll-up tolerates them), when the batch
/// yield is zero, or when the batch itself is uncostable.
pub fn recipe_cost_per_portion(
    recipe: &Recipe,
    batches: &BatchTable,
    catalog: &Catalog,
    densities: &DensityTable,
) -> f64 {
    let mut total = 0.0;
    for bu in &recipe.batch_uses {
        let Some(batch) = batches.get(bu.batch_id.as_str()) else {
            continue;
        };
        if let Ok(Some(cpp)) = batch_cost_per_portion(batch, catalog, densities) {
            total += cpp * bu.portions;
        }
    }
    total + toppings_cost_per_portion(recipe, catalog)
}
