//! Costing module
//!
//! Pure cost and weight arithmetic plus the sell price recommendation.

pub mod calc;
pub mod pricing;
pub mod units;

pub use calc::{
    batch_cost_breakdown, batch_cost_per_kg, batch_cost_per_portion, batch_portions_yield,
    batch_total_cost, batch_total_weight_kg, recipe_cost_per_portion, to_weight_kg,
    toppings_cost_per_portion, unit_cost, CostError, CostResult,
};
pub use pricing::{recommend_price, PriceQuote, PricingInputs};
pub use units::{to_base, BaseUnit, Unit, G_PER_KG, ML_PER_L};
