//! Sell price recommendation
//!
//! Derives a recommended gross price from the cost per portion, a target
//! food-cost ratio, the tax rate and a rounding step. The recommendation
//! always rounds up to the next step so it never under-recommends.

use serde::{Deserialize, Serialize};

/// Inputs for a price recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingInputs {
    /// VAT / sales tax percentage applied on top of the net price
    pub tax_pct: f64,
    /// Target food-cost ratio, e.g. 0.30
    pub target_fc: f64,
    /// Rounding step for the gross recommendation, e.g. 0.50
    pub step: f64,
    /// Current gross selling price; 0.0 when not priced yet
    pub sell_gross: f64,
}

/// Derived pricing figures, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    /// Current net (pre-tax) selling price, 0.0 when unpriced
    pub sell_net: f64,
    /// Current food-cost ratio; reported as 0.0 when undefined
    pub current_fc: f64,
    /// Net price that would hit the target food-cost ratio
    pub rec_net: f64,
    /// Recommended gross price, rounded up to the next step
    pub rec_gross: f64,
    /// Current net margin per portion; negative signals a loss
    pub margin_now: f64,
}

// Same floor used for package quantities: degenerate ratios and steps
// produce large-but-finite results instead of raising.
const RATIO_EPSILON: f64 = 1e-9;

/// Compute the price quote for a portion costing `cpp`.
pub fn recommend_price(cpp: f64, inputs: &PricingInputs) -> PriceQuote {
    let tax_factor = 1.0 + inputs.tax_pct / 100.0;
    let sell_net = if inputs.sell_gross > 0.0 {
        inputs.sell_gross / tax_factor
    } else {
        0.0
    };
    let current_fc = if sell_net > 0.0 { cpp / sell_net } else { 0.0 };
    let rec_net = cpp / inputs.target_fc.max(RATIO_EPSILON);
    let step = inputs.step.max(RATIO_EPSILON);
    let rec_gross = ((rec_net * tax_factor) / step).ceil() * step;

    PriceQuote {
        sell_net,
        current_fc,
        rec_net,
        rec_gross,
        margin_now: sell_net - cpp,
    }
}
