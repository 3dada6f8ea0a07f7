//! Food Cost Calculator Core
//!
//! Costing logic for a small food business: ingredient package pricing,
//! batch weight/yield aggregation, recipe cost roll-up and sell price
//! recommendation, plus the JSON-backed session store the UI layer
//! loads from and persists to.

pub mod costing;
pub mod models;
pub mod store;
