//! Store module
//!
//! Explicit session state and whole-file JSON persistence.

pub mod files;
pub mod state;

pub use files::{Store, StoreError, StoreResult};
pub use state::AppState;
