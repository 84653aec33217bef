//! Resource ledger: named counters, clamping and passive decay.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
