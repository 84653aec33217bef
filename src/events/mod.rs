//! Narrative events: band table and random generator.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
