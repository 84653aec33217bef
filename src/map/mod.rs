//! Grid map with fog of war and points of interest.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
