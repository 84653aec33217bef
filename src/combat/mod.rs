//! Turn-based combat: types and state machine.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
