//! Core game state, configuration and the update loop.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod game_logic;
pub mod game_state;

pub use config::*;
pub use constants::*;
pub use game_logic::*;
pub use game_state::*;
