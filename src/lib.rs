//! Voyage - Terminal Exploration and Survival Game Library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod combat;
pub mod core;
pub mod events;
pub mod input;
pub mod inventory;
pub mod map;
pub mod resources;
pub mod utils;

// UI module is only exposed for the binary's draw call
pub mod ui;

pub use crate::core::config::{GameConfig, Variant};
pub use crate::core::game_logic::{advance, apply_action, Action, GameEvent};
pub use crate::core::game_state::GameState;
