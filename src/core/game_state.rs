use super::config::{GameConfig, Variant};
use super::constants::{ENEMY_TURN_DELAY_MS, MESSAGE_LOG_CAPACITY};
use crate::combat::types::CombatState;
use crate::inventory::Inventory;
use crate::map::MapState;
use crate::resources::{Resource, ResourceLedger};
use std::collections::VecDeque;

/// The whole game: every piece of mutable state lives here and changes only
/// through `apply_action` and `advance`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub variant: Variant,
    pub resources: ResourceLedger,
    pub map: MapState,
    pub combat: CombatState,
    pub inventory: Inventory,
    /// Narrative log, newest first. Separate from the combat log.
    pub messages: VecDeque<String>,
    pub inventory_open: bool,
    /// Game clock in milliseconds, driven by `advance`.
    pub clock_ms: u64,
    pub enemy_turn_delay_ms: u64,
    pub game_over: bool,
    /// Moves made this session.
    pub moves: u64,
}

impl GameState {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            resources: ResourceLedger::new(),
            map: MapState::new(),
            combat: CombatState::new(),
            inventory: Inventory::starting(variant),
            messages: VecDeque::with_capacity(MESSAGE_LOG_CAPACITY),
            inventory_open: false,
            clock_ms: 0,
            enemy_turn_delay_ms: ENEMY_TURN_DELAY_MS,
            game_over: false,
            moves: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            enemy_turn_delay_ms: config.enemy_turn_delay_ms,
            ..Self::new(config.variant)
        }
    }

    /// Pushes a narrative message, keeping only the newest entries.
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push_front(message.into());
        self.messages.truncate(MESSAGE_LOG_CAPACITY);
    }

    pub fn health(&self) -> u32 {
        self.resources.get(Resource::Health)
    }

    pub fn is_player_alive(&self) -> bool {
        self.health() > 0
    }
}
