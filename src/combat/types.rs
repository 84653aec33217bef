use crate::core::config::Variant;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub icon: String,
    pub health: u32,
    pub max_health: u32,
    /// Upper bound (exclusive) of a single enemy hit.
    pub damage_per_hit: u32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, max_health: u32, damage_per_hit: u32) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            health: max_health,
            max_health,
            damage_per_hit,
        }
    }

    /// The fixed-stat foe spawned by the encounter band.
    pub fn encounter(variant: Variant) -> Self {
        let (name, icon) = match variant {
            Variant::Space => ("Space Pirate", "👾"),
            Variant::Survival => ("Raider", "🧟"),
        };
        Self::new(name, icon, ENEMY_MAX_HEALTH, ENEMY_DAMAGE_PER_HIT)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// Where the encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombatPhase {
    /// No encounter.
    #[default]
    Idle,
    /// Waiting for the player to attack, heal or retreat.
    PlayerTurn,
    /// The enemy strikes back once the game clock reaches `due_at_ms`.
    EnemyTurnPending { due_at_ms: u64 },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatState {
    pub phase: CombatPhase,
    pub enemy: Option<Enemy>,
    /// Newest first, at most `COMBAT_LOG_CAPACITY` entries.
    pub log: VecDeque<String>,
}

impl CombatState {
    pub fn new() -> Self {
        Self {
            phase: CombatPhase::Idle,
            enemy: None,
            log: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != CombatPhase::Idle
    }

    pub fn is_player_turn(&self) -> bool {
        self.phase == CombatPhase::PlayerTurn
    }

    /// Due time of the pending enemy turn, if one is scheduled.
    pub fn pending_enemy_turn(&self) -> Option<u64> {
        match self.phase {
            CombatPhase::EnemyTurnPending { due_at_ms } => Some(due_at_ms),
            _ => None,
        }
    }

    /// Begins a fresh encounter on the player's turn.
    pub fn start(&mut self, enemy: Enemy) {
        self.log.clear();
        self.add_log_entry(format!("{} {} attacks you!", enemy.icon, enemy.name));
        self.enemy = Some(enemy);
        self.phase = CombatPhase::PlayerTurn;
    }

    /// Ends the encounter. Any pending enemy turn is dropped.
    pub fn end(&mut self) {
        self.phase = CombatPhase::Idle;
        self.enemy = None;
    }

    pub fn add_log_entry(&mut self, message: String) {
        self.log.push_front(message);
        self.log.truncate(COMBAT_LOG_CAPACITY);
    }
}
