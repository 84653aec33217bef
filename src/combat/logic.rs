use super::types::{CombatPhase, Enemy};
use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::resources::Resource;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    EncounterStarted { enemy_name: String },
    PlayerAttack { damage: u32 },
    EnemyDefeated { reward: u32 },
    PlayerHealed { amount: u32 },
    EnemyAttack { damage: u32 },
    Retreated { penalty: u32 },
    /// The enemy's hit left the player at zero health.
    PlayerDied,
}

/// Starts an encounter on the player's turn.
pub fn start_combat(state: &mut GameState, enemy: Enemy) -> CombatEvent {
    let enemy_name = enemy.name.clone();
    tracing::info!(enemy = %enemy_name, "combat started");
    state.combat.start(enemy);
    CombatEvent::EncounterStarted { enemy_name }
}

fn schedule_enemy_turn(state: &mut GameState) {
    let due_at_ms = state.clock_ms.saturating_add(state.enemy_turn_delay_ms);
    state.combat.phase = CombatPhase::EnemyTurnPending { due_at_ms };
}

/// Fires one bullet at the enemy. Ignored outside the player's turn or with
/// an empty magazine.
pub fn player_attack(state: &mut GameState, rng: &mut impl Rng) -> Vec<CombatEvent> {
    if !state.combat.is_player_turn() || state.resources.is_depleted(Resource::Bullets) {
        return Vec::new();
    }
    let damage = rng.gen_range(PLAYER_DAMAGE_MIN..PLAYER_DAMAGE_MAX);
    let reward = rng.gen_range(VICTORY_REWARD_MIN..VICTORY_REWARD_MAX);
    resolve_attack(state, damage, reward)
}

/// Applies an attack with known damage; `reward` is paid out only if the
/// enemy falls. A kill ends combat with no counter-attack.
pub fn resolve_attack(state: &mut GameState, damage: u32, reward: u32) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    if !state.combat.is_player_turn() {
        return events;
    }
    let Some(enemy) = state.combat.enemy.as_mut() else {
        return events;
    };

    state.resources.apply_delta(Resource::Bullets, -1);
    enemy.take_damage(damage);
    let enemy_name = enemy.name.clone();
    let defeated = !enemy.is_alive();

    state
        .combat
        .add_log_entry(format!("You hit {} for {} damage", enemy_name, damage));
    events.push(CombatEvent::PlayerAttack { damage });

    if defeated {
        state.resources.apply_delta(Resource::Money, reward as i64);
        state
            .combat
            .add_log_entry(format!("{} defeated! (+{} coins)", enemy_name, reward));
        state.combat.end();
        tracing::info!(enemy = %enemy_name, reward, "enemy defeated");
        events.push(CombatEvent::EnemyDefeated { reward });
    } else {
        schedule_enemy_turn(state);
    }
    events
}

/// Restores a fixed amount of health, then hands the turn to the enemy.
pub fn player_heal(state: &mut GameState) -> Vec<CombatEvent> {
    if !state.combat.is_player_turn() {
        return Vec::new();
    }
    let before = state.resources.get(Resource::Health);
    let after = state
        .resources
        .apply_delta(Resource::Health, HEAL_AMOUNT as i64);
    let amount = after - before;

    state
        .combat
        .add_log_entry(format!("You patched yourself up (+{} health)", amount));
    schedule_enemy_turn(state);
    vec![CombatEvent::PlayerHealed { amount }]
}

/// Flees the encounter at a fixed health cost. Allowed on either turn; a
/// pending enemy turn is cancelled.
pub fn retreat(state: &mut GameState) -> Vec<CombatEvent> {
    if !state.combat.is_active() {
        return Vec::new();
    }
    state
        .resources
        .apply_delta(Resource::Health, -(RETREAT_PENALTY as i64));
    state
        .combat
        .add_log_entry(format!("You retreated (-{} health)", RETREAT_PENALTY));
    state.combat.end();
    tracing::info!("player retreated");
    vec![CombatEvent::Retreated {
        penalty: RETREAT_PENALTY,
    }]
}

/// Resolves the pending enemy turn right away, whatever its due time.
pub fn resolve_enemy_turn(state: &mut GameState, rng: &mut impl Rng) -> Vec<CombatEvent> {
    if state.combat.pending_enemy_turn().is_none() {
        return Vec::new();
    }
    let max_hit = state
        .combat
        .enemy
        .as_ref()
        .map(|e| e.damage_per_hit)
        .unwrap_or(0);
    let damage = if max_hit == 0 {
        0
    } else {
        rng.gen_range(0..max_hit)
    };
    resolve_enemy_hit(state, damage)
}

/// Applies an enemy hit of known size and returns the turn to the player.
pub fn resolve_enemy_hit(state: &mut GameState, damage: u32) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    if state.combat.pending_enemy_turn().is_none() {
        return events;
    }
    let enemy_name = state
        .combat
        .enemy
        .as_ref()
        .map(|e| e.name.clone())
        .unwrap_or_default();

    let health = state
        .resources
        .apply_delta(Resource::Health, -(damage as i64));
    state
        .combat
        .add_log_entry(format!("{} hits you for {} damage", enemy_name, damage));
    events.push(CombatEvent::EnemyAttack { damage });

    if health == 0 {
        state.combat.end();
        tracing::info!(enemy = %enemy_name, "player killed in combat");
        events.push(CombatEvent::PlayerDied);
    } else {
        state.combat.phase = CombatPhase::PlayerTurn;
    }
    events
}

/// Resolves the enemy turn once the game clock has reached its due time.
pub fn update_combat(state: &mut GameState, rng: &mut impl Rng) -> Vec<CombatEvent> {
    match state.combat.pending_enemy_turn() {
        Some(due_at_ms) if state.clock_ms >= due_at_ms => resolve_enemy_turn(state, rng),
        _ => Vec::new(),
    }
}
