//! The single update path for the game.
//!
//! Every player input becomes an [`Action`] fed to [`apply_action`]; the
//! passage of time goes through [`advance`]. Both return the [`GameEvent`]s
//! that happened so the front end can react without reaching into rules.
//! Invalid actions are silent no-ops and return no events.

use super::game_state::GameState;
use crate::combat::logic::{
    player_attack, player_heal, retreat, start_combat, update_combat, CombatEvent,
};
use crate::events::{generate_event, Effect, Event};
use crate::inventory::{use_item, ItemEffect, ItemKind};
use crate::map::{accept_prompt, decline_prompt, move_marker, Cell, Direction, Position};
use crate::resources::apply_passive_decay;
use rand::Rng;

/// A player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    AcceptExploration,
    DeclineExploration,
    /// Use one unit of the inventory stack with this id.
    UseItem(u32),
    ToggleInventory,
    Attack,
    Heal,
    Retreat,
}

/// Something that happened while applying an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Moved {
        position: Position,
        cell: Cell,
        newly_visited: bool,
    },
    /// A narrative event was drawn and applied.
    EventApplied(Event),
    /// Empty supplies cost health this move.
    Starvation { health_lost: u32 },
    ExplorationPrompted { cell: Cell, object_label: String },
    Explored { cell: Cell },
    ExplorationDeclined,
    ItemUsed { kind: ItemKind, effect: ItemEffect },
    InventoryToggled { open: bool },
    Combat(CombatEvent),
    GameOver,
}

/// Applies one player action.
pub fn apply_action(state: &mut GameState, action: Action, rng: &mut impl Rng) -> Vec<GameEvent> {
    if state.game_over {
        return Vec::new();
    }

    let mut events = match action {
        Action::Move(direction) => move_player(state, direction, rng),
        Action::AcceptExploration => accept_exploration(state, rng),
        Action::DeclineExploration => decline_exploration(state),
        Action::UseItem(id) => use_inventory_item(state, id),
        Action::ToggleInventory => {
            state.inventory_open = !state.inventory_open;
            vec![GameEvent::InventoryToggled {
                open: state.inventory_open,
            }]
        }
        Action::Attack => {
            let combat = player_attack(state, rng);
            combat_events(state, combat)
        }
        Action::Heal => {
            let combat = player_heal(state);
            combat_events(state, combat)
        }
        Action::Retreat => {
            let combat = retreat(state);
            combat_events(state, combat)
        }
    };

    check_game_over(state, &mut events);
    events
}

/// Advances the game clock and resolves a due enemy turn.
pub fn advance(state: &mut GameState, elapsed_ms: u64, rng: &mut impl Rng) -> Vec<GameEvent> {
    if state.game_over {
        return Vec::new();
    }
    state.clock_ms = state.clock_ms.saturating_add(elapsed_ms);

    let combat = update_combat(state, rng);
    let mut events = combat_events(state, combat);
    check_game_over(state, &mut events);
    events
}

/// Move, reveal, draw an event, then pay the per-move upkeep.
fn move_player(state: &mut GameState, direction: Direction, rng: &mut impl Rng) -> Vec<GameEvent> {
    if state.combat.is_active() {
        return Vec::new();
    }
    let mut events = Vec::new();
    state.moves += 1;

    let outcome = move_marker(&mut state.map, direction, state.variant, rng);
    events.push(GameEvent::Moved {
        position: outcome.position,
        cell: outcome.cell,
        newly_visited: outcome.newly_visited,
    });

    let event = generate_event(state.variant, rng);
    events.extend(apply_event(state, event));

    let health_lost = apply_passive_decay(&mut state.resources);
    if health_lost > 0 {
        state.add_message(format!("Critical shortage! (-{} health)", health_lost));
        events.push(GameEvent::Starvation { health_lost });
    }

    if outcome.prompt_opened {
        if let Some(prompt) = &state.map.prompt {
            events.push(GameEvent::ExplorationPrompted {
                cell: prompt.cell,
                object_label: prompt.object_label.clone(),
            });
        }
    }
    events
}

/// Logs an event's text and applies its effect.
pub fn apply_event(state: &mut GameState, event: Event) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.add_message(event.text.clone());

    match &event.effect {
        Effect::Adjust { resource, delta } => {
            state.resources.apply_delta(*resource, *delta);
        }
        Effect::Encounter(enemy) => {
            let started = start_combat(state, enemy.clone());
            events.push(GameEvent::Combat(started));
        }
    }
    tracing::debug!(id = event.id, "event applied");
    events.insert(0, GameEvent::EventApplied(event));
    events
}

fn accept_exploration(state: &mut GameState, rng: &mut impl Rng) -> Vec<GameEvent> {
    if state.combat.is_active() || state.map.prompt.is_none() {
        return Vec::new();
    }
    let event = generate_event(state.variant, rng);
    let mut events = apply_event(state, event);
    if let Some(cell) = accept_prompt(&mut state.map) {
        tracing::info!(?cell, "cell explored");
        events.push(GameEvent::Explored { cell });
    }
    events
}

fn decline_exploration(state: &mut GameState) -> Vec<GameEvent> {
    if state.combat.is_active() || !decline_prompt(&mut state.map) {
        return Vec::new();
    }
    vec![GameEvent::ExplorationDeclined]
}

fn use_inventory_item(state: &mut GameState, id: u32) -> Vec<GameEvent> {
    let Some(kind) = state.inventory.get(id).map(|i| i.kind) else {
        return Vec::new();
    };
    match use_item(&mut state.inventory, &mut state.resources, id) {
        Some(effect) => {
            state.add_message(effect.log_text);
            vec![GameEvent::ItemUsed { kind, effect }]
        }
        None => Vec::new(),
    }
}

/// Wraps combat events, mirroring combat endings into the narrative log.
fn combat_events(state: &mut GameState, combat: Vec<CombatEvent>) -> Vec<GameEvent> {
    for event in &combat {
        match event {
            CombatEvent::EnemyDefeated { reward } => {
                state.add_message(format!("You won the fight! (+{} coins)", reward));
            }
            CombatEvent::Retreated { penalty } => {
                state.add_message(format!("You escaped the fight (-{} health)", penalty));
            }
            _ => {}
        }
    }
    combat.into_iter().map(GameEvent::Combat).collect()
}

/// Zero health ends the game for good.
fn check_game_over(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.game_over || state.is_player_alive() {
        return;
    }
    state.game_over = true;
    state.combat.end();
    state.map.prompt = None;
    state.inventory_open = false;
    state.add_message("GAME OVER! You died.");
    tracing::info!(moves = state.moves, "game over");
    events.push(GameEvent::GameOver);
}
