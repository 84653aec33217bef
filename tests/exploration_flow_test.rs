//! Integration test: exploration flow
//!
//! Drives the game through `apply_action` the way the front end does:
//! moving, the per-move upkeep, exploration prompts and item use.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use voyage::events::Effect;
use voyage::map::{move_marker, Direction};
use voyage::resources::{Resource, DECAYING_RESOURCES};
use voyage::{apply_action, Action, GameEvent, GameState, Variant};

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

/// Walks the marker into cell (1, 0) without drawing events.
fn walk_to_first_question_cell(state: &mut GameState, rng: &mut ChaCha8Rng) {
    for _ in 0..3 {
        move_marker(&mut state.map, Direction::Right, state.variant, rng);
    }
    assert_eq!(state.map.current_cell(), (1, 0));
}

fn applied_event(events: &[GameEvent]) -> Option<&voyage::events::Event> {
    events.iter().find_map(|e| match e {
        GameEvent::EventApplied(event) => Some(event),
        _ => None,
    })
}

// =============================================================================
// Movement and upkeep
// =============================================================================

#[test]
fn test_first_move_at_full_resources() {
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut state = GameState::new(Variant::Space);

        let events = apply_action(&mut state, Action::Move(Direction::Right), &mut rng);
        let event = applied_event(&events).expect("every move draws an event");

        let starved = events
            .iter()
            .any(|e| matches!(e, GameEvent::Starvation { .. }));
        if !starved {
            assert_eq!(state.messages.len(), 1, "seed {}", seed);
            assert_eq!(state.resources.get(Resource::Health), 100, "seed {}", seed);
        }

        for resource in DECAYING_RESOURCES {
            let mut expected: i64 = 100;
            if let Effect::Adjust { resource: hit, delta } = event.effect {
                if hit == resource {
                    expected = (expected + delta).clamp(0, 100);
                }
            }
            let expected = (expected - 1).max(0) as u32;
            assert_eq!(state.resources.get(resource), expected, "seed {}", seed);
        }
    }
}

#[test]
fn test_move_stays_inside_map() {
    let mut rng = create_test_rng();
    let mut state = GameState::new(Variant::Space);

    let events = apply_action(&mut state, Action::Move(Direction::Up), &mut rng);
    match &events[0] {
        GameEvent::Moved { position, cell, .. } => {
            assert_eq!((position.x, position.y), (5, 5));
            assert_eq!(*cell, (0, 0));
        }
        other => panic!("expected Moved first, got {:?}", other),
    }
}

#[test]
fn test_moves_are_ignored_during_combat() {
    let mut rng = create_test_rng();
    let mut state = GameState::new(Variant::Space);
    voyage::core::game_logic::apply_event(
        &mut state,
        voyage::events::event_for_roll(Variant::Space, 1, 0),
    );
    let before = state.map.position;

    let events = apply_action(&mut state, Action::Move(Direction::Down), &mut rng);

    assert!(events.is_empty());
    assert_eq!(state.map.position, before);
    assert_eq!(state.moves, 0);
}

#[test]
fn test_empty_supplies_starve_the_player() {
    let mut rng = create_test_rng();
    let mut state = GameState::new(Variant::Survival);
    for resource in DECAYING_RESOURCES {
        state.resources.set(resource, 0);
    }
    state.resources.set(Resource::Health, 50);

    let events = apply_action(&mut state, Action::Move(Direction::Right), &mut rng);

    let lost = events
        .iter()
        .find_map(|e| match e {
            GameEvent::Starvation { health_lost } => Some(*health_lost),
            _ => None,
        })
        .expect("starvation expected");
    // One event can refill at most one supply
    assert!(lost >= 2);
    assert_eq!(state.resources.get(Resource::Health), 50 - lost);
    assert!(state.messages[0].starts_with("Critical shortage!"));
}

// =============================================================================
// Exploration prompts
// =============================================================================

#[test]
fn test_accept_exploration_clears_question_marker() {
    let mut rng = create_test_rng();
    let mut state = GameState::new(Variant::Space);
    walk_to_first_question_cell(&mut state, &mut rng);
    assert!(state.map.is_question((1, 0)));
    assert!(state.map.prompt.is_some());
    let fuel_before = state.resources.get(Resource::Fuel);

    let events = apply_action(&mut state, Action::AcceptExploration, &mut rng);

    assert!(events.contains(&GameEvent::Explored { cell: (1, 0) }));
    assert!(state.map.prompt.is_none());
    assert!(!state.map.is_question((1, 0)));
    assert!(state.map.is_visited((1, 0)));
    assert_eq!(state.messages.len(), 1);
    // Exploring is not a move: no upkeep
    let event = applied_event(&events).unwrap();
    if !matches!(event.effect, Effect::Adjust { resource: Resource::Fuel, .. }) {
        assert_eq!(state.resources.get(Resource::Fuel), fuel_before);
    }
    assert_eq!(state.moves, 0);
}

#[test]
fn test_decline_keeps_marker_for_next_visit() {
    let mut rng = create_test_rng();
    let mut state = GameState::new(Variant::Survival);
    walk_to_first_question_cell(&mut state, &mut rng);

    let events = apply_action(&mut state, Action::DeclineExploration, &mut rng);
    assert_eq!(events, vec![GameEvent::ExplorationDeclined]);
    assert!(state.map.prompt.is_none());
    assert!(state.map.is_question((1, 0)));
    assert!(state.messages.is_empty());

    // Step out and back in: the prompt comes back
    move_marker(&mut state.map, Direction::Left, state.variant, &mut rng);
    assert!(state.map.prompt.is_none());
    move_marker(&mut state.map, Direction::Right, state.variant, &mut rng);
    let prompt = state.map.prompt.as_ref().expect("prompt reopened");
    assert_eq!(prompt.cell, (1, 0));
    assert!(voyage::map::SURVIVAL_OBJECTS.contains(&prompt.object_label.as_str()));
}

#[test]
fn test_exploration_can_roll_into_combat() {
    let mut rng = create_test_rng();
    let mut prompted = GameState::new(Variant::Space);
    walk_to_first_question_cell(&mut prompted, &mut rng);

    // A fifth of all rolls are encounters; take the first seed that hits one
    let (mut state, events, mut rng) = (0..200)
        .find_map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut state = prompted.clone();
            let events = apply_action(&mut state, Action::AcceptExploration, &mut rng);
            state.combat.is_active().then_some((state, events, rng))
        })
        .expect("an encounter within 200 seeds");

    let event = applied_event(&events).unwrap();
    assert!(event.is_encounter());
    assert!(events.contains(&GameEvent::Explored { cell: (1, 0) }));
    assert!(state.combat.is_player_turn());
    assert!(state.map.prompt.is_none());
    assert!(!state.map.is_question((1, 0)));
    assert!(state.map.is_visited((1, 0)));

    // Prompts cannot be answered mid-fight
    state.map.prompt = prompted.map.prompt.clone();
    assert!(apply_action(&mut state, Action::AcceptExploration, &mut rng).is_empty());
    assert!(apply_action(&mut state, Action::DeclineExploration, &mut rng).is_empty());
    assert_eq!(state.map.prompt, prompted.map.prompt);
    assert!(state.combat.is_player_turn());
}

#[test]
fn test_exploration_without_prompt_is_noop() {
    let mut rng = create_test_rng();
    let mut state = GameState::new(Variant::Space);

    assert!(apply_action(&mut state, Action::AcceptExploration, &mut rng).is_empty());
    assert!(apply_action(&mut state, Action::DeclineExploration, &mut rng).is_empty());
    assert!(state.messages.is_empty());
}

// =============================================================================
// Inventory
// =============================================================================

#[test]
fn test_nanobandage_heals_to_cap_and_stack_empties() {
    let mut rng = create_test_rng();
    let mut state = GameState::new(Variant::Space);
    state.resources.set(Resource::Health, 70);
    let id = state.inventory.items[0].id;
    assert_eq!(state.inventory.items[0].quantity, 2);

    let events = apply_action(&mut state, Action::UseItem(id), &mut rng);
    assert_eq!(events.len(), 1);
    assert_eq!(state.resources.get(Resource::Health), 100);
    assert_eq!(state.inventory.get(id).unwrap().quantity, 1);
    assert_eq!(state.messages[0], "Applied nanobandages (+40 health)");

    apply_action(&mut state, Action::UseItem(id), &mut rng);
    assert!(state.inventory.get(id).is_none());
    assert!(apply_action(&mut state, Action::UseItem(id), &mut rng).is_empty());
}

#[test]
fn test_toggle_inventory() {
    let mut rng = create_test_rng();
    let mut state = GameState::new(Variant::Space);

    apply_action(&mut state, Action::ToggleInventory, &mut rng);
    assert!(state.inventory_open);
    apply_action(&mut state, Action::ToggleInventory, &mut rng);
    assert!(!state.inventory_open);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_game() {
    let script = [
        Action::Move(Direction::Right),
        Action::Move(Direction::Right),
        Action::Move(Direction::Down),
        Action::AcceptExploration,
        Action::Attack,
        Action::Move(Direction::Right),
        Action::Move(Direction::Right),
        Action::Move(Direction::Right),
        Action::DeclineExploration,
    ];

    let play = || {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut state = GameState::new(Variant::Space);
        let mut events = Vec::new();
        for action in script {
            events.extend(apply_action(&mut state, action, &mut rng));
        }
        (state, events)
    };

    let (a, events_a) = play();
    let (b, events_b) = play();
    assert_eq!(events_a, events_b);
    assert_eq!(a.messages, b.messages);
    assert_eq!(a.resources, b.resources);
    assert_eq!(a.map.position, b.map.position);
}
