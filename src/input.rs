//! Keyboard mapping for the game screen.
//!
//! Which keys mean what depends on what is on screen. After game over only
//! quit is accepted. During combat the number keys use inventory slots
//! directly, since the inventory popup is hidden behind the fight.

use crate::core::game_logic::Action;
use crate::core::game_state::GameState;
use crate::map::Direction;
use crossterm::event::KeyCode;

/// What the front end should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Quit,
    Ignore,
}

/// Which set of controls is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    GameOver,
    Combat,
    Prompt,
    Inventory,
    Explore,
}

impl InputMode {
    pub fn of(state: &GameState) -> Self {
        if state.game_over {
            InputMode::GameOver
        } else if state.combat.is_active() {
            InputMode::Combat
        } else if state.inventory_open {
            InputMode::Inventory
        } else if state.map.prompt.is_some() {
            InputMode::Prompt
        } else {
            InputMode::Explore
        }
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Uses the stack shown in slot `digit` (1-based).
fn use_slot(state: &GameState, digit: char) -> Command {
    let slot = digit as usize - '1' as usize;
    state
        .inventory
        .items
        .get(slot)
        .map(|item| Command::Act(Action::UseItem(item.id)))
        .unwrap_or(Command::Ignore)
}

/// Maps a key press to a command for the current state.
pub fn map_key(state: &GameState, code: KeyCode) -> Command {
    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        // Esc closes the inventory before it quits
        if code == KeyCode::Esc && InputMode::of(state) == InputMode::Inventory {
            return Command::Act(Action::ToggleInventory);
        }
        return Command::Quit;
    }

    match InputMode::of(state) {
        InputMode::GameOver => Command::Ignore,
        InputMode::Combat => match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char(' ') => {
                Command::Act(Action::Attack)
            }
            KeyCode::Char('h') | KeyCode::Char('H') => Command::Act(Action::Heal),
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Act(Action::Retreat),
            KeyCode::Char(c @ '1'..='9') => use_slot(state, c),
            _ => Command::Ignore,
        },
        InputMode::Prompt => match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Command::Act(Action::AcceptExploration)
            }
            KeyCode::Char('n') | KeyCode::Char('N') => Command::Act(Action::DeclineExploration),
            KeyCode::Char('i') | KeyCode::Char('I') => Command::Act(Action::ToggleInventory),
            other => direction_for(other)
                .map(|d| Command::Act(Action::Move(d)))
                .unwrap_or(Command::Ignore),
        },
        InputMode::Inventory => match code {
            KeyCode::Char('i') | KeyCode::Char('I') => Command::Act(Action::ToggleInventory),
            KeyCode::Char(c @ '1'..='9') => use_slot(state, c),
            _ => Command::Ignore,
        },
        InputMode::Explore => match code {
            KeyCode::Char('i') | KeyCode::Char('I') => Command::Act(Action::ToggleInventory),
            other => direction_for(other)
                .map(|d| Command::Act(Action::Move(d)))
                .unwrap_or(Command::Ignore),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::Enemy;
    use crate::core::config::Variant;
    use crate::map::ExplorationPrompt;

    #[test]
    fn test_explore_mode_moves() {
        let state = GameState::new(Variant::Space);
        assert_eq!(InputMode::of(&state), InputMode::Explore);
        assert_eq!(
            map_key(&state, KeyCode::Up),
            Command::Act(Action::Move(Direction::Up))
        );
        assert_eq!(
            map_key(&state, KeyCode::Char('d')),
            Command::Act(Action::Move(Direction::Right))
        );
        assert_eq!(map_key(&state, KeyCode::Char('x')), Command::Ignore);
        assert_eq!(map_key(&state, KeyCode::Char('q')), Command::Quit);
    }

    #[test]
    fn test_combat_mode_keys() {
        let mut state = GameState::new(Variant::Space);
        state.combat.start(Enemy::encounter(Variant::Space));
        assert_eq!(InputMode::of(&state), InputMode::Combat);
        assert_eq!(map_key(&state, KeyCode::Char('a')), Command::Act(Action::Attack));
        assert_eq!(map_key(&state, KeyCode::Char('h')), Command::Act(Action::Heal));
        assert_eq!(map_key(&state, KeyCode::Char('r')), Command::Act(Action::Retreat));
        assert_eq!(map_key(&state, KeyCode::Up), Command::Ignore);
        let first_id = state.inventory.items[0].id;
        assert_eq!(
            map_key(&state, KeyCode::Char('1')),
            Command::Act(Action::UseItem(first_id))
        );
    }

    #[test]
    fn test_prompt_mode_keys() {
        let mut state = GameState::new(Variant::Space);
        state.map.prompt = Some(ExplorationPrompt {
            cell: (1, 0),
            object_label: "a crashed probe".to_string(),
        });
        assert_eq!(
            map_key(&state, KeyCode::Char('y')),
            Command::Act(Action::AcceptExploration)
        );
        assert_eq!(
            map_key(&state, KeyCode::Char('n')),
            Command::Act(Action::DeclineExploration)
        );
    }

    #[test]
    fn test_inventory_opens_over_prompt() {
        let mut state = GameState::new(Variant::Space);
        state.map.prompt = Some(ExplorationPrompt {
            cell: (1, 0),
            object_label: "an ancient beacon".to_string(),
        });
        assert_eq!(
            map_key(&state, KeyCode::Char('i')),
            Command::Act(Action::ToggleInventory)
        );

        state.inventory_open = true;
        assert_eq!(InputMode::of(&state), InputMode::Inventory);
        let first_id = state.inventory.items[0].id;
        assert_eq!(
            map_key(&state, KeyCode::Char('1')),
            Command::Act(Action::UseItem(first_id))
        );
        assert_eq!(map_key(&state, KeyCode::Char('y')), Command::Ignore);

        // Closing the inventory brings the prompt back
        state.inventory_open = false;
        assert_eq!(InputMode::of(&state), InputMode::Prompt);
    }

    #[test]
    fn test_inventory_number_keys_use_nth_stack() {
        let mut state = GameState::new(Variant::Survival);
        state.inventory_open = true;
        let second_id = state.inventory.items[1].id;
        assert_eq!(
            map_key(&state, KeyCode::Char('2')),
            Command::Act(Action::UseItem(second_id))
        );
        assert_eq!(map_key(&state, KeyCode::Char('9')), Command::Ignore);
        assert_eq!(
            map_key(&state, KeyCode::Esc),
            Command::Act(Action::ToggleInventory)
        );
    }

    #[test]
    fn test_game_over_only_quits() {
        let mut state = GameState::new(Variant::Space);
        state.game_over = true;
        assert_eq!(map_key(&state, KeyCode::Up), Command::Ignore);
        assert_eq!(map_key(&state, KeyCode::Char('i')), Command::Ignore);
        assert_eq!(map_key(&state, KeyCode::Char('q')), Command::Quit);
    }
}
