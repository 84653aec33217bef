//! Marker movement, fog reveal and the exploration prompt lifecycle.

use super::types::{object_catalog, Cell, Direction, ExplorationPrompt, MapState, Position};
use crate::core::config::Variant;
use crate::core::constants::MOVE_STEP;
use rand::Rng;

/// Result of a single marker move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub position: Position,
    pub cell: Cell,
    /// The cell was revealed by this move.
    pub newly_visited: bool,
    /// A prompt was opened (or re-opened) by this move.
    pub prompt_opened: bool,
}

/// Moves a position one step, clamped to the map bounds.
pub fn step(position: Position, direction: Direction) -> Position {
    let Position { x, y } = position;
    match direction {
        Direction::Up => Position {
            x,
            y: y.saturating_sub(MOVE_STEP).max(Position::MIN),
        },
        Direction::Down => Position {
            x,
            y: (y + MOVE_STEP).min(Position::MAX),
        },
        Direction::Left => Position {
            x: x.saturating_sub(MOVE_STEP).max(Position::MIN),
            y,
        },
        Direction::Right => Position {
            x: (x + MOVE_STEP).min(Position::MAX),
            y,
        },
    }
}

/// Moves the marker and updates the fog.
///
/// A cell seen for the first time joins both `visited_cells` and
/// `question_cells`. Standing on a question cell shows a prompt naming a
/// random object; a prompt already open for this cell is kept as is.
/// Walking off onto a cell with nothing to explore closes the prompt,
/// which counts as declining it.
pub fn move_marker(
    map: &mut MapState,
    direction: Direction,
    variant: Variant,
    rng: &mut impl Rng,
) -> MoveOutcome {
    map.position = step(map.position, direction);
    let cell = map.position.cell();

    let newly_visited = map.visited_cells.insert(cell);
    if newly_visited {
        map.question_cells.insert(cell);
    }

    let mut prompt_opened = false;
    if map.question_cells.contains(&cell) {
        let already_open = map.prompt.as_ref().is_some_and(|p| p.cell == cell);
        if !already_open {
            open_prompt(map, cell, variant, rng);
            prompt_opened = true;
        }
    } else {
        map.prompt = None;
    }

    MoveOutcome {
        position: map.position,
        cell,
        newly_visited,
        prompt_opened,
    }
}

fn open_prompt(map: &mut MapState, cell: Cell, variant: Variant, rng: &mut impl Rng) {
    let catalog = object_catalog(variant);
    let object_label = catalog[rng.gen_range(0..catalog.len())].to_string();
    map.prompt = Some(ExplorationPrompt { cell, object_label });
}

/// Closes the prompt and clears its cell's question marker.
/// Returns the explored cell, or `None` when no prompt is open.
pub fn accept_prompt(map: &mut MapState) -> Option<Cell> {
    let prompt = map.prompt.take()?;
    map.question_cells.remove(&prompt.cell);
    Some(prompt.cell)
}

/// Closes the prompt, leaving the question marker for the next visit.
/// Returns false when no prompt is open.
pub fn decline_prompt(map: &mut MapState) -> bool {
    map.prompt.take().is_some()
}
