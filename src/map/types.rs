//! Map, fog of war and exploration prompt data structures.

use crate::core::config::Variant;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Grid cell coordinates `(x, y)`.
pub type Cell = (u32, u32);

/// Things the player may stumble upon in an unexplored cell.
pub const SPACE_OBJECTS: [&str; 7] = [
    "an abandoned station",
    "a derelict freighter",
    "a strange signal",
    "an asteroid cave",
    "a cargo container",
    "a crashed probe",
    "an ancient beacon",
];

pub const SURVIVAL_OBJECTS: [&str; 7] = [
    "an abandoned house",
    "a looted store",
    "a cold campfire",
    "a rusted car",
    "a sealed bunker",
    "an old well",
    "a dark cave",
];

pub fn object_catalog(variant: Variant) -> &'static [&'static str; 7] {
    match variant {
        Variant::Space => &SPACE_OBJECTS,
        Variant::Survival => &SURVIVAL_OBJECTS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Marker position in map units. Always within
/// `[MARKER_SIZE / 2, MAP_SIZE - MARKER_SIZE / 2]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const MIN: u32 = MARKER_SIZE / 2;
    pub const MAX: u32 = MAP_SIZE - MARKER_SIZE / 2;

    pub fn start() -> Self {
        Self {
            x: Self::MIN,
            y: Self::MIN,
        }
    }

    /// Grid cell the marker occupies.
    pub fn cell(&self) -> Cell {
        (self.x / CELL_SIZE, self.y / CELL_SIZE)
    }
}

/// "Explore?" dialog for the current cell. Only one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationPrompt {
    pub cell: Cell,
    pub object_label: String,
}

/// Fog-of-war state.
///
/// `visited_cells` only grows. `question_cells` is always a subset of it:
/// a cell joins both on first visit and leaves `question_cells` once its
/// exploration prompt is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapState {
    pub position: Position,
    pub visited_cells: HashSet<Cell>,
    pub question_cells: HashSet<Cell>,
    pub prompt: Option<ExplorationPrompt>,
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}

impl MapState {
    /// Marker in the top-left corner; the start cell is already revealed.
    pub fn new() -> Self {
        let position = Position::start();
        let mut visited_cells = HashSet::new();
        visited_cells.insert(position.cell());
        Self {
            position,
            visited_cells,
            question_cells: HashSet::new(),
            prompt: None,
        }
    }

    pub fn current_cell(&self) -> Cell {
        self.position.cell()
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited_cells.contains(&cell)
    }

    pub fn is_question(&self, cell: Cell) -> bool {
        self.question_cells.contains(&cell)
    }
}
