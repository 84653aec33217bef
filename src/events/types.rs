//! Narrative event records and the percentile band table.

use crate::combat::types::Enemy;
use crate::resources::Resource;

/// What an event does to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Add `delta` to a resource (clamped by the ledger).
    Adjust { resource: Resource, delta: i64 },
    /// Start a combat encounter with this enemy.
    Encounter(Enemy),
}

/// A single drawn event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: &'static str,
    pub text: String,
    pub effect: Effect,
}

impl Event {
    pub fn is_encounter(&self) -> bool {
        matches!(self.effect, Effect::Encounter(_))
    }

    /// Resource delta carried by the event, if any.
    pub fn delta(&self) -> Option<(Resource, i64)> {
        match self.effect {
            Effect::Adjust { resource, delta } => Some((resource, delta)),
            Effect::Encounter(_) => None,
        }
    }
}

/// Outcome category selected by a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandOutcome {
    Encounter,
    /// Magnitude is `floor(base * factor_tenths / 10)`.
    Adjust { resource: Resource, factor_tenths: i64 },
}

/// One percentile range of the event roll. Bands are listed in ascending
/// order; a band covers every roll above the previous band's `max_roll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBand {
    pub id: &'static str,
    pub max_roll: u32,
    pub outcome: BandOutcome,
}

pub const EVENT_BANDS: [EventBand; 7] = [
    EventBand {
        id: "combat",
        max_roll: 20,
        outcome: BandOutcome::Encounter,
    },
    EventBand {
        id: "found_fuel",
        max_roll: 35,
        outcome: BandOutcome::Adjust {
            resource: Resource::Fuel,
            factor_tenths: 8,
        },
    },
    EventBand {
        id: "found_parts",
        max_roll: 50,
        outcome: BandOutcome::Adjust {
            resource: Resource::Parts,
            factor_tenths: 6,
        },
    },
    EventBand {
        id: "black_hole",
        max_roll: 65,
        outcome: BandOutcome::Adjust {
            resource: Resource::Energy,
            factor_tenths: 3,
        },
    },
    EventBand {
        id: "nebula",
        max_roll: 75,
        outcome: BandOutcome::Adjust {
            resource: Resource::Energy,
            factor_tenths: 4,
        },
    },
    EventBand {
        id: "space_station",
        max_roll: 85,
        outcome: BandOutcome::Adjust {
            resource: Resource::Fuel,
            factor_tenths: 12,
        },
    },
    EventBand {
        id: "alien_tech",
        max_roll: 100,
        outcome: BandOutcome::Adjust {
            resource: Resource::Parts,
            factor_tenths: 20,
        },
    },
];
