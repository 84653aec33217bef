//! Per-move resource upkeep.

use super::types::{Resource, ResourceLedger};
use crate::core::constants::{PASSIVE_DECAY, STARVATION_DAMAGE};

/// Resources that drain by one on every move.
pub const DECAYING_RESOURCES: [Resource; 3] = [Resource::Fuel, Resource::Parts, Resource::Energy];

/// Drains the decaying resources and applies starvation damage.
///
/// Each decaying resource drops by one (floored at zero). Every one of them
/// that sits at zero afterwards costs one health, so three empty supplies
/// cost three health per move. Returns the health actually lost.
pub fn apply_passive_decay(ledger: &mut ResourceLedger) -> u32 {
    for resource in DECAYING_RESOURCES {
        ledger.apply_delta(resource, -(PASSIVE_DECAY as i64));
    }

    let depleted = DECAYING_RESOURCES
        .iter()
        .filter(|r| ledger.is_depleted(**r))
        .count() as u32;

    if depleted == 0 {
        return 0;
    }

    let before = ledger.health();
    let after = ledger.apply_delta(Resource::Health, -((depleted * STARVATION_DAMAGE) as i64));
    before - after
}
