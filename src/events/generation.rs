//! Random event generation.
//!
//! Every move draws two numbers: a percentile roll in [1, 100] that picks the
//! band, and a base value in [-100, 100] that the band scales into the
//! resource delta. Band table:
//!
//! | roll   | event         | effect                    |
//! |--------|---------------|---------------------------|
//! | 1-20   | combat        | spawn the encounter enemy |
//! | 21-35  | found_fuel    | fuel, base × 0.8          |
//! | 36-50  | found_parts   | parts, base × 0.6         |
//! | 51-65  | black_hole    | energy, base × 0.3        |
//! | 66-75  | nebula        | energy, base × 0.4        |
//! | 76-85  | space_station | fuel, base × 1.2          |
//! | 86-100 | alien_tech    | parts, base × 2.0         |

use super::types::{BandOutcome, Effect, Event, EventBand, EVENT_BANDS};
use crate::combat::types::Enemy;
use crate::core::config::Variant;
use crate::core::constants::*;
use rand::Rng;

/// Finds the band covering `roll`. Out-of-range rolls are clamped first.
pub fn band_for_roll(roll: u32) -> &'static EventBand {
    let roll = roll.clamp(EVENT_ROLL_MIN, EVENT_ROLL_MAX);
    EVENT_BANDS
        .iter()
        .find(|band| roll <= band.max_roll)
        .unwrap_or(&EVENT_BANDS[EVENT_BANDS.len() - 1])
}

/// `floor(base * factor_tenths / 10)`, computed exactly in integers.
pub fn scaled_magnitude(base: i32, factor_tenths: i64) -> i64 {
    (base as i64 * factor_tenths).div_euclid(10)
}

/// Deterministic event for a given roll and base value.
pub fn event_for_roll(variant: Variant, roll: u32, base: i32) -> Event {
    let band = band_for_roll(roll);
    match band.outcome {
        BandOutcome::Encounter => Event {
            id: band.id,
            text: encounter_text(variant).to_string(),
            effect: Effect::Encounter(Enemy::encounter(variant)),
        },
        BandOutcome::Adjust {
            resource,
            factor_tenths,
        } => {
            let delta = scaled_magnitude(base, factor_tenths);
            Event {
                id: band.id,
                text: adjust_text(band.id, variant, delta, resource.label(variant)),
                effect: Effect::Adjust { resource, delta },
            }
        }
    }
}

/// Draws a random event.
pub fn generate_event(variant: Variant, rng: &mut impl Rng) -> Event {
    let roll = rng.gen_range(EVENT_ROLL_MIN..=EVENT_ROLL_MAX);
    let base = rng.gen_range(EVENT_BASE_MIN..=EVENT_BASE_MAX);
    event_for_roll(variant, roll, base)
}

fn encounter_text(variant: Variant) -> &'static str {
    match variant {
        Variant::Space => "You ran into a space pirate!",
        Variant::Survival => "You ran into a raider!",
    }
}

fn adjust_text(id: &str, variant: Variant, delta: i64, label: &str) -> String {
    let story = match (id, variant) {
        ("found_fuel", Variant::Space) => "You found a drifting fuel tanker!",
        ("found_fuel", Variant::Survival) => "You found a rain cistern!",
        ("found_parts", Variant::Space) => "You mined rare metals in an asteroid belt!",
        ("found_parts", Variant::Survival) => "You scavenged a ruined pantry!",
        ("black_hole", Variant::Space) => "A black hole's gravity strained the ship's systems",
        ("black_hole", Variant::Survival) => "A dust storm wore you down",
        ("nebula", Variant::Space) => "Crossing a nebula scrambled the navigation",
        ("nebula", Variant::Survival) => "A freezing night sapped your strength",
        ("space_station", Variant::Space) => "You docked at a friendly space station",
        ("space_station", Variant::Survival) => "Settlers shared their well with you",
        ("alien_tech", Variant::Space) => "You found the wreck of an alien ship!",
        ("alien_tech", Variant::Survival) => "You found an abandoned supply drop!",
        _ => "Something happened",
    };
    format!("{} ({:+} {})", story, delta, label)
}
