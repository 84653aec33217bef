//! Resource counters and their caps.

use crate::core::config::Variant;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// A named counter tracked by the ledger.
///
/// `Fuel` and `Parts` are the variant-specific supplies; the Survival
/// variant shows them as Water and Food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Health,
    Energy,
    Money,
    Bullets,
    Fuel,
    Parts,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Fuel,
        Resource::Parts,
        Resource::Bullets,
        Resource::Health,
        Resource::Energy,
        Resource::Money,
    ];

    /// Upper bound for the resource. Money and bullets are uncapped.
    pub fn cap(self) -> Option<u32> {
        match self {
            Resource::Health | Resource::Energy | Resource::Fuel | Resource::Parts => {
                Some(RESOURCE_CAP)
            }
            Resource::Money | Resource::Bullets => None,
        }
    }

    pub fn label(self, variant: Variant) -> &'static str {
        match (self, variant) {
            (Resource::Health, _) => "health",
            (Resource::Energy, _) => "energy",
            (Resource::Money, _) => "coins",
            (Resource::Bullets, _) => "bullets",
            (Resource::Fuel, Variant::Space) => "fuel",
            (Resource::Fuel, Variant::Survival) => "water",
            (Resource::Parts, Variant::Space) => "parts",
            (Resource::Parts, Variant::Survival) => "food",
        }
    }

    pub fn icon(self, variant: Variant) -> &'static str {
        match (self, variant) {
            (Resource::Health, _) => "❤️",
            (Resource::Energy, _) => "⚡",
            (Resource::Money, _) => "🪙",
            (Resource::Bullets, _) => "🔫",
            (Resource::Fuel, Variant::Space) => "⛽",
            (Resource::Fuel, Variant::Survival) => "💧",
            (Resource::Parts, Variant::Space) => "🔩",
            (Resource::Parts, Variant::Survival) => "🍗",
        }
    }
}

/// Current value of every resource. Values never go below zero and never
/// exceed their cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    health: u32,
    energy: u32,
    money: u32,
    bullets: u32,
    fuel: u32,
    parts: u32,
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLedger {
    /// Full tanks, full health, 100 bullets and 1000 coins.
    pub fn new() -> Self {
        Self {
            health: START_HEALTH,
            energy: START_ENERGY,
            money: START_MONEY,
            bullets: START_BULLETS,
            fuel: START_FUEL,
            parts: START_PARTS,
        }
    }

    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Health => self.health,
            Resource::Energy => self.energy,
            Resource::Money => self.money,
            Resource::Bullets => self.bullets,
            Resource::Fuel => self.fuel,
            Resource::Parts => self.parts,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Health => &mut self.health,
            Resource::Energy => &mut self.energy,
            Resource::Money => &mut self.money,
            Resource::Bullets => &mut self.bullets,
            Resource::Fuel => &mut self.fuel,
            Resource::Parts => &mut self.parts,
        }
    }

    /// Sets a resource, clamped into `[0, cap]`.
    pub fn set(&mut self, resource: Resource, value: u32) {
        let cap = resource.cap().unwrap_or(u32::MAX);
        *self.slot_mut(resource) = value.min(cap);
    }

    /// Adds a signed delta, clamped into `[0, cap]`. Returns the new value.
    pub fn apply_delta(&mut self, resource: Resource, delta: i64) -> u32 {
        let cap = resource.cap().unwrap_or(u32::MAX) as i64;
        let current = self.get(resource) as i64;
        let next = (current + delta).clamp(0, cap) as u32;
        *self.slot_mut(resource) = next;
        next
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_depleted(&self, resource: Resource) -> bool {
        self.get(resource) == 0
    }
}
