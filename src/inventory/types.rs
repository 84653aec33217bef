//! Consumable items and the inventory collection.

use crate::core::config::Variant;
use crate::resources::Resource;
use serde::{Deserialize, Serialize};

/// Stable tag for a consumable. Use effects dispatch on this, never on the
/// display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Nanobandage,
    EnergyCell,
    RepairKit,
    FuelCartridge,
    Medkit,
    EnergyDrink,
}

/// What using one unit of an item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEffect {
    pub resource: Resource,
    pub amount: u32,
    pub log_text: &'static str,
}

impl ItemKind {
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Nanobandage => "Nanobandages",
            ItemKind::EnergyCell => "Energy Cell",
            ItemKind::RepairKit => "Repair Kit",
            ItemKind::FuelCartridge => "Fuel Cartridge",
            ItemKind::Medkit => "Medkit",
            ItemKind::EnergyDrink => "Energy Drink",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ItemKind::Nanobandage => "🩹",
            ItemKind::EnergyCell => "🔋",
            ItemKind::RepairKit => "🔧",
            ItemKind::FuelCartridge => "⛽",
            ItemKind::Medkit => "💊",
            ItemKind::EnergyDrink => "🥤",
        }
    }

    pub fn effect(self) -> ItemEffect {
        match self {
            ItemKind::Nanobandage => ItemEffect {
                resource: Resource::Health,
                amount: 40,
                log_text: "Applied nanobandages (+40 health)",
            },
            ItemKind::EnergyCell => ItemEffect {
                resource: Resource::Energy,
                amount: 50,
                log_text: "Plugged in an energy cell (+50 energy)",
            },
            ItemKind::RepairKit => ItemEffect {
                resource: Resource::Parts,
                amount: 30,
                log_text: "Unpacked a repair kit (+30 parts)",
            },
            ItemKind::FuelCartridge => ItemEffect {
                resource: Resource::Fuel,
                amount: 40,
                log_text: "Loaded a fuel cartridge (+40 fuel)",
            },
            ItemKind::Medkit => ItemEffect {
                resource: Resource::Health,
                amount: 25,
                log_text: "Used a medkit (+25 health)",
            },
            ItemKind::EnergyDrink => ItemEffect {
                resource: Resource::Energy,
                amount: 50,
                log_text: "Drank an energy drink (+50 energy)",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub kind: ItemKind,
    /// Always at least 1; emptied stacks are removed.
    pub quantity: u32,
}

impl InventoryItem {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }
}

/// Item stacks in display order. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Starting kit for the variant.
    pub fn starting(variant: Variant) -> Self {
        let stacks: &[(ItemKind, u32)] = match variant {
            Variant::Space => &[
                (ItemKind::Nanobandage, 2),
                (ItemKind::EnergyCell, 1),
                (ItemKind::RepairKit, 1),
                (ItemKind::FuelCartridge, 1),
            ],
            Variant::Survival => &[(ItemKind::Medkit, 3), (ItemKind::EnergyDrink, 2)],
        };
        let mut inventory = Self::new();
        for (kind, quantity) in stacks {
            inventory.add(*kind, *quantity);
        }
        inventory
    }

    /// Adds units of `kind`, stacking onto an existing stack of the same kind.
    /// Returns the id of the stack.
    pub fn add(&mut self, kind: ItemKind, quantity: u32) -> Option<u32> {
        if quantity == 0 {
            return None;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.kind == kind) {
            item.quantity += quantity;
            return Some(item.id);
        }
        let id = self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        self.items.push(InventoryItem { id, kind, quantity });
        Some(id)
    }

    pub fn get(&self, id: u32) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
