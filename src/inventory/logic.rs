//! Item use.

use super::types::{Inventory, ItemEffect};
use crate::resources::ResourceLedger;

/// Uses one unit of the stack with `id`.
///
/// Applies the item's effect (capped by the ledger), then decrements the
/// stack and drops it when empty. Unknown ids do nothing and return `None`.
pub fn use_item(inventory: &mut Inventory, ledger: &mut ResourceLedger, id: u32) -> Option<ItemEffect> {
    let index = inventory.items.iter().position(|i| i.id == id)?;
    let effect = inventory.items[index].kind.effect();

    ledger.apply_delta(effect.resource, effect.amount as i64);

    let item = &mut inventory.items[index];
    item.quantity = item.quantity.saturating_sub(1);
    if item.quantity == 0 {
        inventory.items.remove(index);
    }

    Some(effect)
}
