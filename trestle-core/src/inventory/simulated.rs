//! Copy-on-write overlay over the authoritative inventory.

use rustc_hash::FxHashMap;

use super::container::Inventory;
use super::item_stack::ItemStack;

/// The speculative state a plan simulates against.
///
/// Reads fall through to the authoritative [`Inventory`] until a slot is
/// first written; from then on the overlay's copy wins. The authoritative
/// state is never touched until the plan commits.
#[derive(Debug, Default)]
pub struct SimulatedInventory {
    slots: FxHashMap<i32, ItemStack>,
    cursor: Option<ItemStack>,
}

impl SimulatedInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all speculative state.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.cursor = None;
    }

    /// Reads the current speculative item in `slot`.
    ///
    /// Reads never dirty the overlay; all mutation goes through
    /// [`Self::set_item`] with an owned stack, so the authoritative value
    /// can be borrowed directly until the slot is first written.
    pub fn item<'a>(&'a self, inventory: &'a Inventory, slot: i32) -> &'a ItemStack {
        self.slots.get(&slot).unwrap_or_else(|| inventory.get_item(slot))
    }

    /// Replaces the speculative item in `slot`.
    pub fn set_item(&mut self, slot: i32, item: ItemStack) {
        self.slots.insert(slot, item);
    }

    /// Reads the current speculative cursor.
    pub fn cursor<'a>(&'a self, inventory: &'a Inventory) -> &'a ItemStack {
        self.cursor.as_ref().unwrap_or_else(|| inventory.cursor())
    }

    /// Replaces the speculative cursor.
    pub fn set_cursor(&mut self, item: ItemStack) {
        self.cursor = Some(item);
    }

    /// Takes the speculative cursor, if it was ever written.
    pub fn take_cursor(&mut self) -> Option<ItemStack> {
        self.cursor.take()
    }

    /// Drains all written slots for committing.
    pub fn drain_slots(&mut self) -> impl Iterator<Item = (i32, ItemStack)> + '_ {
        self.slots.drain()
    }
}

#[cfg(test)]
mod test {
    use super::SimulatedInventory;
    use crate::inventory::{ContainerKind, Inventory, ItemStack};

    #[test]
    fn reads_fall_through_until_written() {
        let mut inventory = Inventory::new(1, ContainerKind::Generic, 9);
        inventory.set_item(3, ItemStack::new(8, 5));

        let mut overlay = SimulatedInventory::new();
        assert_eq!(overlay.item(&inventory, 3), &ItemStack::new(8, 5));

        overlay.set_item(3, ItemStack::new(9, 1));
        assert_eq!(overlay.item(&inventory, 3), &ItemStack::new(9, 1));
        assert_eq!(inventory.get_item(3), &ItemStack::new(8, 5));
    }

    #[test]
    fn cursor_shadows_the_authoritative_held_item_once_written() {
        let mut inventory = Inventory::new(1, ContainerKind::Generic, 9);
        inventory.set_cursor(ItemStack::new(8, 2));

        let mut overlay = SimulatedInventory::new();
        assert_eq!(overlay.cursor(&inventory), &ItemStack::new(8, 2));

        overlay.set_cursor(ItemStack::empty());
        assert!(overlay.cursor(&inventory).is_empty());
        assert_eq!(inventory.cursor(), &ItemStack::new(8, 2));
    }

    #[test]
    fn reset_discards_everything() {
        let mut inventory = Inventory::new(1, ContainerKind::Generic, 9);
        inventory.set_cursor(ItemStack::new(8, 2));

        let mut overlay = SimulatedInventory::new();
        overlay.set_item(0, ItemStack::new(9, 1));
        overlay.set_cursor(ItemStack::empty());
        overlay.reset();

        assert!(overlay.item(&inventory, 0).is_empty());
        assert_eq!(overlay.cursor(&inventory), &ItemStack::new(8, 2));
    }
}
