//! Authoritative mirror of the open container.

use super::item_stack::ItemStack;

/// What kind of container the back-end opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Any container without transaction-relevant special behavior.
    Generic,
    /// A crafting container; grid mutations have state-id side effects on
    /// back-ends running legacy sequencing.
    Crafting,
}

/// The proxy's authoritative view of the currently open container, as last
/// confirmed by the back-end.
///
/// Slots cover the container's own slots followed by the player's main
/// inventory and hotbar, in back-end slot order. The cursor ("held") stack is
/// carried here as well; the engine has exclusive access to both for the
/// duration of a plan (see the concurrency notes on [`ClickPlan`]).
///
/// [`ClickPlan`]: super::ClickPlan
#[derive(Debug)]
pub struct Inventory {
    container_id: i8,
    kind: ContainerKind,
    items: Vec<ItemStack>,
    cursor: ItemStack,
    state_id: i32,
    next_state_id: i32,
}

impl Inventory {
    /// Creates an empty mirror with the given slot count.
    #[must_use]
    pub fn new(container_id: i8, kind: ContainerKind, size: usize) -> Self {
        Self {
            container_id,
            kind,
            items: vec![ItemStack::empty(); size],
            cursor: ItemStack::empty(),
            state_id: 0,
            next_state_id: -1,
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns the container ID used on the wire.
    #[must_use]
    pub const fn container_id(&self) -> i8 {
        self.container_id
    }

    /// Returns the container kind.
    #[must_use]
    pub const fn container_kind(&self) -> ContainerKind {
        self.kind
    }

    /// Gets the item in the given slot.
    ///
    /// # Panics
    /// Panics if `slot` is negative or out of range; the outside-window
    /// sentinel must never reach the authoritative inventory.
    #[must_use]
    pub fn get_item(&self, slot: i32) -> &ItemStack {
        assert!(slot >= 0, "slot {slot} is not a real slot");
        &self.items[slot as usize]
    }

    /// Sets the item in the given slot.
    ///
    /// # Panics
    /// Panics if `slot` is negative or out of range.
    pub fn set_item(&mut self, slot: i32, item: ItemStack) {
        assert!(slot >= 0, "slot {slot} is not a real slot");
        self.items[slot as usize] = item;
    }

    /// Returns the held ("cursor") stack.
    #[must_use]
    pub const fn cursor(&self) -> &ItemStack {
        &self.cursor
    }

    /// Sets the held stack.
    pub fn set_cursor(&mut self, item: ItemStack) {
        self.cursor = item;
    }

    /// Returns the last state ID confirmed by the back-end.
    #[must_use]
    pub const fn state_id(&self) -> i32 {
        self.state_id
    }

    /// Sets the confirmed state ID.
    pub fn set_state_id(&mut self, state_id: i32) {
        self.state_id = state_id;
    }

    /// Returns the state ID the back-end will use for its next window
    /// update, or -1 when none is known.
    #[must_use]
    pub const fn next_state_id(&self) -> i32 {
        self.next_state_id
    }

    /// Records the state ID expected on the next window update.
    pub fn set_next_state_id(&mut self, next_state_id: i32) {
        self.next_state_id = next_state_id;
    }

    /// Advances the tracked state ID by `amount`, wrapping the way the
    /// back-end does.
    pub fn increment_state_id(&mut self, amount: i32) {
        self.state_id = (self.state_id + amount) & 0x7FFF;
    }

    /// Returns the slot index hotbar position `hotbar` (0-8) maps to within
    /// this container's slot order.
    #[must_use]
    pub fn offset_for_hotbar(&self, hotbar: u8) -> i32 {
        self.items.len() as i32 - 9 + i32::from(hotbar)
    }
}
