//! Slot classification for the open container.

/// How a slot behaves under transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// An ordinary storage slot.
    Normal,
    /// A server-computed result slot (e.g. a crafting output). Items can
    /// only ever be taken from it, never deposited into it.
    Output,
}

/// Classifies the slots of the currently open container.
///
/// Implementations come from the per-container translation layer; the engine
/// only consumes the classification.
pub trait SlotLayout {
    /// Returns the classification of the given slot.
    fn slot_kind(&self, slot: i32) -> SlotKind;

    /// Returns the size of the crafting input grid, or -1 when the open
    /// container has none.
    fn grid_size(&self) -> i32;

    /// Returns whether the slot lies inside the crafting input grid.
    ///
    /// Grid slots sit directly after the output slot.
    fn is_crafting_grid(&self, slot: i32) -> bool {
        let grid_size = self.grid_size();
        grid_size != -1 && slot >= 1 && slot <= grid_size
    }
}

/// A layout with only normal slots and no crafting grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericSlotLayout;

impl SlotLayout for GenericSlotLayout {
    fn slot_kind(&self, _slot: i32) -> SlotKind {
        SlotKind::Normal
    }

    fn grid_size(&self) -> i32 {
        -1
    }
}

/// The layout of a crafting container: the output at slot 0, the input grid
/// directly behind it.
#[derive(Debug, Clone, Copy)]
pub struct CraftingSlotLayout {
    grid_size: i32,
}

impl CraftingSlotLayout {
    /// Creates a layout with the given input grid size (4 or 9 in practice).
    #[must_use]
    pub const fn new(grid_size: i32) -> Self {
        Self { grid_size }
    }
}

impl SlotLayout for CraftingSlotLayout {
    fn slot_kind(&self, slot: i32) -> SlotKind {
        if slot == 0 {
            SlotKind::Output
        } else {
            SlotKind::Normal
        }
    }

    fn grid_size(&self) -> i32 {
        self.grid_size
    }
}
