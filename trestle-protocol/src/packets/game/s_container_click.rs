//! Container click packet (serverbound).

use std::io::{Result, Write};

use crate::codec::VarInt;
use crate::ser::WriteTo;

use super::slot_data::SlotData;

/// The type of click action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClickType {
    /// Normal left or right click.
    Pickup = 0,
    /// Shift-click.
    QuickMove = 1,
    /// Number key or offhand swap.
    Swap = 2,
    /// Middle-click clone (creative).
    Clone = 3,
    /// Q key throw.
    Throw = 4,
    /// Drag operation.
    QuickCraft = 5,
    /// Double-click collect.
    PickupAll = 6,
}

impl WriteTo for ClickType {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        VarInt(*self as i32).write(writer)
    }
}

/// A slot change entry in a container click packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotChange {
    /// The slot index.
    pub slot: i16,
    /// The new slot contents.
    pub data: SlotData,
}

impl WriteTo for SlotChange {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        self.slot.write(writer)?;
        self.data.write(writer)
    }
}

/// A click on a container slot, as the back-end expects it from a client.
///
/// The engine emits exactly one of these per queued action. `changed_slots`
/// carries the snapshot of every non-cursor slot the action touched, and
/// `carried_item` the point-in-time stack snapshot the targeted back-end
/// version expects (post-action cursor on modern servers, pre-action slot
/// contents under legacy sequencing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SContainerClick {
    /// The container ID.
    pub container_id: i8,
    /// State ID for synchronization.
    pub state_id: i32,
    /// The slot that was clicked.
    pub slot: i16,
    /// The mouse button used.
    pub button: i8,
    /// The type of click action.
    pub click_type: ClickType,
    /// Slots that changed as a result of this click.
    pub changed_slots: Vec<SlotChange>,
    /// The item snapshot accompanying the click (empty when the action
    /// carries no item field).
    pub carried_item: SlotData,
}

impl WriteTo for SContainerClick {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        self.container_id.write(writer)?;
        VarInt(self.state_id).write(writer)?;
        self.slot.write(writer)?;
        self.button.write(writer)?;
        self.click_type.write(writer)?;

        VarInt(self.changed_slots.len() as i32).write(writer)?;
        for change in &self.changed_slots {
            change.write(writer)?;
        }

        self.carried_item.write(writer)
    }
}
