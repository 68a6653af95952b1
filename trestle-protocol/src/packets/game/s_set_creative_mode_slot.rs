//! Set creative mode slot packet (serverbound).

use std::io::{Result, Write};

use crate::ser::WriteTo;

use super::slot_data::SlotData;

/// Directly sets a slot's contents on a back-end with no server-authoritative
/// transaction concept (creative mode).
///
/// The engine emits one of these per changed slot instead of click packets
/// when the session is in the privileged mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SSetCreativeModeSlot {
    /// The slot index. Negative values mean drop the item.
    pub slot: i16,
    /// The item to set in the slot.
    pub item: SlotData,
}

impl WriteTo for SSetCreativeModeSlot {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        self.slot.write(writer)?;
        self.item.write(writer)
    }
}
