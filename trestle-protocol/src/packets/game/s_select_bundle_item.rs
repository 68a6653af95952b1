//! Bundle sub-slot selection packet (serverbound).

use std::io::{Result, Write};

use crate::codec::VarInt;
use crate::ser::WriteTo;

/// Tells the back-end which entry of a bundle's contents the player chose.
///
/// Sent immediately before the click packet that takes an item out of a
/// bundle sitting in a container slot. Never sent while the bundle itself is
/// on the cursor; only the first entry can be taken in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SSelectBundleItem {
    /// The container slot holding the bundle.
    pub slot: i32,
    /// The index of the chosen entry within the bundle's contents.
    pub selected_item_index: i32,
}

impl WriteTo for SSelectBundleItem {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        VarInt(self.slot).write(writer)?;
        VarInt(self.selected_item_index).write(writer)
    }
}
