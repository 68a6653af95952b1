//! Network slot data for inventory packets.
//!
//! This is a simplified representation of an item stack for network
//! serialization: count plus item id, with no component payload. The engine
//! only ever reports point-in-time snapshots, so this is all the back-end
//! needs to correlate a transaction.

use std::io::{Result, Write};

use crate::codec::VarInt;
use crate::ser::WriteTo;

/// A slot's contents for network transmission.
///
/// Serialized as:
/// - count: VarInt (0 = empty slot)
/// - if count > 0:
///   - item_id: VarInt
///   - components_to_add_count: VarInt (always 0)
///   - components_to_remove_count: VarInt (always 0)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotData {
    /// The item ID (back-end registry ID).
    pub item_id: Option<i32>,
    /// The item count.
    pub count: i32,
}

impl SlotData {
    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item_id: None,
            count: 0,
        }
    }

    /// Creates a slot with an item.
    #[must_use]
    pub const fn new(item_id: i32, count: i32) -> Self {
        Self {
            item_id: Some(item_id),
            count,
        }
    }

    /// The reserved "force a full window refresh" sentinel.
    ///
    /// An intentionally nonsensical stack (item id 1 with an impossible
    /// count) that compliant back-end servers reject, prompting them to
    /// resend the whole window. Used as the carried-item field of the last
    /// click packet of a plan when a refresh is pending.
    #[must_use]
    pub const fn refresh() -> Self {
        Self::new(1, 127)
    }

    /// Returns whether this slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count <= 0 || self.item_id.is_none()
    }
}

impl WriteTo for SlotData {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        if self.is_empty() {
            VarInt(0).write(writer)?;
        } else {
            VarInt(self.count).write(writer)?;
            VarInt(self.item_id.unwrap_or(0)).write(writer)?;
            VarInt(0).write(writer)?; // components_to_add
            VarInt(0).write(writer)?; // components_to_remove
        }
        Ok(())
    }
}
