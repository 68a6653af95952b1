//! The outgoing packet seam towards the back-end connection.

use trestle_protocol::packets::game::{SContainerClick, SSelectBundleItem, SSetCreativeModeSlot};

/// Receives the packets a plan produces, in order.
///
/// Production implementations forward to the back-end connection; tests use
/// [`RecordingSink`] to assert on the exact sequence.
pub trait PacketSink {
    /// Sends a container click.
    fn send_container_click(&mut self, packet: SContainerClick);

    /// Sends a bundle slot selection.
    fn send_select_bundle_item(&mut self, packet: SSelectBundleItem);

    /// Sends a creative slot overwrite.
    fn send_set_creative_mode_slot(&mut self, packet: SSetCreativeModeSlot);
}

/// Any packet a plan can emit, for recording.
#[derive(Debug)]
pub enum SentPacket {
    /// A container click.
    ContainerClick(SContainerClick),
    /// A bundle slot selection.
    SelectBundleItem(SSelectBundleItem),
    /// A creative slot overwrite.
    SetCreativeModeSlot(SSetCreativeModeSlot),
}

/// A [`PacketSink`] that records everything sent through it.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// The packets sent so far, oldest first.
    pub sent: Vec<SentPacket>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PacketSink for RecordingSink {
    fn send_container_click(&mut self, packet: SContainerClick) {
        self.sent.push(SentPacket::ContainerClick(packet));
    }

    fn send_select_bundle_item(&mut self, packet: SSelectBundleItem) {
        self.sent.push(SentPacket::SelectBundleItem(packet));
    }

    fn send_set_creative_mode_slot(&mut self, packet: SSetCreativeModeSlot) {
        self.sent.push(SentPacket::SetCreativeModeSlot(packet));
    }
}
