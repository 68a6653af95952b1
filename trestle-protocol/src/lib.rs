//! Back-end protocol artifacts for the Trestle proxy.
//!
//! This crate contains the wire representations the transaction engine emits
//! towards the back-end server: the container click packet, the creative-mode
//! slot packet and the bundle selection side message, together with the codec
//! primitives they are built from. Transport framing, compression and
//! encryption are owned by the connection layer and are not part of this
//! crate.

pub mod codec;
pub mod packets;
pub mod ser;
