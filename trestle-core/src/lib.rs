//! Core transaction engine for the Trestle protocol-translation proxy.
//!
//! The engine converts a single front-end container gesture into the
//! sequence of back-end click packets a compliant client would have sent,
//! while keeping a speculative mirror of the inventory that must agree
//! bit-for-bit with what the back-end server computes once it processes
//! those packets.

pub mod inventory;
pub mod session;
