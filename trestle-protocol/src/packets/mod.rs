//! Packet definitions, grouped by connection phase.

pub mod game;
