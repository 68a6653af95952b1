//! Codec primitives shared by packet definitions.

mod var_int;

pub use var_int::VarInt;
