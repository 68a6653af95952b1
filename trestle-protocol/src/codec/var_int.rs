//! Variable-length integer encoding.

use std::io::{self, Read, Result, Write};

use crate::ser::{ReadFrom, WriteTo};

/// A variable-length 32-bit integer.
///
/// Encoded in groups of 7 bits, least significant group first, with the high
/// bit of each byte marking continuation. At most 5 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt(pub i32);

impl VarInt {
    /// The maximum number of bytes a `VarInt` occupies on the wire.
    pub const MAX_SIZE: usize = 5;

    /// Returns the exact number of bytes this value will occupy when written.
    #[must_use]
    pub fn written_size(val: i32) -> usize {
        match val {
            0 => 1,
            n => (31 - n.leading_zeros() as usize) / 7 + 1,
        }
    }
}

impl WriteTo for VarInt {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        let mut val = self.0 as u32;
        loop {
            let b = (val & 0x7F) as u8;
            val >>= 7;
            if val == 0 {
                b.write(writer)?;
                return Ok(());
            }
            (b | 0x80).write(writer)?;
        }
    }
}

impl ReadFrom for VarInt {
    fn read(data: &mut impl Read) -> Result<Self> {
        let mut val = 0;
        for i in 0..Self::MAX_SIZE {
            let byte = u8::read(data)?;
            val |= (i32::from(byte) & 0x7F) << (i * 7);
            if byte & 0x80 == 0 {
                return Ok(Self(val));
            }
        }
        Err(io::Error::other("VarInt wider than 5 bytes"))
    }
}

#[cfg(test)]
mod test {
    use super::VarInt;
    use crate::ser::{ReadFrom, WriteTo};

    fn encode(val: i32) -> Vec<u8> {
        let mut buf = Vec::new();
        VarInt(val).write(&mut buf).unwrap();
        buf
    }

    #[test]
    fn known_encodings() {
        assert_eq!(encode(0), [0x00]);
        assert_eq!(encode(1), [0x01]);
        assert_eq!(encode(127), [0x7F]);
        assert_eq!(encode(128), [0x80, 0x01]);
        assert_eq!(encode(300), [0xAC, 0x02]);
        assert_eq!(encode(-1), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn round_trips_written_size() {
        for val in [0, 1, 127, 128, 300, 25565, i32::MAX, -1, i32::MIN] {
            let buf = encode(val);
            assert_eq!(buf.len(), VarInt::written_size(val));
            let decoded = VarInt::read(&mut buf.as_slice()).unwrap();
            assert_eq!(decoded.0, val);
        }
    }
}
