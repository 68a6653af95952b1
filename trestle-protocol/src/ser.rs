//! Field-level serialization traits for packet payloads.
//!
//! Multi-byte integers use network (big-endian) byte order.

use std::io::{Read, Result, Write};

/// A value that can be decoded from a packet payload.
pub trait ReadFrom: Sized {
    /// Reads this value from the given reader.
    fn read(data: &mut impl Read) -> Result<Self>;
}

/// A value that can be encoded into a packet payload.
pub trait WriteTo {
    /// Writes this value to the given writer.
    fn write(&self, writer: &mut impl Write) -> Result<()>;
}

impl ReadFrom for u8 {
    fn read(data: &mut impl Read) -> Result<Self> {
        let mut buf = [0u8; 1];
        data.read_exact(&mut buf)?;
        Ok(buf[0])
    }
}

impl WriteTo for u8 {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(&[*self])
    }
}

impl ReadFrom for i8 {
    fn read(data: &mut impl Read) -> Result<Self> {
        Ok(u8::read(data)? as i8)
    }
}

impl WriteTo for i8 {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(&[*self as u8])
    }
}

impl ReadFrom for i16 {
    fn read(data: &mut impl Read) -> Result<Self> {
        let mut buf = [0u8; 2];
        data.read_exact(&mut buf)?;
        Ok(Self::from_be_bytes(buf))
    }
}

impl WriteTo for i16 {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(&self.to_be_bytes())
    }
}

impl ReadFrom for i32 {
    fn read(data: &mut impl Read) -> Result<Self> {
        let mut buf = [0u8; 4];
        data.read_exact(&mut buf)?;
        Ok(Self::from_be_bytes(buf))
    }
}

impl WriteTo for i32 {
    fn write(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(&self.to_be_bytes())
    }
}
