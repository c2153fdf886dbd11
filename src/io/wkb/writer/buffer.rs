use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::error::Result;
use crate::io::wkb::common::Endianness;

/// A writer of WKB primitives in a single, fixed byte order.
#[derive(Debug)]
pub(crate) struct WKBWriteBuffer<W: Write> {
    writer: W,
    byte_order: Endianness,
}

impl<W: Write> WKBWriteBuffer<W> {
    pub fn new(writer: W, byte_order: Endianness) -> Self {
        Self { writer, byte_order }
    }

    pub fn write_byte_order(&mut self) -> Result<()> {
        self.writer.write_u8(self.byte_order.into())?;
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        match self.byte_order {
            Endianness::BigEndian => self.writer.write_u32::<BigEndian>(value)?,
            Endianness::LittleEndian => self.writer.write_u32::<LittleEndian>(value)?,
        }
        Ok(())
    }

    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        match self.byte_order {
            Endianness::BigEndian => self.writer.write_f64::<BigEndian>(value)?,
            Endianness::LittleEndian => self.writer.write_f64::<LittleEndian>(value)?,
        }
        Ok(())
    }

    pub fn write_doubles(&mut self, values: &[f64]) -> Result<()> {
        for value in values {
            self.write_f64(*value)?;
        }
        Ok(())
    }

    /// Write a count of elements, which must fit in an unsigned 32-bit integer.
    pub fn write_count(&mut self, count: usize) -> Result<()> {
        let count = u32::try_from(count).map_err(|_| {
            crate::error::GeoError::invalid("WKB element counts must fit in 32 bits")
        })?;
        self.write_u32(count)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn big_endian() {
        let mut out = vec![];
        let mut buf = WKBWriteBuffer::new(&mut out, Endianness::BigEndian);
        buf.write_byte_order().unwrap();
        buf.write_u32(1).unwrap();
        buf.write_f64(1.0).unwrap();

        assert_eq!(
            out,
            [0x00, 0, 0, 0, 1, 0x3F, 0xF0, 0, 0, 0, 0, 0, 0].to_vec()
        );
    }

    #[test]
    fn little_endian() {
        let mut out = vec![];
        let mut buf = WKBWriteBuffer::new(&mut out, Endianness::LittleEndian);
        buf.write_byte_order().unwrap();
        buf.write_count(2).unwrap();

        assert_eq!(out, [0x01, 2, 0, 0, 0].to_vec());
    }
}
