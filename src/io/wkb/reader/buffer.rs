use std::io::{Cursor, ErrorKind};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::{GeoError, Result};
use crate::io::wkb::common::Endianness;

fn read_error(err: std::io::Error) -> GeoError {
    if err.kind() == ErrorKind::UnexpectedEof {
        GeoError::UnexpectedEof
    } else {
        GeoError::IOError(err)
    }
}

/// A forward-only reader of WKB primitives over a byte slice.
///
/// Every geometry header starts with a byte order marker, which switches the endianness of all
/// following reads until the next marker.
#[derive(Debug)]
pub(crate) struct WKBBuffer<'a> {
    reader: Cursor<&'a [u8]>,
    byte_order: Endianness,
}

impl<'a> WKBBuffer<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            reader: Cursor::new(buf),
            byte_order: Endianness::LittleEndian,
        }
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = byte_order;
    }

    /// The number of bytes not read yet.
    pub fn remaining(&self) -> usize {
        let len = self.reader.get_ref().len() as u64;
        len.saturating_sub(self.reader.position()) as usize
    }

    /// Read a byte order marker and use it for all following reads.
    pub fn read_byte_order(&mut self) -> Result<Endianness> {
        let byte = self.reader.read_u8().map_err(read_error)?;
        self.byte_order = Endianness::try_from(byte)?;
        Ok(self.byte_order)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        match self.byte_order {
            Endianness::BigEndian => self.reader.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.reader.read_u32::<LittleEndian>(),
        }
        .map_err(read_error)
    }

    /// Fill `dst` with consecutive doubles.
    pub fn read_doubles(&mut self, dst: &mut [f64]) -> Result<()> {
        let byte_len = dst.len() * 8;
        if self.remaining() < byte_len {
            return Err(GeoError::UnexpectedEof);
        }
        match self.byte_order {
            Endianness::BigEndian => self.reader.read_f64_into::<BigEndian>(dst),
            Endianness::LittleEndian => self.reader.read_f64_into::<LittleEndian>(dst),
        }
        .map_err(read_error)
    }

    /// Read an element count, and check that the buffer can hold at least that many elements of
    /// `min_size` bytes each.
    pub fn read_count(&mut self, min_size: usize) -> Result<usize> {
        let count = self.read_u32()? as usize;
        if count.saturating_mul(min_size) > self.remaining() {
            return Err(GeoError::UnexpectedEof);
        }
        Ok(count)
    }
}
