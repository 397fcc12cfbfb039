use byteorder::{ByteOrder, BE};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::name::Name;
use crate::WireError;

/// Bounds-checked forward-only reader over one answer buffer.
///
/// Every read either returns the requested bytes and advances, or fails
/// without advancing. A decode routine chains its reads with `?`, so the
/// first failure aborts the whole routine.
pub struct Unpacker<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Unpacker<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn read(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if self.remaining() < n {
            return Err(WireError::Truncated);
        }

        let bytes = &self.buf[self.offset..self.offset + n];
        self.offset += n;
        Ok(bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        Ok(BE::read_u16(self.read(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        Ok(BE::read_u32(self.read(4)?))
    }

    pub fn read_ipv4(&mut self) -> Result<Ipv4Addr, WireError> {
        let b = self.read(4)?;
        Ok(Ipv4Addr::new(b[0], b[1], b[2], b[3]))
    }

    pub fn read_ipv6(&mut self) -> Result<Ipv6Addr, WireError> {
        let mut octets = [0u8; 16];
        octets.copy_from_slice(self.read(16)?);
        Ok(Ipv6Addr::from(octets))
    }

    /// Expand the (possibly compressed) name at the current offset and
    /// advance past the bytes it occupies here.
    pub fn read_name(&mut self) -> Result<Name, WireError> {
        let (name, next) = Name::expand(self.buf, self.offset)?;
        self.offset = next;
        Ok(name)
    }
}
