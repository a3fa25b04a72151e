//! A cursor over a big-endian byte slice, plus the `ReadBuffer` trait used to
//! decode the on-disk GSUB records into the table model.
//!
//! This mirrors the `Buffer`/`ReadBuffer` split the teacher table parsers use
//! (`buffer.get::<T>()`, `buffer.get_vec::<T>(count)`,
//! `buffer.set_offset_from(base, relative)`), made fallible: every read can
//! run off the end of the slice, and that has to surface as
//! `GsubError::ShortRead` rather than a panic.

use byteorder::{BigEndian, ByteOrder};

use crate::error::GsubError;

pub struct Buffer<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Buffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn set_offset_from(&mut self, base: usize, relative: u16) {
        self.offset = base + relative as usize;
    }

    /// Reads one `T` at the current offset, advancing past it.
    pub fn get<T: ReadBuffer>(&mut self) -> Result<T, GsubError> {
        T::read(self)
    }

    /// Reads `count` consecutive `T`s.
    pub fn get_vec<T: ReadBuffer>(&mut self, count: u16) -> Result<Vec<T>, GsubError> {
        (0..count).map(|_| self.get()).collect()
    }

    /// Reads a `T` at `base + offset`, unless `offset` is the OpenType
    /// null-offset sentinel `0`, in which case no read happens.
    pub fn get_or_none<T: ReadBuffer>(
        &mut self,
        base: usize,
        offset: u16,
    ) -> Result<Option<T>, GsubError> {
        if offset == 0 {
            return Ok(None);
        }
        self.set_offset_from(base, offset);
        Ok(Some(self.get()?))
    }

    /// Advances past `count` values of size `T` without reading them.
    pub fn skip<T>(&mut self, count: usize) -> Result<(), GsubError> {
        let bytes = count * std::mem::size_of::<T>();
        self.require(bytes)?;
        self.offset += bytes;
        Ok(())
    }

    fn require(&self, len: usize) -> Result<(), GsubError> {
        if self.offset + len > self.data.len() {
            return Err(GsubError::ShortRead {
                needed: self.offset + len - self.data.len(),
                available: self.data.len().saturating_sub(self.offset),
            });
        }
        Ok(())
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], GsubError> {
        self.require(len)?;
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }
}

/// Types that can be decoded, big-endian, from a [`Buffer`].
pub trait ReadBuffer: Sized {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError>;
}

impl ReadBuffer for u8 {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(buffer.read_bytes(1)?[0])
    }
}

impl ReadBuffer for i8 {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(buffer.read_bytes(1)?[0] as i8)
    }
}

impl ReadBuffer for u16 {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(BigEndian::read_u16(buffer.read_bytes(2)?))
    }
}

impl ReadBuffer for i16 {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(BigEndian::read_i16(buffer.read_bytes(2)?))
    }
}

impl ReadBuffer for u32 {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(BigEndian::read_u32(buffer.read_bytes(4)?))
    }
}

impl ReadBuffer for i32 {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(BigEndian::read_i32(buffer.read_bytes(4)?))
    }
}
