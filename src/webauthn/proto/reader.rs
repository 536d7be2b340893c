use crate::webauthn::error::Error;
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Cursor;

/// Bounds checked big-endian reader over a borrowed buffer.
///
/// Every read either advances the position by exactly the requested amount or fails with
/// [`Error::UnexpectedEnd`] and leaves the position untouched.
pub struct ByteReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteReader { cursor: Cursor::new(buf) }
    }

    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.position())
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn ensure(&self, wanted: usize) -> Result<(), Error> {
        let remaining = self.remaining();
        if wanted > remaining {
            return Err(Error::UnexpectedEnd {
                offset: self.position(),
                wanted,
                remaining,
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.ensure(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        self.ensure(2)?;
        Ok(self.cursor.read_u16::<BigEndian>()?)
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.ensure(4)?;
        Ok(self.cursor.read_u32::<BigEndian>()?)
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        self.ensure(8)?;
        Ok(self.cursor.read_u64::<BigEndian>()?)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        self.ensure(len)?;
        let buf: &'a [u8] = *self.cursor.get_ref();
        let start = self.position();
        self.cursor.set_position((start + len) as u64);
        Ok(&buf[start..start + len])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Reads a buffer prefixed with its length as a big-endian u16 (TPM2B and credential id layout).
    pub fn read_sized_u16(&mut self) -> Result<&'a [u8], Error> {
        let start = self.position();
        let len = self.read_u16()? as usize;
        self.read_bytes(len).map_err(|e| {
            self.cursor.set_position(start as u64);
            e
        })
    }

    pub fn read_remaining(&mut self) -> &'a [u8] {
        let buf: &'a [u8] = *self.cursor.get_ref();
        let start = self.position().min(buf.len());
        self.cursor.set_position(buf.len() as u64);
        &buf[start..]
    }

    /// Looks at the unread bytes without consuming them.
    pub fn peek_remaining(&self) -> &'a [u8] {
        let buf: &'a [u8] = *self.cursor.get_ref();
        &buf[self.position().min(buf.len())..]
    }

    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.read_bytes(len).map(|_| ())
    }
}
