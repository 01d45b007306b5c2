// String pool module
// Interned lexeme text stored as NUL-terminated runs in one growable buffer

use super::buffer::GrowBuffer;
use super::error::ConfigError;
use memchr::memchr;
use std::str;

/// Byte offset of an interned string inside its [`StringPool`].
///
/// Offsets are only meaningful for the pool that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolOffset(pub(crate) usize);

impl PoolOffset {
    /// The reserved empty string at the start of every pool
    pub const EMPTY: PoolOffset = PoolOffset(0);

    pub fn get(self) -> usize {
        self.0
    }
}

/// Append-only arena for all key and string-value text of one store.
///
/// Every run is terminated by a NUL byte, so an offset alone identifies a
/// string. Byte 0 is a NUL that stands for the empty string.
#[derive(Debug, Clone)]
pub struct StringPool {
    bytes: GrowBuffer<u8>,
}

impl StringPool {
    pub fn new() -> Result<Self, ConfigError> {
        let mut bytes = GrowBuffer::new();
        bytes.append(0)?;
        Ok(Self { bytes })
    }

    /// Copy `text` into the pool and return the offset of its first byte.
    ///
    /// `text` must not contain NUL; the scanner rejects such input before
    /// anything is interned.
    pub fn intern(&mut self, text: &str) -> Result<PoolOffset, ConfigError> {
        debug_assert!(memchr(0, text.as_bytes()).is_none());
        self.bytes.ensure_capacity(text.len() + 1)?;
        let offset = self.bytes.extend_from_slice(text.as_bytes())?;
        self.bytes.append(0)?;
        Ok(PoolOffset(offset))
    }

    /// Resolve an offset back to its text
    pub fn resolve(&self, offset: PoolOffset) -> Option<&str> {
        let tail = self.bytes.as_slice().get(offset.0..)?;
        let end = memchr(0, tail)?;
        str::from_utf8(&tail[..end]).ok()
    }

    /// Total bytes in use, terminators included
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when nothing beyond the reserved empty string was interned
    pub fn is_empty(&self) -> bool {
        self.bytes.len() <= 1
    }
}
