//! The owned byte arena backing one evaluation.

use crate::error::{MemoryError, MemoryResult};
use crate::layout::{Region, MEMORY_SIZE};
use sha2::{Digest, Sha256};
use std::fmt;

/// A zero-initialised, fixed-size, byte-addressable address space.
///
/// A fresh arena is created for every evaluation; nothing is shared between
/// runs.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0u8; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn range(&self, addr: usize, len: usize) -> MemoryResult<std::ops::Range<usize>> {
        match addr.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(addr..end),
            _ => Err(MemoryError::OutOfBounds { addr, len }),
        }
    }

    pub fn read_bytes(&self, addr: usize, len: usize) -> MemoryResult<&[u8]> {
        let range = self.range(addr, len)?;
        Ok(&self.bytes[range])
    }

    pub fn write_bytes(&mut self, addr: usize, data: &[u8]) -> MemoryResult<()> {
        let range = self.range(addr, data.len())?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }

    /// Read a little-endian word.
    pub fn read_u16(&self, addr: usize) -> MemoryResult<u16> {
        let range = self.range(addr, 2)?;
        Ok(u16::from_le_bytes([self.bytes[range.start], self.bytes[range.start + 1]]))
    }

    /// Write a little-endian word.
    pub fn write_u16(&mut self, addr: usize, value: u16) -> MemoryResult<()> {
        self.write_bytes(addr, &value.to_le_bytes())
    }

    /// Bytes of a memory-map region.
    pub fn region(&self, region: Region) -> &[u8] {
        &self.bytes[region.base..region.end()]
    }

    /// SHA-256 of the whole address space, lowercase hex.
    pub fn sha256_hex(&self) -> String {
        hex_digest(&self.bytes)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("len", &self.bytes.len())
            .field("sha256", &self.sha256_hex())
            .finish()
    }
}

/// SHA-256 of `bytes` as lowercase hex.
pub(crate) fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{IO, NODES};

    #[test]
    fn test_new_is_zeroed() {
        let mem = Memory::new();
        assert_eq!(mem.len(), MEMORY_SIZE);
        assert!(mem.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_u16_little_endian() {
        let mut mem = Memory::new();
        mem.write_u16(0x1000, 0x1337).unwrap();
        assert_eq!(mem.read_bytes(0x1000, 2).unwrap(), &[0x37, 0x13]);
        assert_eq!(mem.read_u16(0x1000).unwrap(), 0x1337);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut mem = Memory::new();
        assert!(matches!(
            mem.read_u16(MEMORY_SIZE - 1),
            Err(MemoryError::OutOfBounds { addr, len: 2 }) if addr == MEMORY_SIZE - 1
        ));
        assert!(mem.write_bytes(usize::MAX, &[1]).is_err());
        assert!(mem.write_u16(MEMORY_SIZE - 2, 0xffff).is_ok());
    }

    #[test]
    fn test_region_slices() {
        let mut mem = Memory::new();
        mem.write_u16(IO.base, 0xbeef).unwrap();
        assert_eq!(mem.region(IO).len(), IO.size);
        assert_eq!(&mem.region(IO)[..2], &[0xef, 0xbe]);
        assert!(mem.region(NODES).iter().all(|&b| b == 0));
    }

    #[test]
    fn test_digest_tracks_content() {
        let a = Memory::new();
        let mut b = Memory::new();
        assert_eq!(a.sha256_hex(), b.sha256_hex());
        assert_eq!(a.sha256_hex().len(), 64);
        b.write_u16(0x2000, 1).unwrap();
        assert_ne!(a.sha256_hex(), b.sha256_hex());
    }
}
