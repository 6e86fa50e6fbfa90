//! The program image: an opaque, immutable blob loaded into the program
//! region.
//!
//! The image is never parsed. It is shared read-only between evaluations,
//! so cloning only bumps a reference count.

use crate::arena::hex_digest;
use crate::error::{MemoryError, MemoryResult};
use log::debug;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, PartialEq, Eq)]
pub struct ProgramImage {
    bytes: Arc<[u8]>,
}

impl ProgramImage {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Read an image from storage.
    pub fn load(path: impl AsRef<Path>) -> MemoryResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| MemoryError::ProgramLoad {
            path: path.display().to_string(),
            source,
        })?;
        debug!("loaded program image {} ({} bytes)", path.display(), bytes.len());
        Ok(Self::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// SHA-256 of the image, lowercase hex.
    pub fn sha256_hex(&self) -> String {
        hex_digest(&self.bytes)
    }
}

impl fmt::Debug for ProgramImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgramImage")
            .field("len", &self.bytes.len())
            .field("sha256", &self.sha256_hex())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_bytes() {
        let image = ProgramImage::new(vec![1u8, 2, 3]);
        let copy = image.clone();
        assert_eq!(image, copy);
        assert!(std::ptr::eq(image.as_bytes(), copy.as_bytes()));
    }

    #[test]
    fn test_sha256_of_empty_image() {
        let image = ProgramImage::new(Vec::<u8>::new());
        assert!(image.is_empty());
        assert_eq!(
            image.sha256_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "pachinko-program-{}.bin",
            std::process::id()
        ));
        std::fs::write(&path, [0xde, 0xad, 0xbe, 0xef]).unwrap();
        let image = ProgramImage::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(image.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProgramImage::load("/nonexistent/nand_checker.bin").unwrap_err();
        assert!(matches!(err, MemoryError::ProgramLoad { .. }));
        assert!(err.to_string().contains("nand_checker.bin"));
    }
}
