//! Lane states: the words presented at the primary inputs and expected at
//! the primary outputs.
//!
//! Word `k` of an input state drives node `5 + k`; word `k` of an output
//! state is compared against node `1 + k`. Every bit of a word is an
//! independent trial, so one evaluation runs 16 trials per node in parallel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of state words (one per primary input or output node).
pub const LANES: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneState(pub [u16; LANES]);

impl LaneState {
    pub const fn new(words: [u16; LANES]) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[u16; LANES] {
        &self.0
    }

    /// Bitwise complement of every word.
    pub fn inverted(&self) -> Self {
        Self(self.0.map(|w| !w))
    }

    /// Little-endian byte image, word 0 first.
    pub fn to_le_bytes(&self) -> [u8; LANES * 2] {
        let mut bytes = [0u8; LANES * 2];
        for (chunk, word) in bytes.chunks_exact_mut(2).zip(self.0) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }
}

impl From<[u16; LANES]> for LaneState {
    fn from(words: [u16; LANES]) -> Self {
        Self(words)
    }
}

impl fmt::Display for LaneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{word:#06x}")?;
        }
        write!(f, "]")
    }
}
