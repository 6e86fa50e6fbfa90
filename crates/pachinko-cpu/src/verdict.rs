//! Reading the verdict back out of memory.

use pachinko_memory::layout::{IO, VERDICT_ADDR};
use pachinko_memory::Memory;
use pachinko_types::Verdict;

/// Decode the little-endian verdict word at `0x1000`.
pub fn read_verdict(memory: &Memory) -> Verdict {
    let io = memory.region(IO);
    let offset = VERDICT_ADDR - IO.base;
    Verdict::from_word(u16::from_le_bytes([io[offset], io[offset + 1]]))
}
