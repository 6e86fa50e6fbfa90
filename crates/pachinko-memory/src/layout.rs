//! The memory map: every region and fixed offset of the address space.
//!
//! ```text
//! 0x0000 ┌──────────────┐
//!        │ program      │  program image bytes
//! 0x1000 ├──────────────┤
//!        │ io           │  +0x00 verdict word
//!        │              │  +0x10 input state  (4 × u16, nodes 5..=8)
//!        │              │  +0x18 output state (4 × u16, nodes 1..=4)
//! 0x2000 ├──────────────┤
//!        │ nodes        │  u16 per node id, slot n at 0x2000 + 2n
//! 0x3000 ├──────────────┤
//!        │ circuit      │  gate records [input1, input2, output] × u16,
//!        │              │  ended by an all-zero record
//! 0x4000 └──────────────┘
//! ```

use pachinko_types::{NodeId, LANES, MAX_NODE_ID};

/// Total size of the address space (bytes).
pub const MEMORY_SIZE: usize = 0x4000;

/// A named, fixed range of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub name: &'static str,
    pub base: usize,
    pub size: usize,
}

impl Region {
    pub const fn end(&self) -> usize {
        self.base + self.size
    }

    pub fn contains(&self, addr: usize) -> bool {
        addr >= self.base && addr < self.end()
    }
}

// ── Regions ──────────────────────────────────────────────────────────────────

pub const PROGRAM: Region = Region {
    name: "program",
    base: 0x0000,
    size: 0x1000,
};
pub const IO: Region = Region {
    name: "io",
    base: 0x1000,
    size: 0x1000,
};
pub const NODES: Region = Region {
    name: "nodes",
    base: 0x2000,
    size: 0x1000,
};
pub const CIRCUIT: Region = Region {
    name: "circuit",
    base: 0x3000,
    size: 0x1000,
};

/// All regions in address order.
pub const MEMORY_MAP: [Region; 4] = [PROGRAM, IO, NODES, CIRCUIT];

// ── I/O words ────────────────────────────────────────────────────────────────

/// Verdict word written by the evaluator.
pub const VERDICT_ADDR: usize = IO.base;
/// Size of one lane state in bytes.
pub const STATE_SIZE: usize = LANES * 2;
/// Words presented at nodes 5..=8.
pub const INPUT_STATE_ADDR: usize = IO.base + 0x10;
/// Words expected at nodes 1..=4.
pub const OUTPUT_STATE_ADDR: usize = INPUT_STATE_ADDR + STATE_SIZE;

// ── Node table ───────────────────────────────────────────────────────────────

pub const NODE_SLOT_SIZE: usize = 2;

/// Address of a node's value slot.
pub const fn node_addr(node: NodeId) -> usize {
    NODES.base + node.0 as usize * NODE_SLOT_SIZE
}

// ── Circuit table ────────────────────────────────────────────────────────────

/// One gate record: three little-endian `u16` fields.
pub const GATE_RECORD_SIZE: usize = 6;
/// Record slots in the circuit table, including the terminator.
pub const CIRCUIT_SLOTS: usize = CIRCUIT.size / GATE_RECORD_SIZE;
/// Largest circuit that still leaves room for the terminator.
pub const MAX_GATES: usize = CIRCUIT_SLOTS - 1;

/// Address of the record at `index`. Saturates instead of overflowing, so
/// a huge index yields an address no buffer contains.
pub const fn gate_addr(index: usize) -> usize {
    CIRCUIT
        .base
        .saturating_add(index.saturating_mul(GATE_RECORD_SIZE))
}

// Compile-time assertions
const _: () = assert!(PROGRAM.end() == IO.base);
const _: () = assert!(IO.end() == NODES.base);
const _: () = assert!(NODES.end() == CIRCUIT.base);
const _: () = assert!(CIRCUIT.end() == MEMORY_SIZE);
const _: () = assert!(OUTPUT_STATE_ADDR + STATE_SIZE <= IO.end());
const _: () = assert!(VERDICT_ADDR + 2 <= INPUT_STATE_ADDR);
const _: () = assert!(
    NODES.size / NODE_SLOT_SIZE == MAX_NODE_ID as usize + 1,
    "every node id must have a slot"
);
const _: () = assert!(MAX_GATES == 681);
