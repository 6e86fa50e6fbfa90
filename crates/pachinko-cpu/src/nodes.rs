//! Node value table living in the `nodes` region of memory.
//!
//! Slot `n` holds the packed 16-bit lanes of node `n`. Reads of a slot that
//! was never written return the zero word of the fresh table.

use crate::error::CpuResult;
use pachinko_memory::layout::{node_addr, NODES, NODE_SLOT_SIZE};
use pachinko_memory::{Memory, MemoryError};
use pachinko_types::{LaneState, NodeId, LANES};

pub struct NodeTable<'m> {
    memory: &'m mut Memory,
}

impl<'m> NodeTable<'m> {
    pub fn new(memory: &'m mut Memory) -> Self {
        Self { memory }
    }

    fn addr(node: NodeId) -> CpuResult<usize> {
        if node.in_range() {
            Ok(node_addr(node))
        } else {
            Err(MemoryError::OutOfBounds {
                addr: node_addr(node),
                len: NODE_SLOT_SIZE,
            }
            .into())
        }
    }

    /// Zero every slot.
    pub fn clear(&mut self) -> CpuResult<()> {
        self.memory.write_bytes(NODES.base, &[0u8; NODES.size])?;
        Ok(())
    }

    pub fn get(&self, node: NodeId) -> CpuResult<u16> {
        Ok(self.memory.read_u16(Self::addr(node)?)?)
    }

    pub fn set(&mut self, node: NodeId, value: u16) -> CpuResult<()> {
        self.memory.write_u16(Self::addr(node)?, value)?;
        Ok(())
    }

    /// Present the input state at nodes 5..=8.
    pub fn load_inputs(&mut self, state: &LaneState) -> CpuResult<()> {
        for (node, word) in NodeId::INPUTS.into_iter().zip(state.0) {
            self.set(node, word)?;
        }
        Ok(())
    }

    /// Current values of nodes 1..=4.
    pub fn outputs(&self) -> CpuResult<LaneState> {
        let mut words = [0u16; LANES];
        for (word, node) in words.iter_mut().zip(NodeId::OUTPUTS) {
            *word = self.get(node)?;
        }
        Ok(LaneState(words))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pachinko_types::MAX_NODE_ID;

    #[test]
    fn test_get_set() {
        let mut memory = Memory::new();
        let mut nodes = NodeTable::new(&mut memory);
        nodes.set(NodeId(9), 0xabcd).unwrap();
        assert_eq!(nodes.get(NodeId(9)).unwrap(), 0xabcd);
        assert_eq!(nodes.get(NodeId(10)).unwrap(), 0);
        assert_eq!(memory.read_u16(0x2012).unwrap(), 0xabcd);
    }

    #[test]
    fn test_inputs_and_outputs() {
        let mut memory = Memory::new();
        let mut nodes = NodeTable::new(&mut memory);
        nodes.load_inputs(&LaneState::new([1, 2, 3, 4])).unwrap();
        assert_eq!(nodes.get(NodeId(5)).unwrap(), 1);
        assert_eq!(nodes.get(NodeId(8)).unwrap(), 4);
        nodes.set(NodeId(3), 0x33).unwrap();
        assert_eq!(nodes.outputs().unwrap(), LaneState::new([0, 0, 0x33, 0]));
    }

    #[test]
    fn test_out_of_range_nodes() {
        let mut memory = Memory::new();
        let mut nodes = NodeTable::new(&mut memory);
        assert!(nodes.get(NodeId(0)).is_err());
        assert!(nodes.set(NodeId(MAX_NODE_ID + 1), 1).is_err());
    }

    #[test]
    fn test_clear() {
        let mut memory = Memory::new();
        let mut nodes = NodeTable::new(&mut memory);
        nodes.set(NodeId(MAX_NODE_ID), 0xffff).unwrap();
        nodes.clear().unwrap();
        assert_eq!(nodes.get(NodeId(MAX_NODE_ID)).unwrap(), 0);
    }
}
