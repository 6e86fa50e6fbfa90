//! NAND-only circuit construction.
//!
//! NAND is universal, so every other gate is composed from it. The builder
//! hands out fresh internal nodes starting at [`NodeId::FIRST_INTERNAL`].

use crate::{Circuit, Gate, NodeId};

#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    gates: Vec<Gate>,
    next_node: u16,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self {
            gates: Vec::new(),
            next_node: NodeId::FIRST_INTERNAL.0,
        }
    }

    fn fresh(&mut self) -> NodeId {
        let node = NodeId(self.next_node);
        self.next_node = self.next_node.saturating_add(1);
        node
    }

    /// Add `output = nand(a, b)` with a caller-chosen output node.
    pub fn drive(&mut self, output: NodeId, a: NodeId, b: NodeId) -> &mut Self {
        self.gates.push(Gate {
            input1: a,
            input2: b,
            output,
        });
        self
    }

    /// `output = !a`, as a self-NAND.
    pub fn drive_not(&mut self, output: NodeId, a: NodeId) -> &mut Self {
        self.drive(output, a, a)
    }

    /// `output = a`, through two inversions.
    pub fn drive_buffer(&mut self, output: NodeId, a: NodeId) -> &mut Self {
        let inverted = self.not(a);
        self.drive_not(output, inverted)
    }

    /// `output = a & b`.
    pub fn drive_and(&mut self, output: NodeId, a: NodeId, b: NodeId) -> &mut Self {
        let n = self.nand(a, b);
        self.drive_not(output, n)
    }

    pub fn nand(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let output = self.fresh();
        self.drive(output, a, b);
        output
    }

    pub fn not(&mut self, a: NodeId) -> NodeId {
        self.nand(a, a)
    }

    pub fn and(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let n = self.nand(a, b);
        self.not(n)
    }

    pub fn or(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let na = self.not(a);
        let nb = self.not(b);
        self.nand(na, nb)
    }

    pub fn xor(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let n = self.nand(a, b);
        let left = self.nand(a, n);
        let right = self.nand(b, n);
        self.nand(left, right)
    }

    pub fn build(self) -> Circuit {
        Circuit::from(self.gates)
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Four self-NAND gates inverting each input onto its output (5→1 … 8→4).
pub fn inverter_bank() -> Circuit {
    let mut b = CircuitBuilder::new();
    for (output, input) in NodeId::OUTPUTS.into_iter().zip(NodeId::INPUTS) {
        b.drive_not(output, input);
    }
    b.build()
}

/// Each input copied onto its output through internal nodes 9–12.
///
/// All four inversions come first, then the four output drivers.
pub fn buffer_bank() -> Circuit {
    let mut b = CircuitBuilder::new();
    let inverted: Vec<NodeId> = NodeId::INPUTS.into_iter().map(|i| b.not(i)).collect();
    for (output, n) in NodeId::OUTPUTS.into_iter().zip(inverted) {
        b.drive_not(output, n);
    }
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverter_bank_layout() {
        let circuit = inverter_bank();
        assert_eq!(
            circuit.gates(),
            &[
                Gate::new(5, 5, 1),
                Gate::new(6, 6, 2),
                Gate::new(7, 7, 3),
                Gate::new(8, 8, 4),
            ]
        );
    }

    #[test]
    fn test_buffer_bank_layout() {
        let circuit = buffer_bank();
        assert_eq!(
            circuit.gates(),
            &[
                Gate::new(5, 5, 9),
                Gate::new(6, 6, 10),
                Gate::new(7, 7, 11),
                Gate::new(8, 8, 12),
                Gate::new(9, 9, 1),
                Gate::new(10, 10, 2),
                Gate::new(11, 11, 3),
                Gate::new(12, 12, 4),
            ]
        );
    }

    #[test]
    fn test_fresh_nodes_are_internal_and_distinct() {
        let mut b = CircuitBuilder::new();
        let x = b.xor(NodeId(5), NodeId(6));
        let y = b.or(NodeId(7), NodeId(8));
        assert!(x.is_internal());
        assert!(y.is_internal());
        assert_ne!(x, y);
        let circuit = b.build();
        assert_eq!(circuit.len(), 4 + 3);
        assert!(circuit.validate().is_ok());
    }

    #[test]
    fn test_drive_and_ends_on_output() {
        let mut b = CircuitBuilder::new();
        b.drive_and(NodeId(1), NodeId(5), NodeId(6));
        let circuit = b.build();
        assert_eq!(
            circuit.gates(),
            &[Gate::new(5, 6, 9), Gate::new(9, 9, 1)]
        );
    }
}
