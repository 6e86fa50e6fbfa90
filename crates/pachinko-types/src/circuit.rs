//! Circuit model: node identifiers, NAND gates and ordered gate lists.

use crate::error::{CircuitError, MalformedKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Highest node id that fits in the node table.
pub const MAX_NODE_ID: u16 = 2047;

/// A wire in the circuit.
///
/// Ids 1–4 are the primary outputs, 5–8 the primary inputs, and 9 upward
/// are internal nodes. Id 0 is reserved as the circuit-table terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u16);

impl NodeId {
    /// Primary output nodes, in state-word order.
    pub const OUTPUTS: [NodeId; 4] = [NodeId(1), NodeId(2), NodeId(3), NodeId(4)];
    /// Primary input nodes, in state-word order.
    pub const INPUTS: [NodeId; 4] = [NodeId(5), NodeId(6), NodeId(7), NodeId(8)];
    /// First id available for internal nodes.
    pub const FIRST_INTERNAL: NodeId = NodeId(9);

    pub fn is_primary_output(self) -> bool {
        (1..=4).contains(&self.0)
    }

    pub fn is_primary_input(self) -> bool {
        (5..=8).contains(&self.0)
    }

    pub fn is_internal(self) -> bool {
        self.0 >= Self::FIRST_INTERNAL.0 && self.0 <= MAX_NODE_ID
    }

    /// Whether the id addresses a slot of the node table.
    pub fn in_range(self) -> bool {
        self.0 != 0 && self.0 <= MAX_NODE_ID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<u16> for NodeId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

/// A two-input NAND gate: `output = !(input1 & input2)`.
///
/// Field names match the JSON wire format `{input1, input2, output}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gate {
    pub input1: NodeId,
    pub input2: NodeId,
    pub output: NodeId,
}

impl Gate {
    pub fn new(input1: u16, input2: u16, output: u16) -> Self {
        Self {
            input1: NodeId(input1),
            input2: NodeId(input2),
            output: NodeId(output),
        }
    }

    /// All three node ids, inputs first.
    pub fn nodes(&self) -> [NodeId; 3] {
        [self.input1, self.input2, self.output]
    }

    /// Evaluate the gate on packed 16-bit lanes.
    pub fn eval(a: u16, b: u16) -> u16 {
        !(a & b)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = nand({}, {})", self.output, self.input1, self.input2)
    }
}

/// An ordered list of gates.
///
/// List order defines the serialized layout only; evaluation order is
/// derived from the dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    pub fn push(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    /// Map each driven node to the index of the gate driving it.
    ///
    /// Only meaningful on a validated circuit; with duplicate drivers the
    /// first one wins.
    pub fn drivers(&self) -> BTreeMap<NodeId, usize> {
        let mut drivers = BTreeMap::new();
        for (index, gate) in self.gates.iter().enumerate() {
            drivers.entry(gate.output).or_insert(index);
        }
        drivers
    }

    /// Check node ranges and the single-driver invariant.
    ///
    /// Gates are checked in list order and the first violation is returned.
    pub fn validate(&self) -> Result<(), CircuitError> {
        let mut drivers: BTreeMap<NodeId, usize> = BTreeMap::new();
        for (index, gate) in self.gates.iter().enumerate() {
            if let Some(node) = gate.nodes().into_iter().find(|n| !n.in_range()) {
                return Err(CircuitError::MalformedGate {
                    index,
                    kind: MalformedKind::NodeOutOfRange(node),
                });
            }
            if gate.output.is_primary_input() {
                return Err(CircuitError::MalformedGate {
                    index,
                    kind: MalformedKind::DrivesPrimaryInput(gate.output),
                });
            }
            if let Some(&first) = drivers.get(&gate.output) {
                return Err(CircuitError::MalformedGate {
                    index,
                    kind: MalformedKind::MultipleDrivers {
                        node: gate.output,
                        first,
                    },
                });
            }
            drivers.insert(gate.output, index);
        }
        Ok(())
    }
}

impl From<Vec<Gate>> for Circuit {
    fn from(gates: Vec<Gate>) -> Self {
        Self { gates }
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self {
            gates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
