//! Dependency scheduling.
//!
//! A gate depends on the gates driving its inputs. Primary inputs have no
//! driver. Gates are ordered with Kahn's algorithm, seeded and drained in
//! gate-index order so the same circuit always yields the same schedule.
//!
//! A self-NAND `{i, i, j}` reads one node; it is an ordinary gate. A gate
//! reading its own output, or any chain of gates feeding back into itself,
//! is never scheduled and is reported as a cycle.

use crate::error::{CpuError, CpuResult};
use crate::gas::Gas;
use pachinko_types::{Circuit, NodeId};
use std::collections::{BTreeSet, VecDeque};

/// Order gates so every gate runs after the gates driving its inputs.
///
/// Fails with `UnresolvedNode` for an input with no driver that is not a
/// primary input, and with `CyclicDependency` when some gates can never run.
/// Expects a validated circuit.
pub fn schedule(circuit: &Circuit, gas: &mut Gas) -> CpuResult<Vec<usize>> {
    let gates = circuit.gates();
    let drivers = circuit.drivers();

    let mut pending = vec![0usize; gates.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); gates.len()];

    for (index, gate) in gates.iter().enumerate() {
        let mut inputs = vec![gate.input1];
        if gate.input2 != gate.input1 {
            inputs.push(gate.input2);
        }
        for node in inputs {
            if node.is_primary_input() {
                continue;
            }
            match drivers.get(&node) {
                Some(&driver) => {
                    pending[index] += 1;
                    dependents[driver].push(index);
                }
                None => return Err(CpuError::UnresolvedNode(node)),
            }
        }
    }

    let mut ready: VecDeque<usize> = (0..gates.len()).filter(|&i| pending[i] == 0).collect();
    let mut order = Vec::with_capacity(gates.len());
    while let Some(index) = ready.pop_front() {
        gas.tick()?;
        order.push(index);
        for &dependent in &dependents[index] {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.push_back(dependent);
            }
        }
    }

    if order.len() < gates.len() {
        let stuck: BTreeSet<usize> = (0..gates.len()).filter(|&i| pending[i] > 0).collect();
        let nodes = cycle_members(stuck, &dependents)
            .into_iter()
            .map(|i| gates[i].output)
            .collect::<BTreeSet<NodeId>>()
            .into_iter()
            .collect();
        return Err(CpuError::CyclicDependency { nodes });
    }

    Ok(order)
}

/// Narrow the unscheduled gates down to those on a cycle.
///
/// Gates that merely sit downstream of a cycle are peeled off repeatedly:
/// a stuck gate none of whose dependents is stuck cannot be on a cycle.
fn cycle_members(mut stuck: BTreeSet<usize>, dependents: &[Vec<usize>]) -> BTreeSet<usize> {
    loop {
        let sinks: Vec<usize> = stuck
            .iter()
            .copied()
            .filter(|&i| !dependents[i].iter().any(|d| stuck.contains(d)))
            .collect();
        if sinks.is_empty() {
            return stuck;
        }
        for sink in sinks {
            stuck.remove(&sink);
        }
    }
}
