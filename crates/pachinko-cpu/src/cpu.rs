//! The evaluator.

use crate::error::CpuResult;
use crate::gas::{Gas, DEFAULT_GAS_LIMIT};
use crate::graph::schedule;
use crate::nodes::NodeTable;
use log::{debug, trace, warn};
use pachinko_memory::layout::{INPUT_STATE_ADDR, OUTPUT_STATE_ADDR, VERDICT_ADDR};
use pachinko_memory::{parse_circuit_table, read_state, Memory};
use pachinko_types::{Gate, LaneState, Verdict};

/// What one evaluation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Verdict written to the verdict word (`NoVerdict` means nothing was written).
    pub verdict: Verdict,
    /// Settled values of nodes 1..=4.
    pub outputs: LaneState,
    pub gates_evaluated: usize,
    pub gas_used: u64,
}

/// Runs serialized buffers. Holds only configuration, so one instance can
/// serve any number of buffers, including from several threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cpu {
    gas_limit: u64,
}

impl Cpu {
    pub fn new(gas_limit: u64) -> Self {
        Self { gas_limit }
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    /// Evaluate the circuit in `memory` and write the verdict word.
    ///
    /// The verdict word is reset to `NoVerdict` first, so an empty gate table
    /// or an aborted run never leaves an earlier verdict behind. On a fresh
    /// buffer an empty table leaves memory byte-identical.
    pub fn run(&self, memory: &mut Memory) -> CpuResult<Execution> {
        let mut gas = Gas::new(self.gas_limit);
        let result = self.execute(memory, &mut gas);
        if let Err(err) = &result {
            warn!("evaluation aborted after {} steps: {err}", gas.used());
        }
        result
    }

    fn execute(&self, memory: &mut Memory, gas: &mut Gas) -> CpuResult<Execution> {
        memory.write_u16(VERDICT_ADDR, Verdict::NO_VERDICT_WORD)?;
        let circuit = parse_circuit_table(memory)?;
        if circuit.is_empty() {
            debug!("empty circuit table, verdict left unset");
            return Ok(Execution {
                verdict: Verdict::NoVerdict,
                outputs: LaneState::default(),
                gates_evaluated: 0,
                gas_used: gas.used(),
            });
        }
        circuit.validate()?;
        let order = schedule(&circuit, gas)?;

        let input = read_state(memory, INPUT_STATE_ADDR)?;
        let expected = read_state(memory, OUTPUT_STATE_ADDR)?;

        let mut nodes = NodeTable::new(memory);
        nodes.clear()?;
        nodes.load_inputs(&input)?;
        for &index in &order {
            gas.tick()?;
            let gate = &circuit.gates()[index];
            let value = Gate::eval(nodes.get(gate.input1)?, nodes.get(gate.input2)?);
            trace!("gate #{index}: {gate} -> {value:#06x}");
            nodes.set(gate.output, value)?;
        }
        let outputs = nodes.outputs()?;

        let verdict = if outputs == expected {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        memory.write_u16(VERDICT_ADDR, verdict.word())?;

        debug!(
            "evaluated {} gates: outputs {outputs}, expected {expected}, verdict {verdict}",
            order.len()
        );
        Ok(Execution {
            verdict,
            outputs,
            gates_evaluated: order.len(),
            gas_used: gas.used(),
        })
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(DEFAULT_GAS_LIMIT)
    }
}
