//! Circuit serialization and circuit-table parsing.

use crate::arena::Memory;
use crate::error::{MemoryError, MemoryResult};
use crate::layout::*;
use crate::program::ProgramImage;
use log::debug;
use pachinko_types::{Circuit, Gate, LaneState, NodeId, LANES};

/// The all-zero record that ends the gate list.
const TERMINATOR: Gate = Gate {
    input1: NodeId(0),
    input2: NodeId(0),
    output: NodeId(0),
};

/// Build the memory buffer for one evaluation.
///
/// Everything is checked before the first byte is written:
/// - the program image must fit the program region
/// - the circuit must leave room for the terminator record
/// - every gate must pass [`Circuit::validate`]
///
/// The node table and verdict word are left zeroed. Identical inputs always
/// produce byte-identical buffers.
pub fn serialize_circuit(
    circuit: &Circuit,
    program: &ProgramImage,
    input: &LaneState,
    output: &LaneState,
) -> MemoryResult<Memory> {
    if program.len() > PROGRAM.size {
        return Err(MemoryError::ProgramTooLarge {
            len: program.len(),
            capacity: PROGRAM.size,
        });
    }
    if circuit.len() > MAX_GATES {
        return Err(MemoryError::BufferOverflow {
            gates: circuit.len(),
            capacity: MAX_GATES,
        });
    }
    circuit.validate()?;

    let mut memory = Memory::new();
    memory.write_bytes(PROGRAM.base, program.as_bytes())?;
    memory.write_bytes(INPUT_STATE_ADDR, &input.to_le_bytes())?;
    memory.write_bytes(OUTPUT_STATE_ADDR, &output.to_le_bytes())?;
    for (index, gate) in circuit.iter().enumerate() {
        write_gate(&mut memory, index, gate)?;
    }
    write_gate(&mut memory, circuit.len(), &TERMINATOR)?;

    debug!(
        "serialized {} gates with {}-byte program, input {input}, expected {output}",
        circuit.len(),
        program.len()
    );
    Ok(memory)
}

/// Write the record at `index` of the circuit table.
pub fn write_gate(memory: &mut Memory, index: usize, gate: &Gate) -> MemoryResult<()> {
    if index >= CIRCUIT_SLOTS {
        return Err(MemoryError::OutOfBounds {
            addr: gate_addr(index),
            len: GATE_RECORD_SIZE,
        });
    }
    let base = gate_addr(index);
    for (i, node) in gate.nodes().into_iter().enumerate() {
        memory.write_u16(base + i * 2, node.0)?;
    }
    Ok(())
}

/// Read the record at `index` of the circuit table.
pub fn read_gate(memory: &Memory, index: usize) -> MemoryResult<Gate> {
    if index >= CIRCUIT_SLOTS {
        return Err(MemoryError::OutOfBounds {
            addr: gate_addr(index),
            len: GATE_RECORD_SIZE,
        });
    }
    let base = gate_addr(index);
    Ok(Gate {
        input1: NodeId(memory.read_u16(base)?),
        input2: NodeId(memory.read_u16(base + 2)?),
        output: NodeId(memory.read_u16(base + 4)?),
    })
}

/// Recover the ordered gate list from the circuit table.
///
/// Records are read until the all-zero terminator. The result is not
/// validated; callers decide what to do with malformed records.
pub fn parse_circuit_table(memory: &Memory) -> MemoryResult<Circuit> {
    let mut circuit = Circuit::new();
    for index in 0..CIRCUIT_SLOTS {
        let gate = read_gate(memory, index)?;
        if gate == TERMINATOR {
            return Ok(circuit);
        }
        circuit.push(gate);
    }
    Err(MemoryError::UnterminatedCircuitTable)
}

/// Read a lane state starting at `addr` (one of the two state addresses).
pub fn read_state(memory: &Memory, addr: usize) -> MemoryResult<LaneState> {
    let mut words = [0u16; LANES];
    for (k, word) in words.iter_mut().enumerate() {
        *word = memory.read_u16(addr.saturating_add(k * 2))?;
    }
    Ok(LaneState(words))
}
