//! Integration tests for the memory serializer.
//!
//! Covers:
//! - placement of program, verdict word, lane states and gate records
//! - the empty-circuit image
//! - rejection before writing (overflow, oversized program, malformed gates)
//! - round-trip through the circuit-table parser
//! - determinism

use pachinko_memory::layout::*;
use pachinko_memory::{
    parse_circuit_table, serialize_circuit, Memory, MemoryError, ProgramImage,
};
use pachinko_types::builder::{buffer_bank, inverter_bank};
use pachinko_types::{Circuit, CircuitError, ErrorCode, Gate, LaneState, MalformedKind, NodeId};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

const INPUT: LaneState = LaneState::new([0xffff, 0x0000, 0xffff, 0x0000]);
const EXPECTED: LaneState = LaneState::new([0x0000, 0xffff, 0x0000, 0xffff]);

fn program() -> ProgramImage {
    ProgramImage::new((0..=255u8).cycle().take(300).collect::<Vec<u8>>())
}

fn serialize(circuit: &Circuit) -> Memory {
    serialize_circuit(circuit, &program(), &INPUT, &EXPECTED).expect("serialization failed")
}

fn words(memory: &Memory, addr: usize, count: usize) -> Vec<u16> {
    (0..count)
        .map(|i| memory.read_u16(addr + i * 2).unwrap())
        .collect()
}

/// A circuit with `n` gates, each inverting input 5 onto a distinct node.
fn wide_circuit(n: usize) -> Circuit {
    (0..n)
        .map(|i| Gate::new(5, 5, 9 + i as u16))
        .collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// Layout
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn program_image_is_copied_unmodified() {
    let memory = serialize(&inverter_bank());
    let image = program();
    assert_eq!(
        memory.read_bytes(PROGRAM.base, image.len()).unwrap(),
        image.as_bytes()
    );
    assert!(memory.region(PROGRAM)[image.len()..].iter().all(|&b| b == 0));
}

#[test]
fn empty_circuit_memory_image() {
    let memory = serialize(&Circuit::new());
    // Verdict word and the rest of the first eight io words stay zero.
    assert_eq!(words(&memory, VERDICT_ADDR, 8), vec![0; 8]);
    // Node table is untouched.
    assert_eq!(words(&memory, NODES.base, 8), vec![0; 8]);
    // Table holds only the terminator.
    assert_eq!(words(&memory, CIRCUIT.base, 3), vec![0, 0, 0]);
    assert!(parse_circuit_table(&memory).unwrap().is_empty());
}

#[test]
fn lane_states_land_at_fixed_offsets() {
    let memory = serialize(&Circuit::new());
    assert_eq!(
        words(&memory, INPUT_STATE_ADDR, 4),
        vec![0xffff, 0x0000, 0xffff, 0x0000]
    );
    assert_eq!(
        words(&memory, OUTPUT_STATE_ADDR, 4),
        vec![0x0000, 0xffff, 0x0000, 0xffff]
    );
}

#[test]
fn buffer_bank_gate_records() {
    let memory = serialize(&buffer_bank());
    assert_eq!(
        words(&memory, CIRCUIT.base, 16),
        vec![5, 5, 9, 6, 6, 10, 7, 7, 11, 8, 8, 12, 9, 9, 1, 10]
    );
    // Byte-level check of the first record: little-endian u16 fields.
    assert_eq!(
        memory.read_bytes(CIRCUIT.base, GATE_RECORD_SIZE).unwrap(),
        &[5, 0, 5, 0, 9, 0]
    );
}

#[test]
fn verdict_word_starts_zeroed() {
    let memory = serialize(&inverter_bank());
    assert_eq!(memory.read_u16(VERDICT_ADDR).unwrap(), 0);
}

// ══════════════════════════════════════════════════════════════════════════════
// Rejection
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn largest_circuit_fits() {
    let circuit = wide_circuit(MAX_GATES);
    let memory = serialize(&circuit);
    assert_eq!(parse_circuit_table(&memory).unwrap().len(), MAX_GATES);
}

#[test]
fn one_gate_too_many_overflows() {
    let err = serialize_circuit(&wide_circuit(MAX_GATES + 1), &program(), &INPUT, &EXPECTED)
        .unwrap_err();
    assert!(matches!(
        err,
        MemoryError::BufferOverflow { gates, capacity } if gates == MAX_GATES + 1 && capacity == MAX_GATES
    ));
    assert_eq!(err.code(), ErrorCode::BUFFER_OVERFLOW);
}

#[test]
fn oversized_program_rejected() {
    let image = ProgramImage::new(vec![0u8; PROGRAM.size + 1]);
    let err = serialize_circuit(&inverter_bank(), &image, &INPUT, &EXPECTED).unwrap_err();
    assert!(matches!(err, MemoryError::ProgramTooLarge { len, .. } if len == PROGRAM.size + 1));
}

#[test]
fn full_size_program_accepted() {
    let image = ProgramImage::new(vec![0xffu8; PROGRAM.size]);
    let memory = serialize_circuit(&inverter_bank(), &image, &INPUT, &EXPECTED).unwrap();
    // The verdict word directly follows the program region.
    assert_eq!(memory.read_u16(VERDICT_ADDR).unwrap(), 0);
}

#[test]
fn driving_an_input_is_rejected() {
    let circuit = Circuit::from(vec![
        Gate::new(1, 1, 5),
        Gate::new(2, 2, 6),
        Gate::new(3, 3, 7),
        Gate::new(4, 4, 8),
    ]);
    let err = serialize_circuit(&circuit, &program(), &INPUT, &EXPECTED).unwrap_err();
    match err {
        MemoryError::Circuit(CircuitError::MalformedGate { index, kind }) => {
            assert_eq!(index, 0);
            assert_eq!(kind, MalformedKind::DrivesPrimaryInput(NodeId(5)));
        }
        other => panic!("expected malformed gate, got {other:?}"),
    }
}

#[test]
fn node_beyond_table_is_rejected() {
    let circuit = Circuit::from(vec![Gate::new(5, 5, 2048)]);
    let err = serialize_circuit(&circuit, &program(), &INPUT, &EXPECTED).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NODE_OUT_OF_RANGE);
    assert_eq!(err.to_diagnostic().code, ErrorCode::NODE_OUT_OF_RANGE);
}

#[test]
fn duplicate_driver_is_rejected() {
    let circuit = Circuit::from(vec![Gate::new(5, 5, 1), Gate::new(6, 6, 1)]);
    let err = serialize_circuit(&circuit, &program(), &INPUT, &EXPECTED).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MULTIPLE_DRIVERS);
}

// ══════════════════════════════════════════════════════════════════════════════
// Round-trip & determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn circuit_table_round_trip_preserves_order() {
    // Deliberately not in dependency order.
    let circuit = Circuit::from(vec![
        Gate::new(9, 10, 1),
        Gate::new(6, 6, 10),
        Gate::new(5, 5, 9),
        Gate::new(2047, 2047, 2),
        Gate::new(7, 8, 2047),
    ]);
    let memory = serialize(&circuit);
    assert_eq!(parse_circuit_table(&memory).unwrap(), circuit);
}

#[test]
fn serialization_determinism_100_iterations() {
    let circuit = buffer_bank();
    let first = serialize(&circuit);
    for i in 0..100 {
        let memory = serialize(&circuit);
        assert_eq!(
            first.as_bytes(),
            memory.as_bytes(),
            "Determinism failure at iteration {i}"
        );
        assert_eq!(first.sha256_hex(), memory.sha256_hex());
    }
}

#[test]
fn different_states_change_only_io_region() {
    let a = serialize_circuit(&inverter_bank(), &program(), &INPUT, &EXPECTED).unwrap();
    let b = serialize_circuit(&inverter_bank(), &program(), &EXPECTED, &INPUT).unwrap();
    assert_ne!(a.region(IO), b.region(IO));
    assert_eq!(a.region(PROGRAM), b.region(PROGRAM));
    assert_eq!(a.region(CIRCUIT), b.region(CIRCUIT));
}
