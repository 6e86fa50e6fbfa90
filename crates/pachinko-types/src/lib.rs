//! Shared types for the Pachinko NAND checker.
//!
//! This crate defines the circuit model (nodes, gates, circuits), the
//! four-word lane states presented to and expected from a circuit, the
//! verdict codes written by the evaluator, and the error/diagnostic types
//! used across every stage.

pub mod builder;
mod circuit;
mod error;
mod lane;
mod verdict;

pub use builder::CircuitBuilder;
pub use circuit::{Circuit, Gate, NodeId, MAX_NODE_ID};
pub use error::{CircuitError, Diagnostic, ErrorCategory, ErrorCode, MalformedKind};
pub use lane::{LaneState, LANES};
pub use verdict::Verdict;

/// Result type used for circuit validation.
pub type Result<T> = std::result::Result<T, CircuitError>;
