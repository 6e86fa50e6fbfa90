//! Pachinko evaluator.
//!
//! Executes a serialized memory buffer: reads the gate table, settles the
//! circuit in dependency order on 16-bit lanes, compares the primary outputs
//! against the expected state and writes the verdict word.

pub mod cpu;
pub mod error;
pub mod gas;
pub mod graph;
pub mod nodes;
pub mod verdict;

pub use cpu::{Cpu, Execution};
pub use error::{CpuError, CpuResult};
pub use gas::{Gas, DEFAULT_GAS_LIMIT};
pub use verdict::read_verdict;
