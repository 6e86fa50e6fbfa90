//! Evaluation error types.

use pachinko_memory::MemoryError;
use pachinko_types::{CircuitError, Diagnostic, ErrorCode, NodeId};
use thiserror::Error;

/// Errors that abort an evaluation. The verdict word is never written when
/// one of these is returned.
#[derive(Debug, Error)]
pub enum CpuError {
    /// Gates that depend on each other through distinct nodes.
    #[error("cyclic dependency among nodes {}", format_nodes(.nodes))]
    CyclicDependency { nodes: Vec<NodeId> },

    /// A gate reads a node that is neither a primary input nor driven.
    #[error("node {0} is read but never driven")]
    UnresolvedNode(NodeId),

    /// Step budget exceeded.
    #[error("gas exhausted after {limit} steps")]
    GasExhausted { limit: u64 },

    #[error(transparent)]
    Circuit(#[from] CircuitError),

    #[error(transparent)]
    Memory(#[from] MemoryError),
}

impl CpuError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CyclicDependency { .. } => ErrorCode::CYCLIC_DEPENDENCY,
            Self::UnresolvedNode(_) => ErrorCode::UNRESOLVED_NODE,
            Self::GasExhausted { .. } => ErrorCode::GAS_EXHAUSTED,
            Self::Circuit(err) => err.code(),
            Self::Memory(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string())
    }
}

fn format_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result alias for evaluator operations.
pub type CpuResult<T> = Result<T, CpuError>;
