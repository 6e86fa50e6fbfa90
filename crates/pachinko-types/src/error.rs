use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Circuit,
    Memory,
    Evaluation,
    Request,
}

/// Numeric error code (E100–E499).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Circuit errors (E100–E199) ──
    pub const NODE_OUT_OF_RANGE: Self = Self(100);
    pub const DRIVES_PRIMARY_INPUT: Self = Self(101);
    pub const MULTIPLE_DRIVERS: Self = Self(102);

    // ── Memory errors (E200–E299) ──
    pub const BUFFER_OVERFLOW: Self = Self(200);
    pub const PROGRAM_TOO_LARGE: Self = Self(201);
    pub const ADDRESS_OUT_OF_BOUNDS: Self = Self(202);
    pub const UNTERMINATED_CIRCUIT_TABLE: Self = Self(203);
    pub const PROGRAM_LOAD_FAILED: Self = Self(204);

    // ── Evaluation errors (E300–E399) ──
    pub const CYCLIC_DEPENDENCY: Self = Self(300);
    pub const UNRESOLVED_NODE: Self = Self(301);
    pub const GAS_EXHAUSTED: Self = Self(302);

    // ── Request errors (E400–E499) ──
    pub const INVALID_REQUEST: Self = Self(400);
    pub const INVALID_CONFIG: Self = Self(401);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Circuit,
            200..=299 => ErrorCategory::Memory,
            300..=399 => ErrorCategory::Evaluation,
            _ => ErrorCategory::Request,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circuit => write!(f, "circuit"),
            Self::Memory => write!(f, "memory"),
            Self::Evaluation => write!(f, "evaluation"),
            Self::Request => write!(f, "request"),
        }
    }
}

/// What makes a gate record malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedKind {
    /// Node id 0 or beyond the node table.
    #[error("node {0} is out of range")]
    NodeOutOfRange(NodeId),
    /// Primary inputs are driven by the input state only.
    #[error("gate drives primary input {0}")]
    DrivesPrimaryInput(NodeId),
    /// Single-driver invariant violated.
    #[error("node {node} is already driven by gate #{first}")]
    MultipleDrivers { node: NodeId, first: usize },
}

/// Circuit validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("malformed gate #{index}: {kind}")]
    MalformedGate { index: usize, kind: MalformedKind },
}

impl CircuitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedGate { kind, .. } => match kind {
                MalformedKind::NodeOutOfRange(_) => ErrorCode::NODE_OUT_OF_RANGE,
                MalformedKind::DrivesPrimaryInput(_) => ErrorCode::DRIVES_PRIMARY_INPUT,
                MalformedKind::MultipleDrivers { .. } => ErrorCode::MULTIPLE_DRIVERS,
            },
        }
    }
}

/// A structured, serialisable error report.
///
/// Every stage converts its errors into diagnostics so callers never have
/// to parse free-form strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code (e.g., E300).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.code, self.category, self.message)
    }
}

impl From<&CircuitError> for Diagnostic {
    fn from(err: &CircuitError) -> Self {
        Diagnostic::new(err.code(), err.to_string())
    }
}
