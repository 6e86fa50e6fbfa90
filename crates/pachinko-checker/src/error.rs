//! Checker error types.

use pachinko_cpu::CpuError;
use pachinko_memory::MemoryError;
use pachinko_types::{Diagnostic, ErrorCode};
use thiserror::Error;

/// Any error from any stage of a check.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The request body is not a valid check request.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// The configuration document could not be decoded.
    #[error("invalid config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error(transparent)]
    Cpu(#[from] CpuError),
}

impl CheckerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidRequest(_) => ErrorCode::INVALID_REQUEST,
            Self::InvalidConfig(_) => ErrorCode::INVALID_CONFIG,
            Self::Memory(err) => err.code(),
            Self::Cpu(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string())
    }
}

/// Checker result type alias.
pub type CheckerResult<T> = Result<T, CheckerError>;
