//! Memory and serializer error types.

use pachinko_types::{CircuitError, Diagnostic, ErrorCode};
use thiserror::Error;

/// Errors raised while building or reading a memory buffer.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The program image does not fit in the program region.
    #[error("program image is {len} bytes, program region holds {capacity}")]
    ProgramTooLarge { len: usize, capacity: usize },

    /// The circuit does not fit in the circuit table.
    #[error("circuit has {gates} gates, circuit table holds at most {capacity}")]
    BufferOverflow { gates: usize, capacity: usize },

    /// An access fell outside the address space.
    #[error("access of {len} bytes at {addr:#06x} is outside memory")]
    OutOfBounds { addr: usize, len: usize },

    /// Every record slot was read without meeting the zero record.
    #[error("circuit table has no terminator record")]
    UnterminatedCircuitTable,

    /// The program image could not be read from storage.
    #[error("failed to load program image '{path}': {source}")]
    ProgramLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Circuit(#[from] CircuitError),
}

impl MemoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ProgramTooLarge { .. } => ErrorCode::PROGRAM_TOO_LARGE,
            Self::BufferOverflow { .. } => ErrorCode::BUFFER_OVERFLOW,
            Self::OutOfBounds { .. } => ErrorCode::ADDRESS_OUT_OF_BOUNDS,
            Self::UnterminatedCircuitTable => ErrorCode::UNTERMINATED_CIRCUIT_TABLE,
            Self::ProgramLoad { .. } => ErrorCode::PROGRAM_LOAD_FAILED,
            Self::Circuit(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string())
    }
}

/// Memory result type alias.
pub type MemoryResult<T> = Result<T, MemoryError>;
