//! Pachinko memory serializer.
//!
//! Lays a circuit, a program image and the input/expected-output lane states
//! into one flat byte-addressable buffer.
//!
//! # Memory map
//!
//! | Region    | Range             | Content                                   |
//! |-----------|-------------------|-------------------------------------------|
//! | `program` | `0x0000..0x1000`  | program image, unmodified                 |
//! | `io`      | `0x1000..0x2000`  | verdict word, input state, expected state |
//! | `nodes`   | `0x2000..0x3000`  | one `u16` per node id, filled at run time |
//! | `circuit` | `0x3000..0x4000`  | 6-byte gate records, zero terminated      |
//!
//! All multi-byte values are little-endian. See [`layout`] for the exact
//! offsets.

pub mod arena;
pub mod error;
pub mod layout;
pub mod program;
pub mod serialize;

pub use arena::Memory;
pub use error::{MemoryError, MemoryResult};
pub use layout::Region;
pub use program::ProgramImage;
pub use serialize::{parse_circuit_table, read_gate, read_state, serialize_circuit, write_gate};
