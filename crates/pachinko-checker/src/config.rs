//! Checker configuration.

use crate::error::{CheckerError, CheckerResult};
use pachinko_cpu::DEFAULT_GAS_LIMIT;
use pachinko_types::LaneState;
use serde::{Deserialize, Serialize};

/// Input state used by the challenge when a request names none.
pub const CHALLENGE_INPUT: LaneState = LaneState::new([0xffff, 0x0000, 0xffff, 0x0000]);
/// Expected output state used by the challenge when a request names none.
pub const CHALLENGE_EXPECTED: LaneState = LaneState::new([0x0000, 0xffff, 0x0000, 0xffff]);

/// Settings shared by every check a [`Checker`](crate::Checker) runs.
///
/// Every field is optional in the JSON form; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Step budget per evaluation.
    pub gas_limit: u64,
    /// State presented at nodes 5..=8 unless a request overrides it.
    pub input_state: LaneState,
    /// State expected at nodes 1..=4 unless a request overrides it.
    pub output_state: LaneState,
    /// Stop exploring candidate circuits once one passes.
    pub stop_at_first_pass: bool,
}

impl CheckerConfig {
    pub fn from_json_str(json: &str) -> CheckerResult<Self> {
        serde_json::from_str(json).map_err(CheckerError::InvalidConfig)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_GAS_LIMIT,
            input_state: CHALLENGE_INPUT,
            output_state: CHALLENGE_EXPECTED,
            stop_at_first_pass: false,
        }
    }
}
