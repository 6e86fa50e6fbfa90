//! The JSON check request.

use crate::error::{CheckerError, CheckerResult};
use pachinko_types::{Circuit, LaneState};
use serde::{Deserialize, Serialize};

/// Body of a check request: `{"circuit": [{"input1": 5, "input2": 5, "output": 1}, ...]}`.
///
/// The lane states are optional and fall back to the checker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub circuit: Circuit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_state: Option<LaneState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_state: Option<LaneState>,
}

impl CheckRequest {
    pub fn new(circuit: Circuit) -> Self {
        Self {
            circuit,
            input_state: None,
            output_state: None,
        }
    }

    pub fn from_json_str(json: &str) -> CheckerResult<Self> {
        serde_json::from_str(json).map_err(CheckerError::InvalidRequest)
    }
}
