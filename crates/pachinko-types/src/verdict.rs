//! Verdict codes written by the evaluator into the verdict word.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one evaluation, decoded from the 16-bit verdict word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every output word matched the expected state.
    Pass,
    /// At least one output word differed.
    Fail,
    /// The check was never reached (empty circuit or aborted run).
    NoVerdict,
    /// Any other word.
    Unknown(u16),
}

impl Verdict {
    pub const PASS_WORD: u16 = 0x1337;
    pub const FAIL_WORD: u16 = 0x3333;
    pub const NO_VERDICT_WORD: u16 = 0x0000;

    pub fn from_word(word: u16) -> Self {
        match word {
            Self::PASS_WORD => Self::Pass,
            Self::FAIL_WORD => Self::Fail,
            Self::NO_VERDICT_WORD => Self::NoVerdict,
            other => Self::Unknown(other),
        }
    }

    pub fn word(self) -> u16 {
        match self {
            Self::Pass => Self::PASS_WORD,
            Self::Fail => Self::FAIL_WORD,
            Self::NoVerdict => Self::NO_VERDICT_WORD,
            Self::Unknown(word) => word,
        }
    }

    pub fn is_pass(self) -> bool {
        self == Self::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
            Self::NoVerdict => write!(f, "no verdict"),
            Self::Unknown(word) => write!(f, "unknown ({word:#06x})"),
        }
    }
}
