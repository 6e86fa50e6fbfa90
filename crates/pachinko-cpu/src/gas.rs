//! Step metering.
//!
//! One unit is charged for every gate scheduled and every gate evaluated.
//! Scheduling already terminates on its own; the meter caps total work at a
//! fixed, caller-chosen bound.

use crate::error::{CpuError, CpuResult};

/// Default step budget: well above the 2 × 681 steps of the largest circuit.
pub const DEFAULT_GAS_LIMIT: u64 = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gas {
    used: u64,
    limit: u64,
}

impl Gas {
    pub fn new(limit: u64) -> Self {
        Self { used: 0, limit }
    }

    /// Consume one unit of gas. Returns error if exhausted.
    pub fn tick(&mut self) -> CpuResult<()> {
        self.used += 1;
        if self.used > self.limit {
            Err(CpuError::GasExhausted { limit: self.limit })
        } else {
            Ok(())
        }
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}
