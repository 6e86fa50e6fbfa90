//! Exploring candidate circuits.
//!
//! Each candidate is checked in a fresh memory buffer against the configured
//! lane states; the summary records every outcome and the first candidate
//! that passed.

use crate::check::{CheckResult, Checker};
use log::debug;
use pachinko_types::builder::{buffer_bank, inverter_bank};
use pachinko_types::{Circuit, Gate, Verdict};
use serde::{Deserialize, Serialize};

/// A candidate circuit with a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCircuit {
    pub name: String,
    pub circuit: Circuit,
}

impl NamedCircuit {
    pub fn new(name: impl Into<String>, circuit: Circuit) -> Self {
        Self {
            name: name.into(),
            circuit,
        }
    }
}

/// Outcome of one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,
    pub result: CheckResult,
}

/// Outcome of a whole exploration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreSummary {
    pub cases: Vec<CaseResult>,
    pub passed: usize,
    pub failed: usize,
    /// Candidates that produced no verdict (empty, rejected or aborted).
    pub undecided: usize,
    pub first_pass: Option<String>,
}

impl Checker {
    /// Check every candidate in order.
    ///
    /// With `stop_at_first_pass` set, candidates after the first pass are not
    /// run.
    pub fn explore(&self, candidates: &[NamedCircuit]) -> ExploreSummary {
        let mut cases = Vec::with_capacity(candidates.len());
        let mut first_pass = None;

        for candidate in candidates {
            let result = self.check_circuit(&candidate.circuit);
            debug!("candidate '{}': {}", candidate.name, result.verdict);
            let passed = result.verdict.is_pass();
            cases.push(CaseResult {
                name: candidate.name.clone(),
                result,
            });
            if passed && first_pass.is_none() {
                first_pass = Some(candidate.name.clone());
                if self.config().stop_at_first_pass {
                    break;
                }
            }
        }

        let count = |want: fn(Verdict) -> bool| cases.iter().filter(|c| want(c.result.verdict)).count();
        let passed = count(|v| v == Verdict::Pass);
        let failed = count(|v| v == Verdict::Fail);
        let undecided = cases.len() - passed - failed;

        ExploreSummary {
            cases,
            passed,
            failed,
            undecided,
            first_pass,
        }
    }
}

/// The candidate circuits tried against the challenge, in the order tried.
pub fn challenge_candidates() -> Vec<NamedCircuit> {
    vec![
        NamedCircuit::new("empty", Circuit::new()),
        NamedCircuit::new("buffer bank", buffer_bank()),
        NamedCircuit::new("inverter bank", inverter_bank()),
        NamedCircuit::new(
            "reversed numbering",
            Circuit::from(vec![
                Gate::new(1, 1, 5),
                Gate::new(2, 2, 6),
                Gate::new(3, 3, 7),
                Gate::new(4, 4, 8),
            ]),
        ),
    ]
}
