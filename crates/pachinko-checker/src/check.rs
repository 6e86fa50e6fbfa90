//! Running one circuit through the whole pipeline.
//!
//! ```text
//! CheckRequest → serialize_circuit → Cpu::run → read_verdict → CheckResult
//! ```

use crate::config::CheckerConfig;
use crate::error::{CheckerError, CheckerResult};
use crate::request::CheckRequest;
use log::debug;
use pachinko_cpu::{read_verdict, Cpu, Execution};
use pachinko_memory::{serialize_circuit, Memory, ProgramImage};
use pachinko_types::{Circuit, Diagnostic, LaneState, Verdict};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Structured outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether evaluation ran to completion (a `fail` verdict still counts).
    pub success: bool,
    /// Verdict decoded from the verdict word.
    pub verdict: Verdict,
    /// Raw verdict word.
    pub verdict_word: u16,
    /// Settled values of nodes 1..=4, when evaluation completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<LaneState>,
    pub gates_evaluated: usize,
    /// SHA-256 of the program image the check ran against.
    pub program_sha256: String,
    pub errors: Vec<Diagnostic>,
}

impl CheckResult {
    /// A result for a check that stopped with `err`.
    pub fn from_error(err: &CheckerError, program: &ProgramImage) -> Self {
        Self {
            success: false,
            verdict: Verdict::NoVerdict,
            verdict_word: Verdict::NO_VERDICT_WORD,
            outputs: None,
            gates_evaluated: 0,
            program_sha256: program.sha256_hex(),
            errors: vec![err.to_diagnostic()],
        }
    }

    fn completed(memory: &Memory, execution: &Execution, program: &ProgramImage) -> Self {
        let verdict = read_verdict(memory);
        Self {
            success: true,
            verdict,
            verdict_word: verdict.word(),
            outputs: Some(execution.outputs),
            gates_evaluated: execution.gates_evaluated,
            program_sha256: program.sha256_hex(),
            errors: Vec::new(),
        }
    }
}

/// Checks circuits against one shared program image.
///
/// The image is held read-only; every check gets its own memory buffer, so
/// a `Checker` can be shared between threads.
#[derive(Debug, Clone)]
pub struct Checker {
    program: ProgramImage,
    config: CheckerConfig,
    cpu: Cpu,
}

impl Checker {
    pub fn new(program: ProgramImage, config: CheckerConfig) -> Self {
        let cpu = Cpu::new(config.gas_limit);
        Self {
            program,
            config,
            cpu,
        }
    }

    /// Load the program image from storage.
    pub fn from_path(path: impl AsRef<Path>, config: CheckerConfig) -> CheckerResult<Self> {
        Ok(Self::new(ProgramImage::load(path)?, config))
    }

    pub fn program(&self) -> &ProgramImage {
        &self.program
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Serialize and run one circuit, returning the evaluated buffer.
    pub fn evaluate(
        &self,
        circuit: &Circuit,
        input: &LaneState,
        output: &LaneState,
    ) -> CheckerResult<(Memory, Execution)> {
        let mut memory = serialize_circuit(circuit, &self.program, input, output)?;
        let execution = self.cpu.run(&mut memory)?;
        Ok((memory, execution))
    }

    pub fn check(&self, circuit: &Circuit, input: &LaneState, output: &LaneState) -> CheckResult {
        let result = match self.evaluate(circuit, input, output) {
            Ok((memory, execution)) => CheckResult::completed(&memory, &execution, &self.program),
            Err(err) => CheckResult::from_error(&err, &self.program),
        };
        debug!(
            "check of {} gates: verdict {} ({} errors)",
            circuit.len(),
            result.verdict,
            result.errors.len()
        );
        result
    }

    /// Check against the configured lane states.
    pub fn check_circuit(&self, circuit: &Circuit) -> CheckResult {
        self.check(circuit, &self.config.input_state, &self.config.output_state)
    }

    pub fn check_request(&self, request: &CheckRequest) -> CheckResult {
        let input = request.input_state.unwrap_or(self.config.input_state);
        let output = request.output_state.unwrap_or(self.config.output_state);
        self.check(&request.circuit, &input, &output)
    }

    /// Decode a JSON request body and check it.
    pub fn check_json(&self, json: &str) -> CheckResult {
        match CheckRequest::from_json_str(json) {
            Ok(request) => self.check_request(&request),
            Err(err) => CheckResult::from_error(&err, &self.program),
        }
    }
}
