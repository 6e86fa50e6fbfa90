//! Pachinko checker: orchestrates the full pipeline.
//!
//! ```text
//! JSON request → Circuit → Memory Serializer → Evaluator → Verdict → CheckResult
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod explore;
pub mod request;

pub use check::{CheckResult, Checker};
pub use config::{CheckerConfig, CHALLENGE_EXPECTED, CHALLENGE_INPUT};
pub use error::{CheckerError, CheckerResult};
pub use explore::{challenge_candidates, CaseResult, ExploreSummary, NamedCircuit};
pub use request::CheckRequest;

use pachinko_memory::ProgramImage;

/// Check a JSON request body in one call, optionally with a JSON
/// configuration document.
///
/// Always returns a `CheckResult`; decoding errors of either document are
/// reported as diagnostics.
pub fn check_to_result(
    program: ProgramImage,
    request_json: &str,
    config_json: Option<&str>,
) -> CheckResult {
    let config = match config_json.map(CheckerConfig::from_json_str).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => return CheckResult::from_error(&err, &program),
    };
    Checker::new(program, config).check_json(request_json)
}
