//! Pachinko circuit checker as a WASM module for browser environments.
//!
//! This crate exposes the checking pipeline via `wasm-bindgen`, suitable for
//! running in a browser Web Worker.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { check } from 'pachinko-wasm';
//!
//! await init();
//!
//! const body = JSON.stringify({ circuit: [{ input1: 5, input2: 5, output: 1 }] });
//! const result = check(programBytes, body);
//! console.log(JSON.parse(result));
//! // { success: true, verdict: "fail", verdict_word: 13107, ... }
//! ```

use pachinko_memory::ProgramImage;
use wasm_bindgen::prelude::*;

/// Check a JSON request body against a program image.
///
/// Returns a JSON string containing a `CheckResult`:
/// ```json
/// {
///   "success": true,
///   "verdict": "pass",
///   "verdict_word": 4919,
///   "outputs": [0, 65535, 0, 65535],
///   "gates_evaluated": 4,
///   "program_sha256": "...",
///   "errors": []
/// }
/// ```
///
/// On failure, `success` is `false`, `verdict` is `"no_verdict"`, and
/// `errors` contains structured diagnostics.
#[wasm_bindgen]
pub fn check(program: &[u8], request_json: &str) -> String {
    render(pachinko_checker::check_to_result(
        ProgramImage::new(program.to_vec()),
        request_json,
        None,
    ))
}

/// Check a JSON request body with a JSON checker configuration.
#[wasm_bindgen]
pub fn check_with_config(program: &[u8], request_json: &str, config_json: &str) -> String {
    render(pachinko_checker::check_to_result(
        ProgramImage::new(program.to_vec()),
        request_json,
        Some(config_json),
    ))
}

/// Return the checker version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn render(result: pachinko_checker::CheckResult) -> String {
    serde_json::to_string(&result).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"verdict":"no_verdict","verdict_word":0,"gates_evaluated":0,"program_sha256":"","errors":[{{"code":400,"category":"request","message":"Serialization error: {}"}}]}}"#,
            e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"circuit": [
        {"input1": 5, "input2": 5, "output": 1},
        {"input1": 6, "input2": 6, "output": 2},
        {"input1": 7, "input2": 7, "output": 3},
        {"input1": 8, "input2": 8, "output": 4}
    ]}"#;

    #[test]
    fn test_check_returns_json() {
        let out: serde_json::Value = serde_json::from_str(&check(b"nand", BODY)).unwrap();
        assert_eq!(out["success"], true);
        assert_eq!(out["verdict"], "pass");
        assert_eq!(out["verdict_word"], 0x1337);
    }

    #[test]
    fn test_check_with_config_overrides_expectation() {
        let config = r#"{"output_state": [65535, 0, 65535, 0]}"#;
        let out: serde_json::Value =
            serde_json::from_str(&check_with_config(b"nand", BODY, config)).unwrap();
        assert_eq!(out["verdict"], "fail");
    }

    #[test]
    fn test_bad_body_reports_error() {
        let out: serde_json::Value = serde_json::from_str(&check(b"nand", "{")).unwrap();
        assert_eq!(out["success"], false);
        assert_eq!(out["errors"][0]["code"], 400);
    }

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
