//! Shared fixtures for the workspace-level integration tests.

use serde::Deserialize;

/// Contents of `tests/testdata/fibonacci_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub terms: Vec<GoldenTerm>,
    pub sequences: Vec<GoldenSequence>,
}

/// Expected value of a single 1-based term.
#[derive(Debug, Deserialize)]
pub struct GoldenTerm {
    pub n: i64,
    pub nth: u64,
    /// Set when the true value exceeds `u64` and `nth` is the wrapped value.
    #[serde(default)]
    pub wrapped: bool,
}

/// Expected prefix of the sequence.
#[derive(Debug, Deserialize)]
pub struct GoldenSequence {
    pub n: i64,
    pub terms: Vec<u64>,
}

/// Load the golden data file.
pub fn load_golden_data() -> Result<GoldenData, Box<dyn std::error::Error>> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
