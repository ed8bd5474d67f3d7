//! CLI output formatting.

use serde::Serialize;

use fibseq_core::OverflowMode;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Everything computed for one request, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceReport {
    pub n: i64,
    pub generator: String,
    pub overflow: OverflowMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nth: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<u64>,
}

impl SequenceReport {
    #[must_use]
    pub fn new(n: i64, generator: &str, overflow: OverflowMode) -> Self {
        Self {
            n,
            generator: generator.to_string(),
            overflow,
            terms: None,
            nth: None,
            sum: None,
        }
    }

    /// Serialize as a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Format terms as space-separated values.
#[must_use]
pub fn format_sequence(terms: &[u64]) -> String {
    terms
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// English ordinal suffix for `n` (1st, 2nd, 3rd, 11th, 22nd, ...).
#[must_use]
pub fn ordinal_suffix(n: i64) -> &'static str {
    let n = n.unsigned_abs();
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Header line printed above the sequence.
#[must_use]
pub fn sequence_header(n: i64) -> String {
    format!("First {n} Fibonacci numbers:")
}

/// Sentence reporting a single term.
#[must_use]
pub fn nth_line(n: i64, value: u64) -> String {
    format!("The {n}{} Fibonacci number is: {value}", ordinal_suffix(n))
}
