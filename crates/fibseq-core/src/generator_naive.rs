//! Naive recursive reference generator.
//!
//! Exponential time. Kept as a readable reference for cross-checking the
//! iterative path and capped at [`NAIVE_MAX_INDEX`].

use tracing::debug;

use crate::constants::NAIVE_MAX_INDEX;
use crate::error::SeqError;
use crate::generator::{validate_index, SequenceGenerator};
use crate::options::Options;

/// Reference generator using the textbook recursive definition.
#[derive(Debug, Clone, Copy)]
pub struct NaiveRecursiveGenerator;

impl NaiveRecursiveGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_limit(index: u64) -> Result<(), SeqError> {
        if index > NAIVE_MAX_INDEX {
            return Err(SeqError::LimitExceeded {
                n: index,
                limit: NAIVE_MAX_INDEX,
            });
        }
        Ok(())
    }
}

impl Default for NaiveRecursiveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// F(k), 0-based.
fn fib_recursive(k: u64) -> u64 {
    match k {
        0 | 1 => k,
        _ => fib_recursive(k - 1) + fib_recursive(k - 2),
    }
}

impl SequenceGenerator for NaiveRecursiveGenerator {
    fn generate(&self, n: i64, opts: &Options) -> Result<Vec<u64>, SeqError> {
        let count = validate_index(n, opts)?;
        Self::check_limit(count)?;
        debug!(n = count, "generating sequence recursively");
        Ok((0..count).map(fib_recursive).collect())
    }

    fn nth(&self, n: i64, opts: &Options) -> Result<u64, SeqError> {
        let index = validate_index(n, opts)?;
        Self::check_limit(index)?;
        Ok(fib_recursive(index - 1))
    }

    fn name(&self) -> &'static str {
        "NaiveRecursive"
    }
}
