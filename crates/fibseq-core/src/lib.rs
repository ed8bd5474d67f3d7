//! # fibseq-core
//!
//! Core library for the fibseq Fibonacci sequence tool.
//! Generates the first N terms or the Nth term in `u64`, with an explicit
//! overflow policy and an optional size guard.
//!
//! Indices are 1-based: term 1 is 0, term 2 is 1. N <= 0 is rejected.

pub mod constants;
pub mod error;
pub mod generator;
pub mod generator_iterative;
pub mod generator_naive;
pub mod iterator;
pub mod options;
pub mod registry;
pub mod sum;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_MAX_N, FIB_TABLE, MAX_CHECKED_INDEX, MAX_FIB_U64, MAX_SEQUENCE_LEN,
    NAIVE_MAX_INDEX,
};
pub use error::SeqError;
pub use generator::SequenceGenerator;
pub use generator_iterative::IterativeGenerator;
pub use generator_naive::NaiveRecursiveGenerator;
pub use iterator::FibIterator;
pub use options::{Options, OverflowMode};
pub use registry::{DefaultFactory, GeneratorFactory};
pub use sum::sum_sequence;

/// Generate the first `n` Fibonacci terms.
///
/// Uses the iterative generator with default options: terms past F(93)
/// wrap modulo 2^64 and no size guard is applied. A count that cannot be
/// allocated fails with [`SeqError::LimitExceeded`] or
/// [`SeqError::Allocation`] rather than panicking.
///
/// # Example
/// ```
/// assert_eq!(fibseq_core::generate_sequence(5).unwrap(), [0, 1, 1, 2, 3]);
/// assert!(fibseq_core::generate_sequence(0).is_err());
/// ```
pub fn generate_sequence(n: i64) -> Result<Vec<u64>, SeqError> {
    IterativeGenerator::new().generate(n, &Options::default())
}

/// Compute the `n`th Fibonacci term (1-based).
///
/// # Example
/// ```
/// assert_eq!(fibseq_core::nth_term(1).unwrap(), 0);
/// assert_eq!(fibseq_core::nth_term(7).unwrap(), 8);
/// ```
pub fn nth_term(n: i64) -> Result<u64, SeqError> {
    IterativeGenerator::new().nth(n, &Options::default())
}
