//! Iterative Fibonacci sequence generator.

use tracing::{debug, trace};

use crate::constants::MAX_SEQUENCE_LEN;
use crate::error::SeqError;
use crate::generator::{validate_index, SequenceGenerator};
use crate::iterator::FibIterator;
use crate::options::Options;

/// Iterative generator: two-variable accumulation, O(n) time.
///
/// `nth` uses O(1) auxiliary space; `generate` allocates only the result
/// and reports a request it cannot allocate as an error instead of aborting.
/// Terms past F(93) wrap modulo 2^64 unless checked mode is selected.
#[derive(Debug, Clone, Copy)]
pub struct IterativeGenerator;

impl IterativeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for IterativeGenerator {
    fn generate(&self, n: i64, opts: &Options) -> Result<Vec<u64>, SeqError> {
        let count = validate_index(n, opts)?;
        debug!(n = count, overflow = %opts.overflow, "generating sequence");

        let len = usize::try_from(count)
            .ok()
            .filter(|_| count <= MAX_SEQUENCE_LEN)
            .ok_or(SeqError::LimitExceeded {
                n: count,
                limit: MAX_SEQUENCE_LEN,
            })?;

        let mut terms = Vec::new();
        terms
            .try_reserve_exact(len)
            .map_err(|_| SeqError::Allocation { n: count })?;
        terms.extend(FibIterator::new().take(len).map(|(_, v)| v));
        Ok(terms)
    }

    fn nth(&self, n: i64, opts: &Options) -> Result<u64, SeqError> {
        let index = validate_index(n, opts)?;
        trace!(n = index, overflow = %opts.overflow, "computing term");

        let (mut a, mut b) = (0u64, 1u64);
        for _ in 1..index {
            let next = a.wrapping_add(b);
            a = std::mem::replace(&mut b, next);
        }
        Ok(a)
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
