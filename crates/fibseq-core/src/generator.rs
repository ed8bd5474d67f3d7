//! Sequence generator trait and shared input validation.

use crate::constants::MAX_CHECKED_INDEX;
use crate::error::SeqError;
use crate::options::{Options, OverflowMode};

/// Trait for producing Fibonacci sequences and individual terms.
///
/// Indices are 1-based: `nth(1)` is 0, `nth(2)` is 1. Implementations hold
/// no mutable state, so a single instance may serve concurrent callers.
pub trait SequenceGenerator: Send + Sync {
    /// Produce the first `n` terms.
    fn generate(&self, n: i64, opts: &Options) -> Result<Vec<u64>, SeqError>;

    /// Produce the `n`th term.
    fn nth(&self, n: i64, opts: &Options) -> Result<u64, SeqError>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Check a requested count/index and return it as `u64`.
///
/// Rejects n <= 0 (zero terms is not a valid request), then applies the
/// optional size guard, then the checked-mode range limit.
pub(crate) fn validate_index(n: i64, opts: &Options) -> Result<u64, SeqError> {
    let index = u64::try_from(n)
        .ok()
        .filter(|&i| i >= 1)
        .ok_or(SeqError::InvalidInput(n))?;

    if opts.is_limited() && index > opts.max_n {
        return Err(SeqError::LimitExceeded {
            n: index,
            limit: opts.max_n,
        });
    }

    if opts.overflow == OverflowMode::Checked && index > MAX_CHECKED_INDEX {
        return Err(SeqError::Overflow {
            index: MAX_CHECKED_INDEX + 1,
        });
    }

    Ok(index)
}
