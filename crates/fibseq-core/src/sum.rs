//! Sum of a generated sequence under an overflow policy.

use crate::error::SeqError;
use crate::options::OverflowMode;

/// Sum the given terms.
///
/// Wrapping mode wraps modulo 2^64. Checked mode fails with
/// [`SeqError::Overflow`] naming the 1-based position of the term whose
/// addition overflowed.
pub fn sum_sequence(terms: &[u64], mode: OverflowMode) -> Result<u64, SeqError> {
    match mode {
        OverflowMode::Wrapping => Ok(terms.iter().fold(0u64, |acc, &t| acc.wrapping_add(t))),
        OverflowMode::Checked => {
            let mut acc = 0u64;
            for (pos, &term) in (1u64..).zip(terms) {
                acc = acc
                    .checked_add(term)
                    .ok_or(SeqError::Overflow { index: pos })?;
            }
            Ok(acc)
        }
    }
}
