//! Error type for sequence generation.

/// Error type for Fibonacci sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// The requested count or index is not a positive integer.
    #[error("invalid input: {0} is not a positive integer")]
    InvalidInput(i64),

    /// A value does not fit in `u64` under checked overflow mode.
    #[error("term {index} exceeds the u64 range")]
    Overflow {
        /// 1-based position of the first value that does not fit.
        index: u64,
    },

    /// The request exceeds a configured or built-in size limit.
    #[error("n = {n} exceeds the limit of {limit}")]
    LimitExceeded {
        /// Requested count or index.
        n: u64,
        /// Limit in effect.
        limit: u64,
    },

    /// The result buffer for the sequence could not be allocated.
    #[error("cannot allocate {n} terms")]
    Allocation {
        /// Requested count.
        n: u64,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
