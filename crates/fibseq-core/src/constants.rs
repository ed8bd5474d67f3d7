//! Constants for sequence limits and process exit codes.

/// Largest 0-based Fibonacci index whose value fits in a `u64`.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Largest 1-based term index accepted in checked overflow mode.
pub const MAX_CHECKED_INDEX: u64 = MAX_FIB_U64 + 1;

/// Largest 1-based term index the naive recursive generator will compute.
pub const NAIVE_MAX_INDEX: u64 = 40;

/// Largest number of terms a sequence can hold in one allocation.
pub const MAX_SEQUENCE_LEN: u64 =
    (isize::MAX.unsigned_abs() / std::mem::size_of::<u64>()) as u64;

/// Default upper bound on N applied by the command-line front end.
pub const DEFAULT_MAX_N: u64 = 100_000;

/// Precomputed Fibonacci values for 0-based indices 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Invalid input, overflow, or any other runtime failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (unknown generator name).
    pub const ERROR_CONFIG: i32 = 4;
}
