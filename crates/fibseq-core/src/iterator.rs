//! Lazy Fibonacci iterator using the standard additive recurrence.

/// Lazy iterator over the Fibonacci sequence in `u64`.
///
/// Yields `(index, F(index))` pairs starting from F(0), with 0-based
/// indices. Terms past F(93) wrap modulo 2^64.
///
/// # Example
/// ```
/// use fibseq_core::iterator::FibIterator;
/// let fibs: Vec<u64> = FibIterator::new().take(7).map(|(_, v)| v).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    a: u64,
    b: u64,
    index: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: 0,
            b: 1,
            index: 0,
        }
    }

    /// Start iteration from the given 0-based index.
    #[must_use]
    pub fn from_index(n: u64) -> Self {
        let mut iter = Self::new();
        for _ in 0..n {
            iter.advance();
        }
        iter
    }

    fn advance(&mut self) {
        let next = self.a.wrapping_add(self.b);
        self.a = std::mem::replace(&mut self.b, next);
        self.index += 1;
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let item = (self.index, self.a);
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for FibIterator {}
