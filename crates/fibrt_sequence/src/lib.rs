//! The two Fibonacci implementations that `fibrt` races against each other.
//!
//! Both functions compute `F(0) = 0`, `F(1) = 1`, `F(n) = F(n - 1) + F(n - 2)`.
//! Values no longer fit a `u64` from `F(94)` on. That boundary is not guarded:
//! additions wrap, so both strategies agree on the overflowed value in debug and
//! release builds alike.

use std::fmt::{Display, Formatter};

use fibrt_consts::consts;

/// Computes the `n`th Fibonacci number with two running accumulators.
///
/// Runs in `O(n)` time and constant space.
pub fn iterative_fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }

    let mut prev_prev: u64 = 0;
    let mut prev: u64 = 1;
    let mut current = prev;
    for _ in 2..=n {
        current = prev.wrapping_add(prev_prev);
        prev_prev = prev;
        prev = current;
    }
    current
}

/// Computes the `n`th Fibonacci number by calling itself for `n - 1` and `n - 2`.
///
/// There is no memoization, the call tree grows exponentially with `n`. That cost is
/// exactly what the benchmark sets out to show.
pub fn recursive_fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    recursive_fibonacci(n - 1).wrapping_add(recursive_fibonacci(n - 2))
}

/// Selects one of the two implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Iterative,
    Recursive,
}

impl Strategy {
    /// All strategies in the order they are benchmarked.
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    /// Computes the Fibonacci number of `term` with this strategy.
    pub fn compute(self, term: u32) -> u64 {
        match self {
            Strategy::Iterative => iterative_fibonacci(term),
            Strategy::Recursive => recursive_fibonacci(term),
        }
    }

    /// The label of the measurement series produced for this strategy.
    pub fn series_name(self) -> &'static str {
        match self {
            Strategy::Iterative => consts::ITERATIVE_SERIES_NAME,
            Strategy::Recursive => consts::RECURSIVE_SERIES_NAME,
        }
    }

    /// The header printed before the progress lines of this strategy.
    pub fn section_header(self) -> &'static str {
        match self {
            Strategy::Iterative => consts::ITERATIVE_SECTION_HEADER,
            Strategy::Recursive => consts::RECURSIVE_SECTION_HEADER,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Iterative => write!(f, "iterative"),
            Strategy::Recursive => write!(f, "recursive"),
        }
    }
}
