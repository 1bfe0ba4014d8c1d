use std::time::Duration;

use fibrt_sequence::Strategy;

/// The time a single call took for one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingPoint {
    term: u32,
    elapsed_ns: u64,
}

impl TimingPoint {
    /// Records that computing `term` took `elapsed`. Durations beyond `u64::MAX`
    /// nanoseconds saturate.
    pub fn new(term: u32, elapsed: Duration) -> Self {
        Self {
            term,
            elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    pub fn term(&self) -> u32 {
        self.term
    }

    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }
}

/// The measurements of one strategy, ordered by term.
///
/// A series is only built by the runner, once it is handed out it cannot be
/// modified anymore.
#[derive(Debug, Clone)]
pub struct Series {
    strategy: Strategy,
    points: Vec<TimingPoint>,
}

impl Series {
    pub(crate) fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            points: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, point: TimingPoint) {
        self.points.push(point);
    }

    /// The strategy that was measured.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The label of this series, e.g. `Iterative Function`.
    pub fn name(&self) -> &'static str {
        self.strategy.series_name()
    }

    pub fn points(&self) -> &[TimingPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the measured terms in order.
    pub fn terms(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().map(TimingPoint::term)
    }

    /// The slowest measurement of this series, or zero if it is empty.
    pub fn max_elapsed_ns(&self) -> u64 {
        self.points
            .iter()
            .map(TimingPoint::elapsed_ns)
            .max()
            .unwrap_or_default()
    }
}

/// The outcome of a benchmark run: one series per strategy over the same terms.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    iterative: Series,
    recursive: Series,
}

impl BenchmarkResult {
    pub(crate) fn new(iterative: Series, recursive: Series) -> Self {
        debug_assert!(
            iterative.terms().eq(recursive.terms()),
            "both series must cover the same terms"
        );
        Self {
            iterative,
            recursive,
        }
    }

    pub fn iterative(&self) -> &Series {
        &self.iterative
    }

    pub fn recursive(&self) -> &Series {
        &self.recursive
    }

    /// Both series in the order they were measured.
    pub fn series(&self) -> [&Series; 2] {
        [&self.iterative, &self.recursive]
    }

    /// The highest term that was measured.
    pub fn max_term(&self) -> u32 {
        self.iterative.terms().last().unwrap_or_default()
    }

    /// The slowest measurement across both series.
    pub fn max_elapsed_ns(&self) -> u64 {
        self.iterative
            .max_elapsed_ns()
            .max(self.recursive.max_elapsed_ns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_point_saturates() {
        let point = TimingPoint::new(3, Duration::MAX);
        assert_eq!(point.term(), 3);
        assert_eq!(point.elapsed_ns(), u64::MAX);
    }

    #[test]
    fn test_result_extremes() {
        let mut iterative = Series::new(Strategy::Iterative);
        let mut recursive = Series::new(Strategy::Recursive);
        for (term, (fast, slow)) in [(40, 90), (35, 700), (50, 4_000)].into_iter().enumerate() {
            let term = term as u32;
            iterative.push(TimingPoint::new(term, Duration::from_nanos(fast)));
            recursive.push(TimingPoint::new(term, Duration::from_nanos(slow)));
        }

        let result = BenchmarkResult::new(iterative, recursive);
        assert_eq!(result.max_term(), 2);
        assert_eq!(result.iterative().max_elapsed_ns(), 50);
        assert_eq!(result.max_elapsed_ns(), 4_000);
        assert_eq!(result.series().map(Series::name), [
            "Iterative Function",
            "Recursive Function"
        ]);
    }
}
