use std::{
    hint::black_box,
    io::{self, Write},
    time::Instant,
};

use fibrt_consts::consts;
use fibrt_sequence::Strategy;
use miette::Diagnostic;
use thiserror::Error;

use crate::series::{BenchmarkResult, Series, TimingPoint};

#[derive(Debug, Error, Diagnostic)]
pub enum BenchmarkError {
    #[error("failed to write benchmark progress")]
    Output(#[from] io::Error),
}

/// Times both strategies for every term in `0..=n` and writes a progress line per
/// measurement to `out`.
///
/// The iterative pass finishes before the recursive pass starts so the two never
/// compete for the CPU.
pub fn run_benchmark<W: Write>(n: u32, out: &mut W) -> Result<BenchmarkResult, BenchmarkError> {
    tracing::info!(
        "benchmarking Fibonacci terms 0 through {}",
        consts::TERM_STYLE.apply_to(n)
    );
    let mut passes = Strategy::ALL.map(Series::new);
    for series in &mut passes {
        record_pass(series, n, out)?;
    }
    let [iterative, recursive] = passes;
    Ok(BenchmarkResult::new(iterative, recursive))
}

/// Times a single invocation of `strategy` for every term in `0..=n`.
///
/// Only the call itself is measured. The progress lines are written after the end
/// timestamp has been taken.
pub fn measure_series<W: Write>(
    strategy: Strategy,
    n: u32,
    out: &mut W,
) -> Result<Series, BenchmarkError> {
    let mut series = Series::new(strategy);
    record_pass(&mut series, n, out)?;
    Ok(series)
}

fn record_pass<W: Write>(series: &mut Series, n: u32, out: &mut W) -> Result<(), BenchmarkError> {
    let strategy = series.strategy();
    let _span = tracing::debug_span!("measure_series", %strategy, n).entered();

    write!(out, "\n{}\n\n", strategy.section_header())?;

    for term in 0..=n {
        let start = Instant::now();
        let value = black_box(strategy.compute(black_box(term)));
        let point = TimingPoint::new(term, start.elapsed());
        series.push(point);

        writeln!(out, "Fibonacci Sequence: {value}")?;
        writeln!(
            out,
            "(Term Number (n): {term}, Speed: {} ns)",
            point.elapsed_ns()
        )?;
        tracing::trace!(term, value, elapsed_ns = point.elapsed_ns(), "measured term");
    }
    out.flush()?;

    tracing::debug!(
        "{strategy} pass finished, slowest term took {} ns",
        series.max_elapsed_ns()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_single_term() {
        let result = run_benchmark(0, &mut io::sink()).unwrap();
        for series in result.series() {
            assert_eq!(series.len(), 1);
            assert_eq!(series.points()[0].term(), 0);
        }
        assert_eq!(result.max_term(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(12)]
    fn test_series_cover_every_term(#[case] n: u32) {
        let result = run_benchmark(n, &mut io::sink()).unwrap();
        assert_eq!(result.iterative().strategy(), Strategy::Iterative);
        assert_eq!(result.recursive().strategy(), Strategy::Recursive);
        for series in result.series() {
            assert_eq!(series.len(), n as usize + 1);
            assert!(series.terms().eq(0..=n));
        }
        assert_eq!(result.max_term(), n);
    }

    #[test]
    fn test_progress_output() {
        let mut out = Vec::new();
        run_benchmark(3, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        insta::with_settings!({filters => vec![
            (r"Speed: \d+ ns", "Speed: [ELAPSED] ns"),
        ]}, {
            insta::assert_snapshot!(output.trim(), @r"
            Iterative version:

            Fibonacci Sequence: 0
            (Term Number (n): 0, Speed: [ELAPSED] ns)
            Fibonacci Sequence: 1
            (Term Number (n): 1, Speed: [ELAPSED] ns)
            Fibonacci Sequence: 1
            (Term Number (n): 2, Speed: [ELAPSED] ns)
            Fibonacci Sequence: 2
            (Term Number (n): 3, Speed: [ELAPSED] ns)

            Recursive version:

            Fibonacci Sequence: 0
            (Term Number (n): 0, Speed: [ELAPSED] ns)
            Fibonacci Sequence: 1
            (Term Number (n): 1, Speed: [ELAPSED] ns)
            Fibonacci Sequence: 1
            (Term Number (n): 2, Speed: [ELAPSED] ns)
            Fibonacci Sequence: 2
            (Term Number (n): 3, Speed: [ELAPSED] ns)
            ");
        });
    }

    #[test]
    fn test_printed_speed_matches_recorded_point() {
        let mut out = Vec::new();
        let series = measure_series(Strategy::Iterative, 4, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        for point in series.points() {
            let line = format!(
                "(Term Number (n): {}, Speed: {} ns)",
                point.term(),
                point.elapsed_ns()
            );
            assert!(output.contains(&line), "missing `{line}` in:\n{output}");
        }
    }

    #[test]
    fn test_recursive_cost_grows_faster() {
        let result = run_benchmark(24, &mut io::sink()).unwrap();
        let window = |series: &Series| -> u64 {
            series.points()[18..]
                .iter()
                .map(TimingPoint::elapsed_ns)
                .sum()
        };

        // F(24) needs tens of thousands of calls recursively and 23 additions
        // iteratively, scheduling noise cannot close that gap.
        assert!(window(result.recursive()) > window(result.iterative()));
        let recursive = result.recursive().points();
        assert!(recursive[24].elapsed_ns() > recursive[4].elapsed_ns());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_is_reported() {
        let err = run_benchmark(2, &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, BenchmarkError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
