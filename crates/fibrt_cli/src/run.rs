use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use fibrt_chart::{ChartDisplay, WindowDisplay};
use fibrt_consts::consts;

/// Runs the benchmark on the process' standard streams and shows the chart in a
/// window.
pub fn execute() -> miette::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run(
        stdin.lock(),
        &mut stdout,
        Path::new(consts::CHART_FILE_NAME),
        &mut WindowDisplay::default(),
    )
}

/// Reads the term count from `input`, benchmarks both strategies while writing
/// progress to `out`, exports the chart to `output_path` and presents it on
/// `display`.
pub fn run<R: BufRead, W: Write, D: ChartDisplay + ?Sized>(
    input: R,
    out: &mut W,
    output_path: &Path,
    display: &mut D,
) -> miette::Result<()> {
    let term_count = fibrt_bench::prompt_term_count(input, out)?;
    let result = fibrt_bench::run_benchmark(term_count, out)?;
    fibrt_chart::render_and_export(&result, output_path, display)?;
    Ok(())
}
