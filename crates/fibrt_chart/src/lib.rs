//! Turns a [`BenchmarkResult`] into a line chart that is written to a PNG file and
//! shown to the user.
//!
//! The chart is drawn once into an in-memory [`ChartFrame`]. The same frame is
//! then exported with [`export_png`] and handed to a [`ChartDisplay`].

use std::path::Path;

use fibrt_bench::BenchmarkResult;
use fibrt_consts::consts;
use miette::Diagnostic;
use thiserror::Error;

mod display;
mod draw;
pub mod fonts;
mod frame;

pub use display::{ChartDisplay, DisplayError, WindowDisplay};
pub use draw::{ITERATIVE_COLOR, PLOT_BACKGROUND, RECURSIVE_COLOR, render_chart, series_style};
pub use frame::{ChartFrame, ExportError, export_png};

#[derive(Debug, Error, Diagnostic)]
pub enum ChartError {
    #[error("failed to draw the chart: {0}")]
    Render(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Display(#[from] DisplayError),
}

/// Renders the chart of `result`, writes it to `output_path` and shows it on
/// `display`.
///
/// A failed export is logged and otherwise ignored so the chart is still shown.
pub fn render_and_export<D: ChartDisplay + ?Sized>(
    result: &BenchmarkResult,
    output_path: &Path,
    display: &mut D,
) -> Result<(), ChartError> {
    let frame = render_chart(result)?;

    match export_png(&frame, output_path) {
        Ok(()) => tracing::info!(
            "exported the chart to {}",
            consts::PATH_STYLE.apply_to(output_path.display())
        ),
        Err(err) => tracing::error!("{}", describe(&err)),
    }

    display.show(&frame)?;
    Ok(())
}

/// Joins an error with all of its causes on one line.
fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
