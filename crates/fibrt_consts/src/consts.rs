use console::Style;
use lazy_static::lazy_static;

pub const FIBRT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The chart is written to the working directory under this name on every run.
pub const CHART_FILE_NAME: &str = "Fibonacci_runtime_efficiency_chart.png";
pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 480;

pub const WINDOW_TITLE: &str = "Fibonacci Runtime Test";
pub const CHART_TITLE: &str = "Iterative vs Recursive Fibonacci Runtime";
pub const X_AXIS_LABEL: &str = "Input (n)";
pub const Y_AXIS_LABEL: &str = "Time (ns)";

pub const ITERATIVE_SERIES_NAME: &str = "Iterative Function";
pub const RECURSIVE_SERIES_NAME: &str = "Recursive Function";
pub const ITERATIVE_SECTION_HEADER: &str = "Iterative version:";
pub const RECURSIVE_SECTION_HEADER: &str = "Recursive version:";

pub const TERM_COUNT_PROMPT: &str = "Enter the number of terms of the Fibonacci sequence: ";

pub const CLAP_GLOBAL_OPTIONS: &str = "Global Options";

lazy_static! {
    pub static ref PATH_STYLE: Style = Style::new().cyan();
    pub static ref TERM_STYLE: Style = Style::new().bold();
}
