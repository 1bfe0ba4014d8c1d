//! Measures how long each Fibonacci strategy takes for every term up to a
//! user supplied bound.
//!
//! The work happens in two explicit phases: [`prompt_term_count`] obtains the
//! bound from an input source and [`run_benchmark`] produces a
//! [`BenchmarkResult`] from it. Neither touches a global console handle, the
//! caller passes the reader and writer to use.

mod input;
mod runner;
mod series;

pub use input::{InputError, parse_term_count, prompt_term_count, read_term_count};
pub use runner::{BenchmarkError, measure_series, run_benchmark};
pub use series::{BenchmarkResult, Series, TimingPoint};
