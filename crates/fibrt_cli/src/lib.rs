//! # fibrt CLI
//!
//! Parses the global options, installs the diagnostic and logging handlers and
//! then hands over to [`run::execute`], which prompts for the term count,
//! benchmarks both Fibonacci strategies and shows the resulting chart.
#![deny(clippy::dbg_macro, clippy::unwrap_used)]

use std::env;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style};
use fibrt_consts::consts;
use miette::IntoDiagnostic;
use tracing::level_filters::LevelFilter;

pub mod run;

#[derive(Parser, Debug)]
#[command(
    name = "fibrt",
    version(consts::FIBRT_VERSION),
    about = format!("
fibrt [version {}] - Iterative vs recursive Fibonacci runtime comparison.

Asks for the highest Fibonacci term N, times both implementations for every
term from 0 through N and draws the results as a line chart. The chart is
written to `{}` in the working directory and shown in a window,
closing the window ends the program.
", consts::FIBRT_VERSION, consts::CHART_FILE_NAME),
)]
#[clap(styles = cli_styles(), disable_help_flag = true)]
pub struct Args {
    #[clap(flatten)]
    global_options: GlobalOptions,
}

#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Display help information
    #[clap(
        long,
        short,
        action = clap::ArgAction::Help,
        help_heading = consts::CLAP_GLOBAL_OPTIONS
    )]
    help: Option<bool>,

    /// Increase logging verbosity (-v for warnings, -vv for info, -vvv for debug, -vvvv for trace)
    #[clap(short, long, action = clap::ArgAction::Count, help_heading = consts::CLAP_GLOBAL_OPTIONS)]
    verbose: u8,

    /// Decrease logging verbosity (quiet mode)
    #[clap(short, long, action = clap::ArgAction::Count, help_heading = consts::CLAP_GLOBAL_OPTIONS)]
    quiet: u8,

    /// Whether the log needs to be colored.
    #[clap(long, default_value = "auto", env = "FIBRT_COLOR", help_heading = consts::CLAP_GLOBAL_OPTIONS)]
    color: ColorOutput,
}

impl Args {
    /// Determine the log level filter based on verbose and quiet counts.
    fn log_level_filter(&self) -> LevelFilter {
        match (self.global_options.quiet, self.global_options.verbose) {
            // Quiet mode overrides verbose
            (q, _) if q > 0 => LevelFilter::OFF,
            (_, 0) => LevelFilter::ERROR, // Default
            (_, 1) => LevelFilter::WARN,  // -v
            (_, 2) => LevelFilter::INFO,  // -vv
            (_, 3) => LevelFilter::DEBUG, // -vvv
            (_, _) => LevelFilter::TRACE, // -vvvv+
        }
    }
}

pub fn execute() -> miette::Result<()> {
    let args = Args::parse();

    set_console_colors(&args);

    let use_colors = console::colors_enabled_stderr();
    // Set up the default miette handler based on whether we want colors or not.
    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::default()
                .color(use_colors)
                .build(),
        )
    }))?;

    setup_logging(&args, use_colors)?;

    run::execute()
}

fn setup_logging(args: &Args, use_colors: bool) -> miette::Result<()> {
    use tracing_subscriber::{
        EnvFilter, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    };

    let (level_filter, fibrt_level) = match args.log_level_filter() {
        LevelFilter::OFF => (LevelFilter::OFF, LevelFilter::OFF),
        LevelFilter::ERROR => (LevelFilter::ERROR, LevelFilter::ERROR),
        LevelFilter::WARN => (LevelFilter::WARN, LevelFilter::WARN),
        LevelFilter::INFO => (LevelFilter::WARN, LevelFilter::INFO),
        LevelFilter::DEBUG => (LevelFilter::INFO, LevelFilter::DEBUG),
        LevelFilter::TRACE => (LevelFilter::TRACE, LevelFilter::TRACE),
    };

    let cli_verbosity_set = args.global_options.verbose > 0 || args.global_options.quiet > 0;
    let directives = fibrt_directives(fibrt_level);

    // CLI flags take precedence over RUST_LOG, otherwise RUST_LOG refines our own
    // directives.
    let env_filter = if cli_verbosity_set {
        EnvFilter::builder()
            .with_default_directive(level_filter.into())
            .parse(directives)
            .into_diagnostic()?
    } else {
        let env_directives = env::var("RUST_LOG").unwrap_or_default();
        let final_directives = if env_directives.is_empty() {
            directives
        } else {
            format!("{directives},{env_directives}")
        };

        EnvFilter::builder()
            .with_default_directive(level_filter.into())
            .parse(&final_directives)
            .into_diagnostic()?
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(use_colors)
        .with_target(fibrt_level >= LevelFilter::DEBUG)
        .with_writer(std::io::stderr)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

/// The filter directives for the crates of this workspace.
fn fibrt_directives(level: LevelFilter) -> String {
    ["fibrt", "fibrt_cli", "fibrt_bench", "fibrt_chart", "fibrt_sequence"]
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Color mode for the console and the diagnostic output.
///
/// `FORCE_COLOR` and `NO_COLOR` outrank both `--color` and `FIBRT_COLOR`.
#[derive(clap::ValueEnum, Debug, Clone, Default, PartialEq, Eq)]
pub enum ColorOutput {
    Always,
    Never,

    #[default]
    Auto,
}

impl ColorOutput {
    /// Returns the forced color setting, or `None` when `console` should detect it.
    fn resolve(&self) -> Option<bool> {
        if env::var_os("FORCE_COLOR").is_some() {
            return Some(true);
        }
        if env::var_os("NO_COLOR").is_some() {
            return Some(false);
        }
        match self {
            ColorOutput::Always => Some(true),
            ColorOutput::Never => Some(false),
            ColorOutput::Auto => None,
        }
    }
}

fn set_console_colors(args: &Args) {
    if let Some(enabled) = args.global_options.color.resolve() {
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled);
    }
}

/// Help output colors, matching the chart: green headings and red failures.
fn cli_styles() -> clap::builder::Styles {
    let heading = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Green)));
    let accent = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
    let failure = Style::new()
        .bold()
        .fg_color(Some(Color::Ansi(AnsiColor::Red)));

    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading)
        .valid(heading)
        .literal(accent.bold())
        .placeholder(accent)
        .error(failure)
        .invalid(failure)
}
