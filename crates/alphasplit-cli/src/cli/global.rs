//! Flags that shape how a run reports itself: log verbosity, colour,
//! config file and the console format of the summary.
//!
//! Flattened into [`super::Cli`] next to the run arguments.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Reporting and configuration flags.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// How much of the run is logged to stderr.
    ///
    /// `-v` adds the run summary, `-vv` each letter file as it is opened,
    /// `-vvv` every skipped line. Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (run summary)
    -vv     - Debug level (each letter file as it is created)
    -vvv    - Trace level (every skipped line)"
    )]
    pub verbose: u8,

    /// Drop the "Files created successfully" summary; a failed run's
    /// error line is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress the summary (errors are still shown)"
    )]
    pub quiet: bool,

    /// Print the summary and error line without ANSI colour.
    ///
    /// Any non-empty `NO_COLOR` other than a falsey word (`0`, `false`,
    /// `no`, `off`) turns colour off, as <https://no-color.org> asks.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file with `input`, `output_dir` and `[output]` settings.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Console rendering of the run report.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the run report is rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured header and file list.
    Human,
    /// The same lines without colour.
    Plain,
    /// The full report (groups, line counts) as JSON.
    Json,
}
