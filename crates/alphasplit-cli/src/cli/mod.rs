//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Input used when neither the command line nor configuration names one.
pub const DEFAULT_INPUT: &str = "all-words.txt";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "alphasplit",
    bin_name = "alphasplit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Split a word list into one file per leading letter",
    long_about = "Alphasplit reads a word list and writes every line that starts \
                  with a letter to <LETTER>.txt (A.txt ... Z.txt). Blank lines and \
                  lines starting with anything else are dropped. Existing letter \
                  files are overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 alphasplit                       # all-words.txt -> ./A.txt ... ./Z.txt\n\
        \x20 alphasplit words.txt -o letters\n\
        \x20 alphasplit --output-format json words.txt",
)]
pub struct Cli {
    /// Flags that tune logging and output.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to split and where to put it.
    #[command(flatten)]
    pub run: RunArgs,
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for the categorize run.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Word list to split.
    #[arg(
        value_name = "INPUT",
        help = "Word list to split [default: all-words.txt]"
    )]
    pub input: Option<PathBuf>,

    /// Directory that receives the letter files.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory for the letter files [default: .]"
    )]
    pub output_dir: Option<PathBuf>,
}
