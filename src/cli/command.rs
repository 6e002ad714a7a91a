//! Command-line interface definitions.
//!
//! `odds` takes a single price in any supported format and prints it in
//! every format, together with the opposite side of a two-way market.

use clap::Parser;
use std::path::PathBuf;

use crate::domain::format::OddsFormat;

/// Convert betting odds between decimal, fractional and US formats
#[derive(Parser, Debug)]
#[command(name = "odds")]
#[command(version)]
#[command(after_help = "Examples:\n  odds 1.5\n  odds 9/4\n  odds 5-2\n  odds +225\n  odds -200")]
pub struct Cli {
    /// Odds to convert, e.g. 3.25, 9/4, 9-4, +225 or -200
    #[arg(allow_negative_numbers = true)]
    pub odds: String,

    /// Parse the odds as this format instead of detecting it
    #[arg(short, long, value_enum)]
    pub format: Option<OddsFormat>,

    /// Path to the configuration file [default: ~/.odds/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}
