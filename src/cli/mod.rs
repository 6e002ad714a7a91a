//! Command-line entry point.
//!
//! [`run`] owns the whole invocation: it parses the argument list, loads
//! configuration, initializes logging, converts the odds, and maps the
//! outcome to a process exit code.

pub mod command;
pub mod convert;
pub mod diagnostic;
pub mod output;
pub mod paths;

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use command::{Cli, ColorChoice};
use convert::Conversion;
use output::{Output, OutputConfig};

/// Exit status for conversion and configuration failures.
const FAILURE: u8 = 1;

/// Run the CLI with an explicit argument list (including the program name).
///
/// Returns `0` on success, `1` when the odds or the configuration are
/// invalid, and clap's usage status (`2`) for malformed arguments.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(2));
        }
    };

    let _ = dotenvy::dotenv();
    apply_color(cli.color);

    let mut output = Output::stdio(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match execute(&cli, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %err, "odds conversion failed");
            report(&err, &cli, &mut output);
            ExitCode::from(FAILURE)
        }
    }
}

fn execute<W: Write, E: Write>(cli: &Cli, output: &mut Output<W, E>) -> Result<()> {
    let config = load_config(cli)?;
    config.logging.clone().with_verbosity(cli.verbose).init();

    let conversion = Conversion::parse(&cli.odds, cli.format)?;
    convert::print(&conversion, config.display.fraction_divider, output)
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(paths::default_config()),
    }
}

fn apply_color(color: ColorChoice) {
    match color {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

fn report<W: Write, E: Write>(err: &Error, cli: &Cli, output: &mut Output<W, E>) {
    let written = if output.is_json() {
        output.json_error(&err.to_string())
    } else {
        output.diagnostic(&diagnostic::render(err, cli.odds.trim(), cli.color))
    };
    if let Err(io_err) = written {
        eprintln!("{err} ({io_err})");
    }
}
