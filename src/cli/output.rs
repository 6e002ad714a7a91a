//! Terminal output formatting.
//!
//! Human output goes through small helpers with dimmed labels. In `--json`
//! mode a command writes one document to stdout and errors become JSON
//! lines on stderr. The writers and settings are owned by an [`Output`] value handed to each
//! command, so tests can capture both streams.

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

/// Output settings taken from global CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    /// Check if regular (non-JSON) output should be suppressed.
    const fn regular_output_suppressed(self) -> bool {
        !self.json && self.quiet
    }
}

/// Destination for command output.
#[derive(Debug)]
pub struct Output<W, E> {
    config: OutputConfig,
    out: W,
    err: E,
}

impl Output<Stdout, Stderr> {
    /// Write to the process's stdout and stderr.
    #[must_use]
    pub fn stdio(config: OutputConfig) -> Self {
        Self::new(config, io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> Output<W, E> {
    #[must_use]
    pub const fn new(config: OutputConfig, out: W, err: E) -> Self {
        Self { config, out, err }
    }

    /// Return whether machine-readable JSON output is enabled.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.config.json
    }

    /// Return the verbosity level from `-v` flags.
    #[must_use]
    pub const fn verbosity(&self) -> u8 {
        self.config.verbose
    }

    /// Release the underlying writers.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Print a labeled value. Hidden in quiet mode.
    pub fn field(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        if self.config.regular_output_suppressed() {
            return Ok(());
        }

        let label = format!("{label:<12}");
        writeln!(
            self.out,
            "  {} {}",
            label.if_supports_color(Stream::Stdout, |text| text.dimmed()),
            value
        )
    }

    /// Print a pre-rendered block verbatim. Shown even in quiet mode.
    pub fn block(&mut self, content: &str) -> io::Result<()> {
        writeln!(self.out, "{content}")
    }

    /// Print a single JSON document.
    pub fn json_output(&mut self, value: &serde_json::Value) -> io::Result<()> {
        writeln!(self.out, "{value}")
    }

    /// Print a JSON error line on stderr.
    pub fn json_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(
            self.err,
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        )
    }

    /// Print a pre-rendered diagnostic on stderr.
    pub fn diagnostic(&mut self, rendered: &str) -> io::Result<()> {
        write!(self.err, "{rendered}")
    }
}
