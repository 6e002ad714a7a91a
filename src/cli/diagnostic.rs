//! Miette-based error diagnostics for CLI error presentation.
//!
//! Conversion failures show the offending input with a label and a hint
//! about accepted spellings. Configuration failures carry only a message
//! and help text.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, SourceSpan};
use thiserror::Error;

use super::command::ColorChoice;
use crate::domain::error::OddsError;
use crate::error::Error as AppError;

const FORMAT_HELP: &str = "use decimal (2.5), fractional (3/2 or 3-2) or US (+150, -200) odds";

/// Odds input error pointing at the rejected text.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(odds::input))]
pub struct InputError {
    /// Human-readable error message.
    pub message: String,

    /// The odds string as given on the command line.
    #[source_code]
    pub src: String,

    /// The rejected region of the input.
    #[label("here")]
    pub span: SourceSpan,

    /// Suggestion for a valid spelling.
    #[help]
    pub help: Option<String>,
}

impl InputError {
    /// Build a diagnostic for `error` raised while parsing `input`.
    #[must_use]
    pub fn new(input: &str, error: &OddsError) -> Self {
        Self {
            message: error.to_string(),
            src: input.to_string(),
            span: (0, input.len()).into(),
            help: Some(help_for(error).to_string()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(odds::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

fn help_for(error: &OddsError) -> &'static str {
    match error {
        OddsError::AmbiguousFormat { .. } => FORMAT_HELP,
        OddsError::InvalidFraction { .. } => {
            "fractional odds look like 9/4 or 9-4 with a non-zero denominator"
        }
        OddsError::InvalidUsOdds { .. } => "US odds need a non-zero moneyline such as +150 or -200",
        OddsError::NumericParse { .. } => {
            "pass --format to pick the parser if the input was detected wrongly"
        }
        OddsError::OutOfRange { .. } => "decimal odds of 1.00 or less never pay out a profit",
    }
}

/// Render any application error as a graphical report.
#[must_use]
pub fn render(error: &AppError, input: &str, color: ColorChoice) -> String {
    let theme = match color {
        ColorChoice::Auto => GraphicalTheme::default(),
        ColorChoice::Always => GraphicalTheme::unicode(),
        ColorChoice::Never => GraphicalTheme::unicode_nocolor(),
    };
    let handler = GraphicalReportHandler::new_themed(theme).with_width(120);

    let mut rendered = String::new();
    let result = match error {
        AppError::Odds(odds_error) => {
            handler.render_report(&mut rendered, &InputError::new(input, odds_error))
        }
        AppError::Config(_) => handler.render_report(
            &mut rendered,
            &ConfigError::new(error.to_string())
                .with_help("check the [logging] and [display] sections of the config file"),
        ),
        other => handler.render_report(&mut rendered, &ConfigError::new(other.to_string())),
    };

    if result.is_err() {
        return format!("{error}\n");
    }
    rendered
}
