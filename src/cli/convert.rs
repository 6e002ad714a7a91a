//! Handler for converting a single odds value.

use std::io::Write;

use serde_json::json;
use tabled::settings::object::Columns;
use tabled::settings::style::{HorizontalLine, Style};
use tabled::settings::Alignment;
use tabled::{Table, Tabled};
use tracing::info;

use super::output::Output;
use crate::domain::format::OddsFormat;
use crate::domain::odds::{Odds, OddsRow};
use crate::error::Result;

/// Row index of the line separating the price from its reciprocal.
const RECIPROCAL_SEPARATOR: usize = 5;

/// A parsed conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: String,
    pub format: OddsFormat,
    pub odds: Odds,
}

impl Conversion {
    /// Parse `input`, detecting the format unless `forced` is given.
    ///
    /// # Errors
    ///
    /// Returns the detection or parse error for `input`.
    pub fn parse(input: &str, forced: Option<OddsFormat>) -> Result<Self> {
        let input = input.trim();
        let format = match forced {
            Some(format) => format,
            None => OddsFormat::detect(input)?,
        };
        let odds = Odds::parse_as(input, format)?;

        info!(input, %format, decimal = odds.decimal(), "converted odds");
        Ok(Self {
            input: input.to_string(),
            format,
            odds,
        })
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Type")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<OddsRow> for TableRow {
    fn from(row: OddsRow) -> Self {
        Self {
            label: row.label,
            value: row.value,
        }
    }
}

/// Render the eight conversion rows as a two-column table.
#[must_use]
pub fn render_table(rows: Vec<OddsRow>) -> String {
    let style = Style::modern()
        .horizontals([
            (1, HorizontalLine::inherit(Style::modern())),
            (RECIPROCAL_SEPARATOR, HorizontalLine::inherit(Style::modern())),
        ])
        .remove_horizontal();

    let mut table = Table::new(rows.into_iter().map(TableRow::from));
    table
        .with(style)
        .modify(Columns::first(), Alignment::left())
        .modify(Columns::last(), Alignment::right());
    table.to_string()
}

/// Print `conversion` as a table, or as one JSON document in `--json` mode.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print<W: Write, E: Write>(
    conversion: &Conversion,
    divider: char,
    output: &mut Output<W, E>,
) -> Result<()> {
    let odds = conversion.odds;

    if output.is_json() {
        output.json_output(&json!({
            "input": conversion.input,
            "format": conversion.format,
            "odds": odds.summary_with(divider),
            "reciprocal": odds.reciprocal().summary_with(divider),
        }))?;
        return Ok(());
    }

    if output.verbosity() > 0 {
        output.field("Input", &conversion.input)?;
        output.field("Format", conversion.format)?;
    }
    output.block(&render_table(odds.rows_with(divider)))?;
    Ok(())
}
