//! Odds format detection and format-specific parsers.
//!
//! Each parser turns text into a canonical decimal-odds number. Range
//! checking is left to [`Odds::try_new`](crate::domain::odds::Odds::try_new).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::error::OddsError;

/// Fraction separators, in the order they are tried.
pub const DIVIDERS: [char; 2] = ['/', '-'];

/// Textual encodings an odds value can arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    /// European decimal odds, e.g. `3.25`.
    Decimal,
    /// UK fractional odds, e.g. `9/4` or `9-4`.
    Fraction,
    /// American moneyline odds, e.g. `+225` or `-200`.
    Us,
}

impl OddsFormat {
    /// Lowercase name used in logs and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Fraction => "fraction",
            Self::Us => "us",
        }
    }

    /// Classify `input` by its syntax.
    ///
    /// A leading sign always means US odds, so `-5` is a moneyline even
    /// though `-` is also a fraction divider. Otherwise any divider means a
    /// fraction, and the remainder must be a decimal strictly above one.
    ///
    /// # Errors
    ///
    /// Returns [`OddsError::AmbiguousFormat`] when the input is not a number
    /// or is a decimal of one or less.
    pub fn detect(input: &str) -> Result<Self, OddsError> {
        let input = input.trim();

        let format = if input.starts_with(['+', '-']) {
            Self::Us
        } else if input.contains(DIVIDERS) {
            Self::Fraction
        } else {
            match parse_number(input) {
                Ok(value) if value > 1.0 => Self::Decimal,
                Ok(_) => {
                    return Err(OddsError::AmbiguousFormat {
                        input: input.to_string(),
                        reason: "decimal odds must be greater than 1",
                    })
                }
                Err(_) => {
                    return Err(OddsError::AmbiguousFormat {
                        input: input.to_string(),
                        reason: "not a number",
                    })
                }
            }
        };

        debug!(input, format = format.as_str(), "detected odds format");
        Ok(format)
    }

    /// Parse `input` as this format into canonical decimal odds.
    ///
    /// # Errors
    ///
    /// Returns the error of the matching format-specific parser.
    pub fn parse(self, input: &str) -> Result<f64, OddsError> {
        let input = input.trim();
        match self {
            Self::Decimal => parse_decimal(input),
            Self::Fraction => parse_fraction(input),
            Self::Us => parse_us(input),
        }
    }
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a finite float. `inf` and `NaN` are rejected.
fn parse_number(input: &str) -> Result<f64, OddsError> {
    f64::from_str(input)
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| OddsError::NumericParse {
            input: input.to_string(),
        })
}

/// Decimal odds are already canonical.
///
/// # Errors
///
/// Returns [`OddsError::NumericParse`] if `input` is not a finite number.
pub fn parse_decimal(input: &str) -> Result<f64, OddsError> {
    parse_number(input)
}

/// Fractional odds `a/b` (or `a-b`) become `a / b + 1`.
///
/// The first `/` wins; `-` is only used as a divider when no `/` exists.
///
/// # Errors
///
/// Returns [`OddsError::InvalidFraction`] if there is no divider, either
/// side is not a number, or the denominator is zero.
pub fn parse_fraction(input: &str) -> Result<f64, OddsError> {
    let invalid = |reason| OddsError::InvalidFraction {
        input: input.to_string(),
        reason,
    };

    let (numerator, denominator) = DIVIDERS
        .iter()
        .find_map(|divider| input.split_once(*divider))
        .ok_or_else(|| invalid("missing '/' or '-' divider"))?;

    let numerator =
        parse_number(numerator.trim()).map_err(|_| invalid("numerator is not a number"))?;
    let denominator =
        parse_number(denominator.trim()).map_err(|_| invalid("denominator is not a number"))?;
    if denominator == 0.0 {
        return Err(invalid("denominator cannot be zero"));
    }

    Ok(numerator / denominator + 1.0)
}

/// Moneyline odds: `+v` becomes `1 + v/100`, `-v` becomes `1 + 100/v`.
///
/// # Errors
///
/// Returns [`OddsError::NumericParse`] if `input` is not a number and
/// [`OddsError::InvalidUsOdds`] if it is zero.
pub fn parse_us(input: &str) -> Result<f64, OddsError> {
    let value = parse_number(input)?;
    if value > 0.0 {
        Ok(1.0 + value / 100.0)
    } else if value < 0.0 {
        Ok(1.0 - 100.0 / value)
    } else {
        Err(OddsError::InvalidUsOdds {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn detects_decimal() {
        assert_eq!(OddsFormat::detect("1.5"), Ok(OddsFormat::Decimal));
        assert_eq!(OddsFormat::detect("  7 "), Ok(OddsFormat::Decimal));
    }

    #[test]
    fn detects_us_by_leading_sign() {
        assert_eq!(OddsFormat::detect("+100"), Ok(OddsFormat::Us));
        assert_eq!(OddsFormat::detect("-110"), Ok(OddsFormat::Us));
    }

    #[test]
    fn leading_hyphen_beats_divider() {
        assert_eq!(OddsFormat::detect("-5-2"), Ok(OddsFormat::Us));
    }

    #[test]
    fn detects_fraction_by_divider() {
        assert_eq!(OddsFormat::detect("9/4"), Ok(OddsFormat::Fraction));
        assert_eq!(OddsFormat::detect("5-2"), Ok(OddsFormat::Fraction));
    }

    #[test]
    fn rejects_decimal_of_one_or_less() {
        let err = OddsFormat::detect("1").unwrap_err();
        assert!(matches!(
            err,
            OddsError::AmbiguousFormat {
                reason: "decimal odds must be greater than 1",
                ..
            }
        ));
        assert!(OddsFormat::detect("0.75").is_err());
    }

    #[test]
    fn rejects_non_numeric_input() {
        for input in ["abc", "", "inf", "NaN"] {
            let err = OddsFormat::detect(input).unwrap_err();
            assert!(
                matches!(err, OddsError::AmbiguousFormat { reason: "not a number", .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn parses_decimal() {
        assert_close(parse_decimal("3.25").unwrap(), 3.25);
        assert_eq!(
            parse_decimal("x"),
            Err(OddsError::NumericParse { input: "x".into() })
        );
    }

    #[test]
    fn parses_fraction_with_either_divider() {
        assert_close(parse_fraction("1/2").unwrap(), 1.5);
        assert_close(parse_fraction("9/4").unwrap(), 3.25);
        assert_close(parse_fraction("5-2").unwrap(), 3.5);
        assert_close(parse_fraction("100/30").unwrap(), 1.0 + 100.0 / 30.0);
    }

    #[test]
    fn fraction_requires_divider() {
        assert!(matches!(
            parse_fraction("94"),
            Err(OddsError::InvalidFraction { .. })
        ));
    }

    #[test]
    fn fraction_sides_must_be_numbers() {
        assert!(matches!(
            parse_fraction("a/4"),
            Err(OddsError::InvalidFraction {
                reason: "numerator is not a number",
                ..
            })
        ));
        assert!(matches!(
            parse_fraction("9/"),
            Err(OddsError::InvalidFraction {
                reason: "denominator is not a number",
                ..
            })
        ));
        assert!(matches!(
            parse_fraction("1/2/3"),
            Err(OddsError::InvalidFraction { .. })
        ));
    }

    #[test]
    fn fraction_rejects_zero_denominator() {
        assert!(matches!(
            parse_fraction("5/0"),
            Err(OddsError::InvalidFraction {
                reason: "denominator cannot be zero",
                ..
            })
        ));
    }

    #[test]
    fn parses_us_positive_and_negative() {
        assert_close(parse_us("+225").unwrap(), 3.25);
        assert_close(parse_us("-200").unwrap(), 1.5);
        assert_close(parse_us("+100").unwrap(), 2.0);
        assert_close(parse_us("-100").unwrap(), 2.0);
    }

    #[test]
    fn us_rejects_zero() {
        for input in ["0", "+0", "-0"] {
            assert!(matches!(parse_us(input), Err(OddsError::InvalidUsOdds { .. })));
        }
    }

    #[test]
    fn us_rejects_garbage() {
        assert!(matches!(
            parse_us("+abc"),
            Err(OddsError::NumericParse { .. })
        ));
    }

    #[test]
    fn format_parse_dispatches() {
        assert_close(OddsFormat::Fraction.parse(" 1/2 ").unwrap(), 1.5);
        assert_close(OddsFormat::Us.parse("-200").unwrap(), 1.5);
        assert_close(OddsFormat::Decimal.parse("1.5").unwrap(), 1.5);
    }
}
