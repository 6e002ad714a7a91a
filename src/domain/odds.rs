//! The canonical odds value and its conversions.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::error::OddsError;
use super::format::OddsFormat;
use super::fraction;

/// Divider used by [`Odds::to_fraction`].
pub const DEFAULT_DIVIDER: char = '/';

const PRIMARY_LABELS: [&str; 4] = ["Decimal", "Fraction", "US", "Implied Probability"];

const RECIPROCAL_LABELS: [&str; 4] = [
    "Reciprocal Decimal",
    "Reciprocal Fraction",
    "Reciprocal US",
    "Reciprocal Implied Probability",
];

/// A betting price stored as decimal odds.
///
/// The stored value is always finite and strictly greater than one, and its
/// [`reciprocal`](Self::reciprocal) is representable as well.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Odds {
    decimal: f64,
}

/// One labelled line of the conversion table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OddsRow {
    pub label: &'static str,
    pub value: String,
}

/// Every rendering of a single price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OddsSummary {
    pub decimal: String,
    pub fraction: String,
    pub us: String,
    pub implied_probability: String,
}

impl Odds {
    /// Wrap a canonical decimal-odds value.
    ///
    /// # Errors
    ///
    /// Returns [`OddsError::OutOfRange`] for NaN, infinities, values of one
    /// or less, and values so large that the reciprocal rounds to one.
    pub fn try_new(decimal: f64) -> Result<Self, OddsError> {
        let valid = decimal.is_finite() && decimal > 1.0 && reciprocal_of(decimal) > 1.0;
        if !valid {
            return Err(OddsError::OutOfRange { value: decimal });
        }
        Ok(Self { decimal })
    }

    /// Detect the format of `input` and parse it.
    ///
    /// # Errors
    ///
    /// Returns the detection error, the parser error, or
    /// [`OddsError::OutOfRange`] if the parsed value is not valid odds.
    ///
    /// # Examples
    ///
    /// ```
    /// use odds::domain::odds::Odds;
    ///
    /// let odds = Odds::parse("9/4").unwrap();
    /// assert_eq!(odds.to_decimal_string(), "3.25");
    /// assert_eq!(odds.to_us_string(), "+225");
    /// ```
    pub fn parse(input: &str) -> Result<Self, OddsError> {
        let format = OddsFormat::detect(input)?;
        Self::parse_as(input, format)
    }

    /// Parse `input` with a known format, skipping detection.
    ///
    /// # Errors
    ///
    /// Returns the parser error or [`OddsError::OutOfRange`].
    pub fn parse_as(input: &str, format: OddsFormat) -> Result<Self, OddsError> {
        let decimal = format.parse(input)?;
        debug!(input = input.trim(), %format, decimal, "parsed odds");
        Self::try_new(decimal)
    }

    /// Canonical decimal odds.
    #[must_use]
    pub const fn decimal(self) -> f64 {
        self.decimal
    }

    /// Decimal odds with two fractional digits.
    #[must_use]
    pub fn to_decimal_string(self) -> String {
        format!("{:.2}", self.decimal)
    }

    /// Reduced fractional odds, e.g. `9/4`.
    #[must_use]
    pub fn to_fraction(self) -> String {
        self.to_fraction_with(DEFAULT_DIVIDER)
    }

    /// Reduced fractional odds with a custom divider.
    #[must_use]
    pub fn to_fraction_with(self, divider: char) -> String {
        fraction::reduce(self.decimal - 1.0, divider)
    }

    /// Moneyline value. Even money and longer are positive.
    #[must_use]
    pub fn to_us(self) -> f64 {
        let profit = self.decimal - 1.0;
        if self.decimal >= 2.0 {
            profit * 100.0
        } else {
            -100.0 / profit
        }
    }

    /// Whole-number moneyline with an explicit `+` for positive prices.
    #[must_use]
    pub fn to_us_string(self) -> String {
        let moneyline = self.to_us().round() as i64;
        if moneyline >= 0 {
            format!("+{moneyline}")
        } else {
            moneyline.to_string()
        }
    }

    /// Break-even win probability, in `(0, 1)`.
    #[must_use]
    pub fn implied_probability(self) -> f64 {
        1.0 / self.decimal
    }

    /// Implied probability as a percentage, e.g. `30.77%`.
    #[must_use]
    pub fn to_implied_probability_string(self) -> String {
        format!("{:.2}%", self.implied_probability() * 100.0)
    }

    /// Odds on the other side of a two-outcome market.
    ///
    /// Applying this twice returns the original price, up to float error.
    /// The result is meaningless for markets with more than two outcomes.
    #[must_use]
    pub fn reciprocal(self) -> Self {
        Self {
            decimal: reciprocal_of(self.decimal),
        }
    }

    /// All renderings of this price.
    #[must_use]
    pub fn summary(self) -> OddsSummary {
        self.summary_with(DEFAULT_DIVIDER)
    }

    /// All renderings of this price, with a custom fraction divider.
    #[must_use]
    pub fn summary_with(self, divider: char) -> OddsSummary {
        OddsSummary {
            decimal: self.to_decimal_string(),
            fraction: self.to_fraction_with(divider),
            us: self.to_us_string(),
            implied_probability: self.to_implied_probability_string(),
        }
    }

    /// The eight display rows: this price, then its reciprocal.
    #[must_use]
    pub fn rows(self) -> Vec<OddsRow> {
        self.rows_with(DEFAULT_DIVIDER)
    }

    /// The eight display rows with a custom fraction divider.
    #[must_use]
    pub fn rows_with(self, divider: char) -> Vec<OddsRow> {
        let primary = self.summary_with(divider);
        let reciprocal = self.reciprocal().summary_with(divider);

        PRIMARY_LABELS
            .into_iter()
            .zip(primary.into_values())
            .chain(RECIPROCAL_LABELS.into_iter().zip(reciprocal.into_values()))
            .map(|(label, value)| OddsRow { label, value })
            .collect()
    }
}

impl OddsSummary {
    fn into_values(self) -> [String; 4] {
        [self.decimal, self.fraction, self.us, self.implied_probability]
    }
}

fn reciprocal_of(decimal: f64) -> f64 {
    1.0 / (decimal - 1.0) + 1.0
}

impl FromStr for Odds {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.decimal)
    }
}
