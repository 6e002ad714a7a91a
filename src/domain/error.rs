//! Validation errors for odds parsing and construction.
//!
//! Every parser in [`crate::domain::format`] and the [`Odds::try_new`]
//! constructor return these instead of falling back to a placeholder value.
//!
//! # Examples
//!
//! ```
//! use odds::domain::error::OddsError;
//! use odds::domain::odds::Odds;
//!
//! let result = Odds::parse("1");
//! assert!(matches!(result, Err(OddsError::AmbiguousFormat { .. })));
//! ```
//!
//! [`Odds::try_new`]: crate::domain::odds::Odds::try_new

use thiserror::Error;

/// Errors raised while turning text into a valid [`Odds`](crate::domain::odds::Odds).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OddsError {
    /// The input matches none of the recognized formats.
    #[error("cannot determine odds format of '{input}': {reason}")]
    AmbiguousFormat {
        /// The rejected input.
        input: String,
        /// Why detection failed.
        reason: &'static str,
    },

    /// Fractional input without a usable numerator/denominator pair.
    #[error("invalid fraction '{input}': {reason}")]
    InvalidFraction {
        /// The rejected input.
        input: String,
        /// Which part of the fraction is unusable.
        reason: &'static str,
    },

    /// A moneyline of zero.
    #[error("invalid US odds '{input}': moneyline cannot be zero")]
    InvalidUsOdds {
        /// The rejected input.
        input: String,
    },

    /// Text expected to be a finite number is not.
    #[error("'{input}' is not a finite number")]
    NumericParse {
        /// The rejected input.
        input: String,
    },

    /// A canonical decimal value outside the valid odds range.
    #[error("decimal odds must be finite and greater than 1, got {value}")]
    OutOfRange {
        /// The rejected canonical value.
        value: f64,
    },
}
