//! Odds - convert betting odds between decimal, fractional and US formats.
//!
//! A single price is parsed from text, normalized to decimal odds, and
//! rendered back out in every format together with its implied probability
//! and the price of the opposite side of a two-outcome market.
//!
//! # Modules
//!
//! - [`domain`] - Format detection, parsers, the [`Odds`](domain::Odds) value and fraction reduction
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line surface, output and diagnostics
//!
//! # Example
//!
//! ```
//! use odds::domain::{Odds, OddsFormat};
//!
//! assert_eq!(OddsFormat::detect("-110").unwrap(), OddsFormat::Us);
//!
//! let odds = Odds::parse("1/2").unwrap();
//! assert_eq!(odds.to_us_string(), "-200");
//! assert_eq!(odds.reciprocal().to_fraction(), "2/1");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
