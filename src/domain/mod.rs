//! Odds domain: format detection, parsing, and conversion.
//!
//! - [`format`] - [`OddsFormat`] detection and the per-format parsers
//! - [`odds`] - the [`Odds`] value object and its renderings
//! - [`fraction`] - fraction reduction used by [`Odds::to_fraction`]
//! - [`error`] - [`OddsError`] taxonomy

pub mod error;
pub mod format;
pub mod fraction;
pub mod odds;

pub use error::OddsError;
pub use format::OddsFormat;
pub use odds::{Odds, OddsRow, OddsSummary};
