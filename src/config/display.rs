//! Output rendering settings.

use serde::Deserialize;

use crate::domain::format::DIVIDERS;
use crate::domain::odds::DEFAULT_DIVIDER;
use crate::error::{ConfigError, Result};

/// How converted odds are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Separator between numerator and denominator in fractional odds.
    ///
    /// Restricted to the dividers the fraction parser accepts so that
    /// printed fractions can be fed back in.
    pub fraction_divider: char,
}

impl DisplayConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if !DIVIDERS.contains(&self.fraction_divider) {
            return Err(ConfigError::InvalidValue {
                field: "fraction_divider",
                reason: format!("must be '/' or '-', got '{}'", self.fraction_divider),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fraction_divider: DEFAULT_DIVIDER,
        }
    }
}
