//! Path utilities for odds.
//!
//! User settings live under `~/.odds/`:
//! - `~/.odds/config.toml` - logging and display configuration

use std::path::PathBuf;

/// Returns the odds home directory (`~/.odds/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".odds")
}

/// Returns the default config file path (`~/.odds/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
