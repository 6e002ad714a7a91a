//! Configuration loaded from `~/.odds/config.toml` or `--config`.

pub mod display;
pub mod logging;
pub mod settings;

pub use display::DisplayConfig;
pub use logging::LoggingConfig;
pub use settings::Config;
