// src/internal/logger/global.rs

//! Process-wide logger used by the logging macros.
//!
//! Install one early in `main` with [`set_global`]. If nothing was installed,
//! the first call to [`global`] installs `Logger::default()` (stdout, show
//! everything, color on). Once set, the logger cannot be replaced.

use std::sync::OnceLock;

use super::logger::Logger;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger.
///
/// Hands the logger back if one is already installed.
pub fn set_global(logger: Logger) -> Result<(), Logger> {
    GLOBAL_LOGGER.set(logger)
}

pub fn global() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::default)
}
