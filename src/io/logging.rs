//! Logger bootstrap for the command-line tool
//!
//! The library only emits through the `log` facade; the binary decides where
//! records go. Records are written to stderr so progress bars on the same
//! terminal stay readable.

use flexi_logger::{Logger, LoggerHandle};

use crate::io::error::{Result, invalid_parameter};

/// Level names accepted on the command line
pub const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validate and lowercase a level name
///
/// # Errors
///
/// Returns an invalid parameter error if the name is not one of [`LEVELS`]
pub fn normalize_level(level: &str) -> Result<&'static str> {
    let lowered = level.trim().to_ascii_lowercase();
    LEVELS
        .iter()
        .find(|&&known| known == lowered)
        .copied()
        .ok_or_else(|| {
            invalid_parameter(
                "log-level",
                &level,
                &format!("expected one of {}", LEVELS.join(", ")),
            )
        })
}

/// Start logging to stderr at the given level
///
/// The returned handle must be kept alive for as long as records should be
/// written.
///
/// # Errors
///
/// Returns an error if the level is unknown or the logger cannot start
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;
    let handle = Logger::try_with_str(level)?.log_to_stderr().start()?;
    log::debug!("logging started at level {level}");
    Ok(handle)
}
