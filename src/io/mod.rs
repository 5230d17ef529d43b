//! Host-side input/output: the command-line tool and its support code

/// Command-line interface and batch file processing
pub mod cli;
/// Storage constants and runtime defaults
pub mod configuration;
/// Error types for fallible host operations
pub mod error;
/// Stroke image loading and PNG rendering
pub mod image;
/// Logger bootstrap
pub mod logging;
/// Multi-file progress display
pub mod progress;
