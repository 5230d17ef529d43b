//! Error types for the host-facing stroke tool
//!
//! Brush and resolver operations are infallible; only loading stroke images,
//! writing renders and setting up the process can fail.

use std::fmt;
use std::path::PathBuf;

/// Main error type for host operations
#[derive(Debug)]
pub enum TileError {
    /// Failed to load a stroke image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Stroke image doesn't meet the tool's requirements
    InvalidStrokeImage {
        /// Path to the image file
        path: PathBuf,
        /// Description of what's wrong with the image
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Nothing was painted, so there is nothing to render
    EmptyRender {
        /// Layer that was rendered
        layer: i32,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Logger backend could not be started
    Logging {
        /// Underlying logger error
        source: flexi_logger::FlexiLoggerError,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidStrokeImage { path, reason } => {
                write!(f, "Invalid stroke image '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyRender { layer } => {
                write!(f, "Nothing to render: layer {layer} has no occupied cells")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { source } => write!(f, "Failed to start logging: {source}"),
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for host results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for TileError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
