//! Error types and context management for reconstruction operations

use std::fmt;
use std::path::PathBuf;

/// Why the strip width could not be inferred from column statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthFailure {
    /// The strongest boundaries share no common factor above one
    DegenerateDivisor {
        /// Greatest common divisor of the probed boundaries
        divisor: usize,
        /// Boundary columns that were folded into the divisor, strongest first
        boundaries: Vec<usize>,
    },

    /// The image has fewer column boundaries than the probe depth requires
    InsufficientBoundaries {
        /// Boundaries needed for the requested probe depth
        required: usize,
        /// Boundaries the image actually has
        available: usize,
    },
}

impl fmt::Display for WidthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateDivisor {
                divisor,
                boundaries,
            } => {
                write!(
                    f,
                    "strongest boundaries {boundaries:?} have common divisor {divisor}"
                )
            }
            Self::InsufficientBoundaries {
                required,
                available,
            } => {
                write!(
                    f,
                    "{required} column boundaries required but only {available} available"
                )
            }
        }
    }
}

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum UnshredError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Column brightness normalizer was zero, so the difference has no signal
    ///
    /// Occurs for fully black columns and for images without rows
    DivisionUndefined {
        /// First column of the compared pair
        column_a: usize,
        /// Second column of the compared pair
        column_b: usize,
    },

    /// Strip width could not be inferred
    WidthDetectionFailed {
        /// Which part of the heuristic gave up
        reason: WidthFailure,
    },

    /// Partitioning produced fewer than two strips
    InvalidStripCount {
        /// Width of the source image in columns
        image_width: usize,
        /// Strip width used for partitioning
        strip_width: usize,
        /// Number of strips the partition would produce
        strip_count: usize,
    },

    /// Linearization had to accept cyclic neighbor links
    ///
    /// Only raised when strict reconstruction is requested, otherwise
    /// reported as a warning alongside the result
    DegradedReconstruction {
        /// Number of cycles that were broken open
        cycles: usize,
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

    /// Failed to save an image to disk
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
}

impl fmt::Display for UnshredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DivisionUndefined { column_a, column_b } => {
                write!(
                    f,
                    "Column difference undefined between columns {column_a} and {column_b}: no brightness signal"
                )
            }
            Self::WidthDetectionFailed { reason } => {
                write!(f, "Could not determine strip width: {reason}")
            }
            Self::InvalidStripCount {
                image_width,
                strip_width,
                strip_count,
            } => {
                write!(
                    f,
                    "Strip width {strip_width} yields {strip_count} strip(s) for an image {image_width} columns wide (need at least 2)"
                )
            }
            Self::DegradedReconstruction { cycles } => {
                write!(
                    f,
                    "Reconstruction degraded: {cycles} cyclic neighbor chain(s) had to be broken"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
        }
    }
}

impl std::error::Error for UnshredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, UnshredError>;

/// Placeholder used by the `From` conversions until a real path is known
const UNKNOWN_PATH: &str = "<unknown>";

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the failing operation was working on
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches I/O-originated errors with the file they concern
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the path context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<UnshredError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors created through `From` carry the placeholder path
            match &mut error {
                UnshredError::ImageLoad { path, .. } | UnshredError::ImageExport { path, .. } => {
                    if let Some(known) = &context.path {
                        if path.as_os_str() == UNKNOWN_PATH {
                            path.clone_from(known);
                        }
                    }
                }
                UnshredError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(known) = &context.path {
                        if path.as_os_str() == UNKNOWN_PATH {
                            path.clone_from(known);
                        }
                    }
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for UnshredError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for UnshredError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> UnshredError {
    UnshredError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
