//! Error types and context management for grid operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::Area;

/// Main error type for all grid operations
///
/// Every variant is raised before any mutation happens, so a grid that
/// produced one of these is left exactly as it was before the call.
#[derive(Debug)]
pub enum GridError {
    /// An operation was given a number of arguments it has no signature for
    InvalidArgumentCount {
        /// Name of the operation that rejected the call
        operation: &'static str,
        /// Accepted argument counts
        expected: &'static [usize],
        /// Number of arguments actually supplied
        found: usize,
    },

    /// An argument could not be read as the type the operation expects
    InvalidArgumentType {
        /// Name of the operation that rejected the argument
        operation: &'static str,
        /// Offending argument text
        value: String,
        /// Human readable name of the expected type
        expected: &'static str,
    },

    /// A requested or resulting width/height is not strictly positive
    InvalidDimensions {
        /// Name of the operation that would have produced the dimensions
        operation: &'static str,
        /// Requested width
        width: i64,
        /// Requested height
        height: i64,
    },

    /// A coordinate or rectangle falls outside the grid
    ///
    /// Single coordinates are reported as a 1x1 area.
    OutOfBounds {
        /// Name of the operation that performed the bounds check
        operation: &'static str,
        /// The area that failed the check
        area: Area,
    },

    /// A well-typed value that is still meaningless for its parameter
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a grid as an image
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

impl GridError {
    /// Name of the grid operation this error was raised by, if any
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgumentCount { operation, .. }
            | Self::InvalidArgumentType { operation, .. }
            | Self::InvalidDimensions { operation, .. }
            | Self::OutOfBounds { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgumentCount {
                operation,
                expected,
                found,
            } => {
                let accepted = expected
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" or ");
                write!(
                    f,
                    "Wrong number of arguments for {operation}: got {found}, expected {accepted}"
                )
            }
            Self::InvalidArgumentType {
                operation,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid argument for {operation}: '{value}' is not a {expected}"
                )
            }
            Self::InvalidDimensions {
                operation,
                width,
                height,
            } => {
                write!(
                    f,
                    "Invalid dimensions in {operation}: can't create grid with dimensions ({width}, {height})"
                )
            }
            Self::OutOfBounds { operation, area } => {
                if area.width == 1 && area.height == 1 {
                    write!(
                        f,
                        "Out of bounds in {operation}: index ({}, {})",
                        area.x, area.y
                    )
                } else {
                    write!(
                        f,
                        "Out of bounds in {operation}: rectangular area ({}, {}, {}, {})",
                        area.x, area.y, area.width, area.height
                    )
                }
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Renames the operation a propagated error is attributed to
///
/// Composite transforms delegate to simpler ones; callers should see the
/// operation they actually invoked in the error message.
pub trait WithContext<T> {
    /// Attribute the error, if any, to `operation`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation name replaced
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GridError>,
{
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                GridError::InvalidArgumentCount { operation: op, .. }
                | GridError::InvalidArgumentType { operation: op, .. }
                | GridError::InvalidDimensions { operation: op, .. }
                | GridError::OutOfBounds { operation: op, .. } => *op = operation,
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for GridError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
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
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out of bounds error for a single coordinate
pub const fn out_of_bounds(operation: &'static str, x: i32, y: i32) -> GridError {
    GridError::OutOfBounds {
        operation,
        area: Area::point(x, y),
    }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(operation: &'static str, width: i64, height: i64) -> GridError {
    GridError::InvalidDimensions {
        operation,
        width,
        height,
    }
}
