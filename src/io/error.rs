//! Error types and context management for mask computations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::CoordinateAxis;

/// Main error type for all masking operations
#[derive(Debug)]
pub enum MaskError {
    /// A coordinate axis has no samples
    EmptyGrid {
        /// Axis without samples
        axis: CoordinateAxis,
    },

    /// A coordinate axis is not finite or not strictly ascending
    InvalidCoordinates {
        /// Offending axis
        axis: CoordinateAxis,
        /// Index of the first offending sample
        index: usize,
        /// Explanation of the violation
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

    /// A region predicate could not be evaluated
    ///
    /// Raised by `Region` implementations, never by the masker itself.
    RegionPredicate {
        /// Predicate that failed (`intersects`, `contains`, `contains_point`)
        predicate: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// An outline ring cannot form a polygon
    InvalidOutline {
        /// Number of distinct vertices found
        vertices: usize,
    },

    /// Field and mask dimensions disagree
    ShapeMismatch {
        /// Mask shape (rows, cols)
        expected: (usize, usize),
        /// Field shape (rows, cols)
        found: (usize, usize),
    },

    /// Boundary file could not be read
    BoundaryLoad {
        /// Path to the boundary file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Boundary file is not valid `GeoJSON`
    BoundaryParse {
        /// Path to the boundary file
        path: PathBuf,
        /// Description of the parse failure
        reason: String,
    },

    /// No polygonal geometry remained after feature selection
    NoRegion {
        /// Path to the boundary file
        path: PathBuf,
    },

    /// Failed to save a mask image to disk
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

    /// Internal bookkeeping produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { axis } => {
                write!(f, "Empty grid: the {axis} axis has no samples")
            }
            Self::InvalidCoordinates {
                axis,
                index,
                reason,
            } => {
                write!(f, "Invalid {axis} coordinate at index {index}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RegionPredicate { predicate, reason } => {
                write!(f, "Region predicate '{predicate}' failed: {reason}")
            }
            Self::InvalidOutline { vertices } => {
                write!(
                    f,
                    "Outline with {vertices} distinct vertices cannot form a polygon (need at least 3)"
                )
            }
            Self::ShapeMismatch { expected, found } => {
                write!(
                    f,
                    "Field shape {}x{} does not match mask shape {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::BoundaryLoad { path, source } => {
                write!(f, "Failed to read boundary '{}': {source}", path.display())
            }
            Self::BoundaryParse { path, reason } => {
                write!(f, "Invalid boundary '{}': {reason}", path.display())
            }
            Self::NoRegion { path } => {
                write!(
                    f,
                    "No polygonal region selected from boundary '{}'",
                    path.display()
                )
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::BoundaryLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mask results
pub type Result<T> = std::result::Result<T, MaskError>;

impl From<std::io::Error> for MaskError {
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
) -> MaskError {
    MaskError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MaskError {
    MaskError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a region predicate error
pub fn predicate_error(predicate: &'static str, reason: &impl ToString) -> MaskError {
    MaskError::RegionPredicate {
        predicate,
        reason: reason.to_string(),
    }
}
