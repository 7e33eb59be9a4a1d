//! Error types for wall validation, layout generation, scheduling and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all wall planning operations
#[derive(Debug)]
pub enum WallError {
    /// A dimension is non-positive or below the minimum a wall can be built from
    InvalidDimension {
        /// Name of the offending dimension
        parameter: &'static str,
        /// Rejected value in millimetres
        value: f64,
        /// Explanation, including the minimum where one exists
        reason: String,
    },

    /// The wall cannot be built from whole bricks
    ///
    /// Each suggestion holds the nearest valid value below and above the
    /// requested one. Only the dimensions that are off carry a suggestion.
    NonModularWall {
        /// Nearest modular widths (below, above)
        width: Option<(f64, f64)>,
        /// Nearest modular heights (below, above)
        height: Option<(f64, f64)>,
    },

    /// Bond name is not one of the supported patterns
    UnsupportedBond {
        /// Name as supplied by the caller
        name: String,
    },

    /// A row generator ran out of units that fit the remaining space
    ///
    /// Indicates an internal invariant violation rather than bad input,
    /// since validated walls always close exactly.
    LayoutExhausted {
        /// Course index (0 is the top course)
        course: usize,
        /// Position where placement stopped
        x: f64,
        /// Space left to the right wall edge
        remaining: f64,
    },

    /// A scheduling window made no progress
    ScheduleStalled {
        /// Window iteration when this occurred
        iteration: usize,
        /// Bricks still unbuilt
        unbuilt: usize,
    },

    /// Failed to encode or save a rendered image
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

impl fmt::Display for WallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid dimension '{parameter}' = {value} mm: {reason}")
            }
            Self::NonModularWall { width, height } => {
                write!(
                    f,
                    "For given parameters, the wall cannot be built with whole bricks. \
                     Please change the following parameter(s): "
                )?;
                if let Some((below, above)) = width {
                    write!(f, "width (e.g., {below} or {above})")?;
                }
                if width.is_some() && height.is_some() {
                    write!(f, " and ")?;
                }
                if let Some((below, above)) = height {
                    write!(f, "height (e.g., {below} or {above})")?;
                }
                write!(f, ".")
            }
            Self::UnsupportedBond { name } => {
                write!(
                    f,
                    "Unsupported bond '{name}': only 'stretcher', 'english' and 'wild' are supported"
                )
            }
            Self::LayoutExhausted {
                course,
                x,
                remaining,
            } => {
                write!(
                    f,
                    "No brick fits course {course} at x = {x} mm ({remaining} mm remaining)"
                )
            }
            Self::ScheduleStalled { iteration, unbuilt } => {
                write!(
                    f,
                    "Stride window {iteration} built nothing with {unbuilt} bricks remaining"
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
        }
    }
}

impl std::error::Error for WallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for wall planning results
pub type Result<T> = std::result::Result<T, WallError>;

/// Create an invalid dimension error
pub fn invalid_dimension(
    parameter: &'static str,
    value: f64,
    reason: &impl ToString,
) -> WallError {
    WallError::InvalidDimension {
        parameter,
        value,
        reason: reason.to_string(),
    }
}

impl WallError {
    /// Whether the error stems from caller input rather than an internal defect
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension { .. } | Self::NonModularWall { .. } | Self::UnsupportedBond { .. }
        )
    }
}
