//! Error types and context helpers for solver operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Failed to read a shape resource file from the filesystem
    ShapeLoad {
        /// Path to the shape file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Shape resource bytes do not describe a valid pentomino
    InvalidShapeData {
        /// Letter the shape belongs to, `'?'` while still unknown
        letter: char,
        /// Description of what is wrong with the data
        reason: String,
    },

    /// A cell index was requested outside the board or at an inactive cell
    InvalidCellPosition {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Board dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// A chosen placement painted outside the board during rendering
    ///
    /// Placements come from legality-checked matrix rows, so reaching this
    /// means the matrix or the payload table is corrupt.
    PlacementOutOfBounds {
        /// Offending row
        row: usize,
        /// Offending column
        col: usize,
        /// Board dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Solver parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// An internal computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeLoad { path, source } => {
                write!(f, "Failed to load shape '{}': {source}", path.display())
            }
            Self::InvalidShapeData { letter, reason } => {
                write!(f, "Invalid shape data for piece '{letter}': {reason}")
            }
            Self::InvalidCellPosition {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) is not an active board cell (board size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::PlacementOutOfBounds {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Placement painted outside the board at ({row}, {col}) (board size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ShapeLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Enriches shape errors with the letter being processed
///
/// Shape validation runs before the owning letter is known, so loaders
/// attach it afterwards.
pub trait WithContext<T> {
    /// Attach a piece letter to any shape-data error in the result
    ///
    /// # Errors
    ///
    /// Propagates the original error with the letter context applied
    fn with_letter(self, letter: char) -> Result<T>;
}

impl<T> WithContext<T> for Result<T> {
    fn with_letter(self, letter: char) -> Result<T> {
        self.map_err(|mut error| {
            if let SolverError::InvalidShapeData { letter: slot, .. } = &mut error {
                *slot = letter;
            }
            error
        })
    }
}

impl From<std::io::Error> for SolverError {
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
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SolverError {
    SolverError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
