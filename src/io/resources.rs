//! Binary shape resource loading and validation
//!
//! Each of the twelve letters has a resource file whose bytes are the
//! canonical row masks of that letter's shape, top row first. A zero byte
//! terminates the shape early, allowing shapes of fewer than five rows.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::configuration::{PIECE_LETTERS, SHAPE_FILE_EXTENSION, SHAPE_FILE_PREFIX};
use crate::io::error::{Result, SolverError, WithContext};
use crate::spatial::shape::{MAX_SHAPE_ROWS, Shape};

/// Canonical shapes for all twelve letters, loaded once up front
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    shapes: BTreeMap<char, Shape>,
}

impl ShapeLibrary {
    /// Load every letter's shape file from a resource directory
    ///
    /// Files are read in alphabetical letter order.
    ///
    /// # Errors
    ///
    /// Returns an error when a file is missing or unreadable, or when its
    /// bytes fail pentomino validation.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut shapes = BTreeMap::new();
        for &letter in &PIECE_LETTERS {
            let path = shape_path(data_dir, letter);
            let bytes = fs::read(&path).map_err(|source| SolverError::ShapeLoad {
                path: path.clone(),
                source,
            })?;
            let shape = parse_shape(&bytes).with_letter(letter)?;
            shapes.insert(letter, shape);
        }
        Ok(Self { shapes })
    }

    /// Canonical shape for a letter, if the letter is known
    pub fn shape(&self, letter: char) -> Option<&Shape> {
        self.shapes.get(&letter)
    }

    /// Number of loaded shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the library holds no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Resource file path for a letter within a data directory
pub fn shape_path(data_dir: &Path, letter: char) -> PathBuf {
    data_dir.join(format!(
        "{SHAPE_FILE_PREFIX}{}.{SHAPE_FILE_EXTENSION}",
        letter.to_ascii_lowercase()
    ))
}

/// Parse raw resource bytes into a validated shape
///
/// Reads row masks until a terminating zero byte or end of input, with at
/// most five rows.
///
/// # Errors
///
/// Returns an error when the stream holds more than five non-zero rows or
/// when the masks fail shape validation; the letter on the error is a
/// placeholder for the caller to fill in.
pub fn parse_shape(bytes: &[u8]) -> Result<Shape> {
    let rows: Vec<u8> = bytes
        .iter()
        .copied()
        .take_while(|&mask| mask != 0)
        .collect();

    if rows.len() > MAX_SHAPE_ROWS {
        return Err(SolverError::InvalidShapeData {
            letter: '?',
            reason: format!(
                "resource holds {} rows, at most {MAX_SHAPE_ROWS} are allowed",
                rows.len()
            ),
        });
    }

    Shape::from_rows(rows)
}
