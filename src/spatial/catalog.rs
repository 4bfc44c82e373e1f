//! Piece catalog mapping selected letters to their distinct orientations
//!
//! For each selected letter, in alphabetical order, the catalog holds the
//! closure of the canonical shape under rotation and reflection, deduplicated
//! by normalized mask equality. Letters receive identity indices in catalog
//! order and every orientation carries its owning identity.

use std::collections::HashSet;

use crate::io::configuration::PIECE_LETTERS;
use crate::io::error::{Result, SolverError};
use crate::io::resources::ShapeLibrary;
use crate::spatial::shape::Shape;

/// A single placed-piece geometry together with its piece identity
#[derive(Clone, Debug)]
pub struct Orientation {
    /// Normalized shape of this orientation
    pub shape: Shape,
    /// Identity index of the letter this orientation belongs to
    pub piece: usize,
}

/// Catalog of selected pieces and all of their distinct orientations
#[derive(Clone, Debug)]
pub struct PieceCatalog {
    names: Vec<char>,
    orientations: Vec<Orientation>,
}

impl PieceCatalog {
    /// Build the catalog for a letter selection from a loaded shape library
    ///
    /// The selection is sorted and deduplicated, so identity indices always
    /// follow alphabetical letter order regardless of input order. An empty
    /// selection stands for all twelve letters.
    ///
    /// # Errors
    ///
    /// Returns an error if a selected letter has no shape in the library.
    pub fn from_library(library: &ShapeLibrary, selection: &[char]) -> Result<Self> {
        let mut letters = if selection.is_empty() {
            PIECE_LETTERS.to_vec()
        } else {
            selection.to_vec()
        };
        letters.sort_unstable();
        letters.dedup();

        let mut names = Vec::with_capacity(letters.len());
        let mut orientations = Vec::new();

        for letter in letters {
            let canonical = library.shape(letter).ok_or(SolverError::InvalidShapeData {
                letter,
                reason: "letter has no shape in the library".to_string(),
            })?;

            let piece = names.len();
            names.push(letter);
            for shape in unique_orientations(canonical) {
                orientations.push(Orientation { shape, piece });
            }
        }

        Ok(Self {
            names,
            orientations,
        })
    }

    /// Number of selected pieces
    pub fn piece_count(&self) -> usize {
        self.names.len()
    }

    /// Total number of distinct orientations across all pieces
    pub fn orientation_count(&self) -> usize {
        self.orientations.len()
    }

    /// All orientations in catalog order
    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }

    /// Letter for a piece identity index
    pub fn name(&self, piece: usize) -> Option<char> {
        self.names.get(piece).copied()
    }

    /// Selected letters in identity order
    pub fn names(&self) -> &[char] {
        &self.names
    }
}

/// All distinct shapes reachable from a canonical shape by rotation and
/// reflection
///
/// Enumerates the base shape, its three further rotations, then the
/// reflection of each, and deduplicates while preserving first-seen order.
/// The result is closed under both transformations because the eight
/// candidates exhaust the dihedral symmetries of the square.
pub fn unique_orientations(canonical: &Shape) -> Vec<Shape> {
    let mut transforms = vec![canonical.clone()];
    let mut current = canonical.clone();
    for _ in 0..3 {
        current = current.rotated();
        transforms.push(current.clone());
    }

    let reflections: Vec<Shape> = transforms.iter().map(Shape::reflected).collect();
    transforms.extend(reflections);

    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for shape in transforms {
        if seen.insert(shape.clone()) {
            unique.push(shape);
        }
    }
    unique
}
