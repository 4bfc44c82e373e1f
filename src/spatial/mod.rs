//! Spatial data structures for piece geometry and board layout
//!
//! This module contains the geometric half of the solver:
//! - Bit-grid shape representation with rotation and reflection
//! - Board cell map and placement legality
//! - Orientation catalog for a piece selection

/// Rectangular board with active-cell indexing
pub mod board;
/// Letter-to-orientation catalog construction
pub mod catalog;
/// Bit-grid shape model and canonicalization
pub mod shape;

pub use board::Board;
pub use catalog::PieceCatalog;
pub use shape::Shape;
