//! Pentomino packing solver built on exact cover and dancing links
//!
//! The solver reduces a pentomino selection to an exact-cover instance,
//! searches it with Algorithm X over a dancing-links matrix, and renders the
//! first tiling found of a rectangle five cells wide.

#![forbid(unsafe_code)]

/// Exact-cover matrix construction and Algorithm X search
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Piece geometry, board layout, and orientation catalog
pub mod spatial;

pub use io::error::{Result, SolverError};

// The unit test tree mirrors src/ under tests/unit and compiles with the
// crate so its `crate::` paths resolve.
#[cfg(test)]
#[path = "../tests/unit/mod.rs"]
mod unit_tests;
