//! Exact-cover reduction and dancing-links search

/// Placement enumeration and matrix row construction
pub mod builder;
/// Dancing-links node torus with cover/uncover
pub mod matrix;
/// Algorithm X recursion with minimum-count column selection
pub mod search;
