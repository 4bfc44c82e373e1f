//! Input/output operations and error handling
//!
//! This module contains everything that touches the outside world:
//! - Command-line parsing and solve orchestration
//! - Shape resource loading
//! - Solution rendering and report output
//! - Error types shared across the crate

/// Command-line interface and solve orchestration
pub mod cli;
/// Solver constants and configuration defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Solution painting and report output
pub mod render;
/// Binary shape resource loading
pub mod resources;
