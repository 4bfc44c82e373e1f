//! Solver constants and runtime configuration defaults

/// Fixed board width; the board height equals the number of selected pieces
pub const BOARD_WIDTH: usize = 5;

/// The twelve pentomino letters in alphabetical order
pub const PIECE_LETTERS: [char; 12] = ['F', 'I', 'L', 'N', 'P', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];

// Resource file naming: one binary file per letter, discriminated by the
// trailing letter of the file stem.
/// Default directory holding the shape resource files
pub const DEFAULT_DATA_DIR: &str = "data";
/// Prefix of every shape resource file name
pub const SHAPE_FILE_PREFIX: &str = "shape_";
/// Extension of every shape resource file name
pub const SHAPE_FILE_EXTENSION: &str = "bin";

// Output message literals
/// First line printed when a tiling was found
pub const SOLUTION_FOUND_MESSAGE: &str = "Solution found!";
/// First line printed when the search exhausted without a tiling
pub const NO_SOLUTION_MESSAGE: &str = "No solution found.";
