//! Command-line interface for solving pentomino packing selections
//!
//! Piece letters arrive as dash-prefixed flags: `-l -y -v -t -w -z` and
//! `-lyvtwz` are equivalent, letters are case-insensitive, unknown letters
//! are ignored, and an empty selection falls back to the full set of
//! twelve.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::builder::{Placement, build_matrix};
use crate::algorithm::search::first_solution;
use crate::io::configuration::{BOARD_WIDTH, DEFAULT_DATA_DIR, PIECE_LETTERS};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::io::render::{paint_solution, write_report};
use crate::io::resources::ShapeLibrary;
use crate::spatial::board::Board;
use crate::spatial::catalog::PieceCatalog;

#[derive(Debug, Parser)]
#[command(name = "pentacover")]
#[command(author, about = "Pack a rectangle with a selection of pentominoes")]
/// Command-line arguments for the packing solver
///
/// No version flag: `-V` must reach the piece parser as the V pentomino.
pub struct Cli {
    /// Directory containing the binary shape resources
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Piece selection flags, e.g. `-l -y -v -t -w -z` or `-lyvtwz`
    #[arg(
        value_name = "PIECES",
        allow_hyphen_values = true,
        trailing_var_arg = true,
        num_args = 0..
    )]
    pub pieces: Vec<String>,
}

impl Cli {
    /// Selected piece letters in alphabetical order
    ///
    /// Walks every dash-prefixed argument, interpreting each following
    /// character case-insensitively as a piece letter. Repeated letters
    /// collapse into a set; with no letters at all the full set of twelve
    /// is selected.
    pub fn selected_letters(&self) -> Vec<char> {
        let mut selected = BTreeSet::new();
        for argument in &self.pieces {
            let Some(letters) = argument.strip_prefix('-') else {
                continue;
            };
            for letter in letters.chars() {
                let letter = letter.to_ascii_uppercase();
                if PIECE_LETTERS.contains(&letter) {
                    selected.insert(letter);
                }
            }
        }

        if selected.is_empty() {
            PIECE_LETTERS.to_vec()
        } else {
            selected.into_iter().collect()
        }
    }
}

/// Orchestrates one solve: load, reduce, search, render
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the selection and write the report to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if resource loading, matrix construction, or output
    /// fails; an unsolvable selection is reported, not an error.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run_with_writer(&mut handle)
    }

    /// Solve the selection and write the report to the given writer
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::run`].
    pub fn run_with_writer<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.cli.data_dir.is_dir() {
            return Err(invalid_parameter(
                "data_dir",
                &self.cli.data_dir.display(),
                &"not a directory",
            ));
        }

        let letters = self.cli.selected_letters();
        let library = ShapeLibrary::load(&self.cli.data_dir)?;
        let catalog = PieceCatalog::from_library(&library, &letters)?;
        let board = Board::rectangle(catalog.piece_count(), BOARD_WIDTH);

        let (mut matrix, placements) = build_matrix(&catalog, &board)?;
        let solution = first_solution(&mut matrix);

        match solution {
            Some(rows) => {
                let chosen = chosen_placements(&placements, &rows)?;
                let grid = paint_solution(&board, &catalog, &chosen)?;
                write_report(out, Some(&grid), catalog.piece_count())?;
            }
            None => write_report(out, None, catalog.piece_count())?,
        }
        Ok(())
    }
}

// Row ids come straight out of the matrix; a miss in the payload table is
// corruption, not user input.
fn chosen_placements(placements: &[Placement], rows: &[usize]) -> Result<Vec<Placement>> {
    rows.iter()
        .map(|&row| {
            placements
                .get(row)
                .copied()
                .ok_or_else(|| computation_error("chosen_placements", &"row id has no payload"))
        })
        .collect()
}
