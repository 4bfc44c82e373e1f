//! CLI entry point for the pentomino packing solver

use clap::Parser;
use pentacover::io::cli::{Cli, SolveRunner};

fn main() -> pentacover::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run()
}
