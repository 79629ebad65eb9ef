use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::info;
use std::fs;

use sudoku_sheet::{generator::Generator, render, PuzzlePair};

const OUTPUT_FILE: &str = "sudoku.html";
const DEFAULT_CLEARED_CELLS: usize = 40;
const PAIRS_PER_PAGE: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "sudoku-sheet", version, about = "Generates a printable HTML sheet of Sudoku puzzles")]
struct Cli {
    /// Number of cells to clear in each playable grid (0-81). Missing or
    /// invalid values fall back to 40.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    cells: Vec<String>,
}

/// Invalid or surplus input is substituted with the default rather than
/// rejected; only a single in-range numeric argument is honored.
fn clear_count(args: &[String]) -> usize {
    let [arg] = args else { return DEFAULT_CLEARED_CELLS };
    match arg.parse::<usize>() {
        Ok(n) if n <= 81 => n,
        _ => DEFAULT_CLEARED_CELLS,
    }
}

fn build_page(cells_to_clear: usize) -> Result<String> {
    let mut pairs = Vec::with_capacity(PAIRS_PER_PAGE);
    for i in 0..PAIRS_PER_PAGE {
        // fresh generator per pair, so puzzles share no state
        let mut generator = Generator::new(None);
        let pair: PuzzlePair = generator.generate_pair(cells_to_clear)?;
        info!("generated puzzle pair {}/{}", i + 1, PAIRS_PER_PAGE);
        pairs.push(pair);
    }
    Ok(render::render_page(&pairs))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cells_to_clear = clear_count(&cli.cells);

    let html = build_page(cells_to_clear)?;
    fs::write(OUTPUT_FILE, html).with_context(|| format!("writing {OUTPUT_FILE}"))?;
    println!("{} HTML content written to {}", "✔".green().bold(), OUTPUT_FILE);
    Ok(())
}
