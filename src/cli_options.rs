/*
cli_options.rs

Copyright 2026 Hervé Quatremain

This file is part of Gridseek.

Gridseek is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridseek is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridseek. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options and drive a full run.
//!
//! Gridseek reads the words to hide from a text file, one word per line,
//! hides them in a random grid, and prints the answer key followed by the
//! final puzzle.
//!
//! # Examples
//!
//! Build a 12x12 puzzle from the default `vocabulary.txt` file:
//!
//! ```text
//! $ gridseek --size 12
//! ```
//!
//! Build a reproducible puzzle and save it with its answer key:
//!
//! ```text
//! $ gridseek --size 10 --words animals.txt --seed 42 --save puzzle.json
//! ```
//!
//! Print a saved puzzle again:
//!
//! ```text
//! $ gridseek --load puzzle.json
//! ```

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::generator::words::WordList;
use crate::puzzle::Puzzle;
use crate::saver::Saver;

/// Build random word-search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = config::COPYRIGHT_NOTICE)]
struct Args {
    /// Number of rows and columns of the grid; prompted for when not provided
    #[arg(short, long)]
    size: Option<usize>,

    /// File with the words to hide, one word per line
    #[arg(short, long, default_value = "vocabulary.txt")]
    words: PathBuf,

    /// Length of the shortest word allowed
    #[arg(long, default_value_t = config::WORD_MIN)]
    min_length: usize,

    /// Length of the longest word allowed
    #[arg(long, default_value_t = config::WORD_MAX)]
    max_length: usize,

    /// Seed for the random generator, for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Save the puzzle and its answer key to the given file in JSON format
    #[arg(long)]
    save: Option<PathBuf>,

    /// Restore a saved puzzle instead of generating a new one
    #[arg(short, long, conflicts_with_all = ["size", "words", "save"])]
    load: Option<PathBuf>,

    /// Print placement statistics after generating the puzzle
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options and run Gridseek. Return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.min_length > args.max_length {
        eprintln!(
            "Error: --min-length ({}) is greater than --max-length ({})",
            args.min_length, args.max_length
        );
        return 1;
    }

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut puzzle: Puzzle = match &args.load {
        //
        // Restore a saved puzzle
        //
        Some(path) => match Saver::new(path.clone()).get_puzzle() {
            Ok(Some(p)) => p,
            Ok(None) => {
                eprintln!("Error: no saved puzzle at {path:?}");
                return 1;
            }
            Err(e) => {
                eprintln!("Error: cannot restore the puzzle from {path:?}: {e}");
                return 1;
            }
        },

        //
        // Generate a new puzzle
        //
        None => {
            let words: WordList =
                match WordList::from_file(&args.words, args.min_length, args.max_length) {
                    Ok(w) => w,
                    Err(e) => {
                        eprintln!("Error: cannot read {:?}: {e}", args.words);
                        return 1;
                    }
                };
            if words.is_empty() {
                eprintln!(
                    "Error: {:?} has no word of length {} to {}",
                    args.words, args.min_length, args.max_length
                );
                return 1;
            }

            let size: usize = match args.size.or_else(prompt_size) {
                Some(s) => s,
                None => return 1,
            };

            let puzzle: Puzzle = match Puzzle::generate(size, &words, &mut rng) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 1;
                }
            };

            if let Some(path) = &args.save {
                if let Err(e) = Saver::new(path.clone()).save_puzzle(&puzzle) {
                    eprintln!("Error: cannot save the puzzle to {path:?}: {e}");
                    return 1;
                }
            }
            puzzle
        }
    };

    if args.summary {
        println!(
            "{} words hidden, {} dropped",
            puzzle.placements.len(),
            puzzle.dropped
        );
    }

    // The answer key: the grid with only the hidden words, and their positions
    print!("{}", display::format_grid(&puzzle.grid));
    println!("Hidden words ({}): {}", puzzle.placements.len(), puzzle.words().join(", "));
    print!("{}", display::format_key(&puzzle.placements));

    // The final puzzle, with the blank cells filled with random letters
    puzzle.fill_blanks(&mut rng);
    println!();
    print!("{}", display::format_grid(&puzzle.grid));
    0
}

/// Ask for the grid size until a positive number is given.
///
/// Return None when standard input is closed.
fn prompt_size() -> Option<usize> {
    let stdin: io::Stdin = io::stdin();
    loop {
        print!("Enter a grid size: ");
        io::stdout().flush().ok()?;
        let mut line: String = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => (),
        }
        match line.trim().parse::<usize>() {
            Ok(size) if size > 0 => return Some(size),
            _ => eprintln!("Please enter a number greater than zero."),
        }
    }
}
