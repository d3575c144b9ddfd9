/*
puzzle.rs

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

//! A generated word-search puzzle.
//!
//! The [`Puzzle`] object bundles the grid and the answer key. Right after
//! [`Puzzle::generate`], the grid only contains the hidden words and serves
//! as the answer key. [`Puzzle::fill_blanks`] then replaces the blank cells
//! with random letters to produce the final puzzle.
//!
//! See the [`crate::saver`] module that saves and restores [`Puzzle`]
//! objects.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::grid::{Grid, GridError};
use crate::generator::placement::{Placement, Placer};
use crate::generator::words::WordList;

/// A word-search puzzle and its answer key.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Puzzle {
    /// The puzzle board.
    pub grid: Grid,

    /// The hidden words and their positions (the answer key).
    pub placements: Vec<Placement>,

    /// Number of candidate words that could not be hidden.
    pub dropped: usize,

    /// Creation timestamp.
    pub created: DateTime<Utc>,
}

impl Puzzle {
    /// Generate a puzzle of the given size from the candidate words.
    ///
    /// Words that cannot be hidden with the random start and direction they
    /// are given are left out of the answer key.
    ///
    /// # Errors
    ///
    /// The method returns [`GridError::InvalidSize`] if `size` is zero.
    pub fn generate(size: usize, words: &WordList, rng: &mut impl Rng) -> Result<Self, GridError> {
        let mut grid: Grid = Grid::new(size)?;
        let mut placer: Placer = Placer::new(&mut grid);
        let placements: Vec<Placement> = placer.hide_all(words, rng);
        let dropped: usize = placer.dropped;

        Ok(Self {
            grid,
            placements,
            dropped,
            created: Utc::now(),
        })
    }

    /// Return the hidden words.
    pub fn words(&self) -> Vec<&str> {
        self.placements
            .iter()
            .map(|placement| placement.word.as_str())
            .collect()
    }

    /// Replace the blank cells of the grid with random letters.
    pub fn fill_blanks(&mut self, rng: &mut impl Rng) {
        self.grid.fill_blanks(rng);
    }
}
