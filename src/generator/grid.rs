/*
grid.rs

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

//! Puzzle board.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;

/// Value of the cells that no word occupies.
pub const BLANK: char = ' ';

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The requested grid size is zero.
    InvalidSize,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidSize => write!(f, "the grid size must be greater than zero"),
        }
    }
}

impl std::error::Error for GridError {}

/// Square table of characters representing the puzzle board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cell values, by row and then by column. A cell is either [`BLANK`] or
    /// an upper case letter.
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Create a blank [`Grid`] object of the given size.
    ///
    /// # Errors
    ///
    /// The method returns [`GridError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![vec![BLANK; size]; size],
        })
    }

    /// Return the number of rows and columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether the row and column position lies within the grid.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let size: i32 = self.size as i32;
        -1 < row && row < size && -1 < col && col < size
    }

    /// Check whether the square is in the grid, and blank or already holding
    /// the given letter.
    ///
    /// This is the only conflict rule: two words crossing on the same letter
    /// is valid, but a word never replaces a different letter that an earlier
    /// word placed.
    pub fn can_place(&self, row: i32, col: i32, letter: char) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let current: char = self.cells[row as usize][col as usize];
        current == BLANK || current == letter
    }

    /// Write the letter into the cell, replacing the current value.
    ///
    /// Callers must verify the cell with [`Grid::can_place`] first so that a
    /// placed letter is never replaced with a different one.
    pub fn write(&mut self, row: usize, col: usize, letter: char) {
        self.cells[row][col] = letter;
    }

    /// Return the value of the cell.
    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// Return the rows of the grid.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }

    /// Read `len` cells starting at the given position and moving one square
    /// in the given direction after each cell.
    ///
    /// Return None when the walk leaves the grid before `len` cells are read.
    pub fn read_along(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        len: usize,
    ) -> Option<String> {
        let (d_row, d_col) = direction.delta();
        let mut r: i32 = row as i32;
        let mut c: i32 = col as i32;
        let mut word: String = String::with_capacity(len);

        for _ in 0..len {
            if !self.in_bounds(r, c) {
                return None;
            }
            word.push(self.cells[r as usize][c as usize]);
            r += d_row;
            c += d_col;
        }
        Some(word)
    }

    /// Replace every blank cell with a random upper case letter.
    ///
    /// This turns the answer key into the final puzzle, so it must run only
    /// after all the words have been hidden.
    pub fn fill_blanks(&mut self, rng: &mut impl Rng) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == BLANK {
                    *cell = (b'A' + rng.random_range(0..26u8)) as char;
                }
            }
        }
    }
}
