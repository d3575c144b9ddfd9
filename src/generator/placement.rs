/*
placement.rs

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

//! Hide words in the puzzle board.
//!
//! Each word gets exactly one random attempt: a random direction and a
//! random starting cell that keeps the whole word within the grid. The word
//! is committed only if every cell on its path is blank or already holds the
//! matching letter. On the first conflicting cell the word is dropped, with
//! no partial write and no retry with another start or direction.
//!
//! Dropped words are not an error: they are simply absent from the returned
//! [`Placement`] list. The [`Placer::dropped`] counter reports how many
//! words did not make it into the grid.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::Grid;
use super::words::WordList;

/// Committed position of a word in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Placement {
    /// The hidden word.
    pub word: String,

    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Direction in which the word is written.
    pub direction: Direction,
}

/// Object that hides words in a grid.
pub struct Placer<'a> {
    /// The puzzle board, mutated in place as words are committed.
    grid: &'a mut Grid,

    /// Number of words committed to the grid.
    pub placed: usize,

    /// Number of words dropped because of a conflict or because they do not
    /// fit in the grid.
    pub dropped: usize,
}

impl<'a> Placer<'a> {
    /// Create a [`Placer`] object for the given grid.
    pub fn new(grid: &'a mut Grid) -> Self {
        Self {
            grid,
            placed: 0,
            dropped: 0,
        }
    }

    /// Attempt to hide every word of the list, in order, and return the
    /// committed placements.
    ///
    /// The returned list is the answer key: a word of the input list that is
    /// absent from it was dropped.
    pub fn hide_all(&mut self, words: &WordList, rng: &mut impl Rng) -> Vec<Placement> {
        let mut placements: Vec<Placement> = Vec::with_capacity(words.len());

        for word in words.words() {
            match self.try_word(word, rng) {
                Some(placement) => {
                    self.placed += 1;
                    placements.push(placement);
                }
                None => self.dropped += 1,
            }
        }
        debug!("{} words hidden, {} dropped", self.placed, self.dropped);
        placements
    }

    /// Write the word starting at the given cell and moving one square in
    /// the given direction after each letter.
    ///
    /// Every cell of the path is verified first, so nothing is written
    /// unless the whole word fits. Return whether the word was committed.
    pub fn place(&mut self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        let (d_row, d_col) = direction.delta();

        let mut r: i32 = row as i32;
        let mut c: i32 = col as i32;
        for letter in word.chars() {
            if !self.grid.can_place(r, c, letter) {
                return false;
            }
            r += d_row;
            c += d_col;
        }

        let mut r: i32 = row as i32;
        let mut c: i32 = col as i32;
        for letter in word.chars() {
            self.grid.write(r as usize, c as usize, letter);
            r += d_row;
            c += d_col;
        }
        true
    }

    /// Make the single random attempt for the word.
    fn try_word(&mut self, word: &str, rng: &mut impl Rng) -> Option<Placement> {
        let len: usize = word.chars().count();
        let size: usize = self.grid.size();
        let direction: Direction = Direction::random(rng);
        let (d_row, d_col) = direction.delta();

        let Some((row_lo, row_hi)) = start_bounds(len, size, d_row) else {
            debug!("Dropping {word}: longer than the grid");
            return None;
        };
        let Some((col_lo, col_hi)) = start_bounds(len, size, d_col) else {
            debug!("Dropping {word}: longer than the grid");
            return None;
        };
        let row: usize = rng.random_range(row_lo..=row_hi);
        let col: usize = rng.random_range(col_lo..=col_hi);

        if self.place(word, row, col, direction) {
            debug!("Hidden {word} at ({row}, {col}) going {direction}");
            Some(Placement {
                word: String::from(word),
                row,
                col,
                direction,
            })
        } else {
            debug!("Dropping {word}: conflicting letter at ({row}, {col}) going {direction}");
            None
        }
    }
}

/// Inclusive range of starting coordinates on one axis so that a word of the
/// given length stays within the grid when stepping by `step`.
///
/// Return None when the word is longer than the grid, in which case no
/// starting coordinate works.
fn start_bounds(len: usize, size: usize, step: i32) -> Option<(usize, usize)> {
    if len > size {
        return None;
    }
    match step {
        1 => Some((0, size - len)),
        -1 => Some((len - 1, size - 1)),
        _ => Some((0, size - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::BLANK;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn word_is_written_from_the_start_cell() {
        let mut grid: Grid = Grid::new(5).unwrap();
        let mut placer: Placer = Placer::new(&mut grid);
        assert!(placer.place("WORD", 0, 0, Direction::Right));
        assert_eq!(grid.read_along(0, 0, Direction::Right, 4).unwrap(), "WORD");
        assert_eq!(grid.get(0, 4), BLANK);
    }

    #[test]
    fn crossing_words_share_a_letter() {
        let mut grid: Grid = Grid::new(5).unwrap();
        let mut placer: Placer = Placer::new(&mut grid);
        assert!(placer.place("HEAT", 0, 0, Direction::Right));
        // The T of TEAM lands on the T of HEAT.
        assert!(placer.place("TEAM", 0, 3, Direction::Down));
        assert_eq!(grid.read_along(0, 0, Direction::Right, 4).unwrap(), "HEAT");
        assert_eq!(grid.read_along(0, 3, Direction::Down, 4).unwrap(), "TEAM");
    }

    #[test]
    fn conflicting_word_is_not_written_at_all() {
        let mut grid: Grid = Grid::new(5).unwrap();
        let mut placer: Placer = Placer::new(&mut grid);
        assert!(placer.place("HEAT", 0, 0, Direction::Right));
        // M conflicts with H on the very first cell.
        assert!(!placer.place("MOON", 0, 0, Direction::Down));
        assert_eq!(grid.get(1, 0), BLANK);
        assert_eq!(grid.get(0, 0), 'H');
    }

    #[test]
    fn full_length_word_must_start_at_the_edge() {
        let mut grid: Grid = Grid::new(5).unwrap();
        let mut placer: Placer = Placer::new(&mut grid);
        assert!(!placer.place("ABCDE", 0, 1, Direction::Right));
        assert!(placer.place("ABCDE", 0, 0, Direction::Right));
    }

    #[test]
    fn start_bounds_per_axis() {
        // Word as long as the grid: a single valid start per moving axis.
        assert_eq!(start_bounds(5, 5, 1), Some((0, 0)));
        assert_eq!(start_bounds(5, 5, -1), Some((4, 4)));
        assert_eq!(start_bounds(5, 5, 0), Some((0, 4)));
        assert_eq!(start_bounds(3, 5, 1), Some((0, 2)));
        assert_eq!(start_bounds(3, 5, -1), Some((2, 4)));
        assert_eq!(start_bounds(6, 5, 1), None);
    }

    #[test]
    fn single_word_on_a_blank_grid_is_always_hidden() {
        // The starting cell always keeps the word within the grid, so on a
        // blank grid nothing can conflict.
        let mut list: WordList = WordList::default();
        list.add("WORD");
        for seed in 0..50 {
            let mut grid: Grid = Grid::new(5).unwrap();
            let mut placer: Placer = Placer::new(&mut grid);
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let placements: Vec<Placement> = placer.hide_all(&list, &mut rng);
            assert_eq!(placements.len(), 1);
            let p: &Placement = &placements[0];
            assert_eq!(grid.read_along(p.row, p.col, p.direction, 4).unwrap(), "WORD");
        }
    }

    #[test]
    fn word_longer_than_the_grid_is_dropped() {
        // Bypass the default length bound to reach the engine with a word
        // that cannot fit.
        let mut list: WordList = WordList::new(4, 12);
        list.add("WORDSEARCH");
        let mut grid: Grid = Grid::new(3).unwrap();
        let mut placer: Placer = Placer::new(&mut grid);
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        assert!(placer.hide_all(&list, &mut rng).is_empty());
        assert_eq!(placer.dropped, 1);
        assert_eq!(placer.placed, 0);
    }

    #[test]
    fn blocked_grid_drops_every_word() {
        let mut grid: Grid = Grid::new(4).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                grid.write(row, col, 'Z');
            }
        }
        let mut list: WordList = WordList::default();
        list.add("WORD");
        list.add("BIRD");
        let mut placer: Placer = Placer::new(&mut grid);
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        assert!(placer.hide_all(&list, &mut rng).is_empty());
        assert_eq!(placer.dropped, 2);
    }
}
