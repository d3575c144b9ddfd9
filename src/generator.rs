/*
generator.rs

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

//! Hide words in a square letter grid.
//!
//! The [`grid::Grid`] object stores the puzzle board as a square table of
//! characters. Cells start blank and are filled in as words are placed.
//!
//! The [`words::WordList`] object stores the candidate words. Words are read
//! from a text file, normalized to upper case, and filtered by length.
//!
//! The [`placement::Placer`] object hides the candidate words in the grid.
//! Each word gets a single random attempt: a random direction from
//! [`direction::Direction`] and a random starting cell. The word is written
//! only if every cell on its path is blank or already holds the matching
//! letter. Words that cannot be written with the chosen start and direction
//! are dropped, and the committed words are returned as a list of
//! [`placement::Placement`] objects that serves as the answer key.

pub mod direction;
pub mod grid;
pub mod placement;
pub mod words;
