/*
direction.rs

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

//! Directions along which a word can be written.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Number of supported directions.
pub const NUM_DIRECTIONS: usize = 4;

/// Direction of a word in the grid.
///
/// Words read left to right and top to bottom, so only these four directions
/// are supported. The leftward and upward variants would spell the words
/// backwards.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default,
)]
#[repr(usize)]
pub enum Direction {
    /// Left to right.
    #[default]
    Right,

    /// Top to bottom.
    Down,

    /// Diagonal, towards the bottom right corner.
    DownRight,

    /// Diagonal, towards the top right corner.
    UpRight,
}

impl Direction {
    /// Return the row and column steps that move one square in the direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
        }
    }

    /// Return a random direction for a word.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_repr(rng.random_range(0..NUM_DIRECTIONS)).unwrap_or_default()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::DownRight => write!(f, "down-right"),
            Direction::UpRight => write!(f, "up-right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deltas() {
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::DownRight.delta(), (1, 1));
        assert_eq!(Direction::UpRight.delta(), (-1, 1));
    }

    #[test]
    fn from_repr_covers_the_four_directions() {
        assert_eq!(Direction::from_repr(0), Some(Direction::Right));
        assert_eq!(Direction::from_repr(1), Some(Direction::Down));
        assert_eq!(Direction::from_repr(2), Some(Direction::DownRight));
        assert_eq!(Direction::from_repr(3), Some(Direction::UpRight));
        assert_eq!(Direction::from_repr(NUM_DIRECTIONS), None);
    }

    #[test]
    fn random_is_reproducible_with_a_seed() {
        let mut rng1: StdRng = StdRng::seed_from_u64(7);
        let mut rng2: StdRng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(Direction::random(&mut rng1), Direction::random(&mut rng2));
        }
    }
}
