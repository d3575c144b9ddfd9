/*
display.rs

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

//! Render the puzzle on the console.

use crate::generator::grid::Grid;
use crate::generator::placement::Placement;

/// Return the grid formatted as a boxed table.
pub fn format_grid(grid: &Grid) -> String {
    let rule: String = "-".repeat(4 * grid.size() + 1);
    let mut out: String = String::new();

    out.push_str(&rule);
    out.push('\n');
    for row in grid.rows() {
        out.push('|');
        for letter in row {
            out.push(' ');
            out.push(*letter);
            out.push_str(" |");
        }
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Return the answer key, one line per hidden word with its starting cell
/// and direction.
pub fn format_key(placements: &[Placement]) -> String {
    let mut out: String = String::new();

    for p in placements {
        out.push_str(&format!(
            "{}: row {}, column {}, {}\n",
            p.word, p.row, p.col, p.direction
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::direction::Direction;

    #[test]
    fn grid_is_rendered_as_a_boxed_table() {
        let mut grid: Grid = Grid::new(2).unwrap();
        grid.write(0, 0, 'A');
        let expected: &str = "---------\n\
                              | A |   |\n\
                              |   |   |\n\
                              ---------\n";
        assert_eq!(format_grid(&grid), expected);
    }

    #[test]
    fn key_lists_words_with_their_positions() {
        let placements: Vec<Placement> = vec![Placement {
            word: String::from("WORD"),
            row: 1,
            col: 2,
            direction: Direction::UpRight,
        }];
        assert_eq!(format_key(&placements), "WORD: row 1, column 2, up-right\n");
    }
}
