/*
config.rs

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

//! Application constants.

/// Default length of the shortest word allowed in a puzzle.
pub const WORD_MIN: usize = 4;

/// Default length of the longest word allowed in a puzzle.
pub const WORD_MAX: usize = 8;

/// Notice that the `--version` command-line option displays.
pub const COPYRIGHT_NOTICE: &str = "gridseek 0.1.0
Copyright 2026 Hervé Quatremain
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";
