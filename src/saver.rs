/*
saver.rs

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

//! Save and restore generated puzzles.
//!
//! The saved object is a serialization of the [`Puzzle`] object in JSON
//! format by using [`serde`]. Saving before the blank cells are filled
//! preserves the answer key, and the puzzle can be restored and printed
//! again later.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::puzzle::Puzzle;

/// Object to save and restore a puzzle.
pub struct Saver {
    /// Path to the save file.
    save_file: PathBuf,
}

impl Saver {
    /// Create a [`Saver`] object for the given save file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Puzzle file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`Puzzle`] object from the save file.
    ///
    /// Return the [`Puzzle`] object or None if the save file does not exist.
    pub fn get_puzzle(&self) -> Result<Option<Puzzle>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let puzzle: Puzzle = serde_json::from_reader(reader)?;
        Ok(Some(puzzle))
    }

    /// Save the provided [`Puzzle`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be written.
    pub fn save_puzzle(&self, puzzle: &Puzzle) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, puzzle)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::words::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    #[test]
    fn saved_puzzle_is_restored_unchanged() {
        let mut words: WordList = WordList::default();
        words.add("horse");
        words.add("snake");
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let puzzle: Puzzle = Puzzle::generate(8, &words, &mut rng).unwrap();

        let path = std::env::temp_dir().join("gridseek-saver-test.json");
        let saver: Saver = Saver::new(path.clone());
        saver.save_puzzle(&puzzle).unwrap();
        let restored: Puzzle = saver.get_puzzle().unwrap().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(restored.grid, puzzle.grid);
        assert_eq!(restored.placements, puzzle.placements);
        assert_eq!(restored.dropped, puzzle.dropped);
    }

    #[test]
    fn missing_save_file_is_not_an_error() {
        let saver: Saver = Saver::new(std::env::temp_dir().join("gridseek-no-save.json"));
        assert!(saver.get_puzzle().unwrap().is_none());
    }
}
