/*
words.rs

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

//! Candidate words for a puzzle.
//!
//! Words are read from a text file, one word per line. They are stored in
//! upper case, without duplicates, and sorted. Because placement is
//! first-come-first-served, the order in which the words are processed
//! changes which words survive a cell conflict. Keeping the list sorted makes
//! that order explicit, and the whole run reproducible with a fixed random
//! seed.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config;

/// Set of candidate words.
#[derive(Debug, Clone)]
pub struct WordList {
    /// The words, upper case, sorted, without duplicates.
    words: Vec<String>,

    /// Length of the shortest word allowed.
    min_len: usize,

    /// Length of the longest word allowed.
    max_len: usize,
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(config::WORD_MIN, config::WORD_MAX)
    }
}

impl WordList {
    /// Create an empty [`WordList`] object with the given length bounds.
    ///
    /// A lower bound of zero would let empty lines through, so the minimum
    /// length is at least one.
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self {
            words: Vec::new(),
            min_len: min_len.max(1),
            max_len,
        }
    }

    /// Read the words from a text file, one word per line.
    ///
    /// Words with a length outside the bounds are skipped.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be read.
    pub fn from_file(path: &Path, min_len: usize, max_len: usize) -> Result<Self, Box<dyn Error>> {
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let mut list: Self = Self::new(min_len, max_len);

        for line in reader.lines() {
            let line: String = line?;
            list.add(line.trim());
        }
        debug!("{} valid words read from {path:?}", list.len());
        Ok(list)
    }

    /// Add a word to the list and return whether it was kept.
    ///
    /// The word is converted to upper case. It is skipped when its length is
    /// out of bounds or when it is already in the list.
    pub fn add(&mut self, word: &str) -> bool {
        let len: usize = word.chars().count();
        if len < self.min_len || len > self.max_len {
            debug!(
                "Skipping {word}: length {len} outside {}-{}",
                self.min_len, self.max_len
            );
            return false;
        }
        let word: String = word.to_uppercase();
        match self.words.binary_search(&word) {
            Ok(_) => false,
            Err(i) => {
                self.words.insert(i, word);
                true
            }
        }
    }

    /// Return the words in their processing order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Return the number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Return whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn short_words_are_filtered_out() {
        let mut list: WordList = WordList::default();
        assert!(!list.add("CAT"));
        assert!(!list.add("CAR"));
        assert!(list.is_empty());
    }

    #[test]
    fn long_words_are_filtered_out() {
        let mut list: WordList = WordList::default();
        assert!(!list.add("WORDSEARCH"));
        assert!(list.is_empty());
    }

    #[test]
    fn words_are_upper_cased_sorted_and_deduplicated() {
        let mut list: WordList = WordList::new(4, 8);
        assert!(list.add("zebra"));
        assert!(list.add("APPLE"));
        assert!(!list.add("Zebra"));
        assert_eq!(list.words(), ["APPLE", "ZEBRA"]);
    }

    #[test]
    fn empty_words_are_never_accepted() {
        let mut list: WordList = WordList::new(0, 8);
        assert!(!list.add(""));
        assert!(list.add("WORD"));
    }

    #[test]
    fn from_file_reads_and_filters() {
        let path: PathBuf = std::env::temp_dir().join("gridseek-words-test.txt");
        fs::write(&path, "cat\nhorse\n\nwordsearch\nHORSE\nbird\n").unwrap();
        let list: WordList = WordList::from_file(&path, 4, 8).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(list.words(), ["BIRD", "HORSE"]);
    }

    #[test]
    fn from_file_reports_missing_files() {
        let path: PathBuf = std::env::temp_dir().join("gridseek-no-such-file.txt");
        assert!(WordList::from_file(&path, 4, 8).is_err());
    }
}
