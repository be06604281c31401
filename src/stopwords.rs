use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, TagError};

/// Entries are stored trimmed and lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    // Blank lines are skipped.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim().to_lowercase();
                if word.is_empty() { None } else { Some(word) }
            })
            .collect();
        Self { words }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|err| TagError::read(path, err))?;
        let contents = String::from_utf8_lossy(&bytes);
        let set = Self::from_lines(contents.lines());
        debug!("parsed {} stop words from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
