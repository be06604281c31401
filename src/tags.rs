use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::{Result, TagError};
use crate::stopwords::StopWordSet;
use crate::tokenize::tokenize_lines;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn line(&self) -> String {
        format!("{}: {}", self.token, self.count)
    }
}

/// Distinct tokens are kept in first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    entries: Vec<RankedEntry>,
    positions: HashMap<String, usize>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(&mut self, text: &str, stop_words: &StopWordSet) {
        self.clear();
        for token in tokenize_lines(text) {
            if !stop_words.contains(&token) {
                self.record(token);
            }
        }
        debug!(
            "indexed {} tokens ({} distinct)",
            self.total(),
            self.entries.len()
        );
    }

    // Undecodable bytes become U+FFFD, which is never part of a token.
    pub fn scan_file(path: &Path, stop_words: &StopWordSet) -> Result<Self> {
        let bytes = fs::read(path).map_err(|err| TagError::read(path, err))?;
        let contents = String::from_utf8_lossy(&bytes);
        let mut index = Self::new();
        index.scan(&contents, stop_words);
        Ok(index)
    }

    fn record(&mut self, token: String) {
        match self.positions.get(&token) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.positions.insert(token.clone(), self.entries.len());
                self.entries.push(RankedEntry { token, count: 1 });
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Entries sorted by count descending; ties keep encounter order.
    pub fn ranked_view(&self) -> Vec<RankedEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|left, right| right.count.cmp(&left.count));
        ranked
    }

    pub fn serialize(&self) -> Vec<String> {
        self.ranked_view().iter().map(RankedEntry::line).collect()
    }

    pub fn count(&self, token: &str) -> Option<usize> {
        self.positions.get(token).map(|&pos| self.entries[pos].count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(token: &str, count: usize) -> RankedEntry {
        RankedEntry {
            token: token.to_string(),
            count,
        }
    }

    #[test]
    fn counts_the_cat_scenario() {
        let stop_words = StopWordSet::from_lines("the\non".lines());
        let mut index = TagIndex::new();
        index.scan("The Cat sat on the MAT. The cat ran.", &stop_words);

        assert_eq!(index.count("cat"), Some(2));
        assert_eq!(index.count("sat"), Some(1));
        assert_eq!(index.count("mat"), Some(1));
        assert_eq!(index.count("ran"), Some(1));
        assert_eq!(index.count("the"), None);
        assert_eq!(index.count("on"), None);
        assert_eq!(index.len(), 4);
        assert_eq!(index.total(), 5);
    }

    #[test]
    fn ranking_is_descending_and_stable_on_ties() {
        let mut index = TagIndex::new();
        index.scan("a a a b b b b b c c c c c", &StopWordSet::empty());
        assert_eq!(
            index.ranked_view(),
            vec![entry("b", 5), entry("c", 5), entry("a", 3)]
        );
    }

    #[test]
    fn ties_follow_first_encounter_across_lines() {
        let mut index = TagIndex::new();
        index.scan("zeta alpha\nalpha zeta\nmid", &StopWordSet::empty());
        assert_eq!(
            index.ranked_view(),
            vec![entry("zeta", 2), entry("alpha", 2), entry("mid", 1)]
        );
    }

    #[test]
    fn rescan_replaces_previous_counts() {
        let mut index = TagIndex::new();
        index.scan("apple apple pear", &StopWordSet::empty());
        index.scan("plum", &StopWordSet::empty());
        assert_eq!(index.ranked_view(), vec![entry("plum", 1)]);
        assert_eq!(index.count("apple"), None);
    }

    #[test]
    fn scanning_twice_is_idempotent() {
        let stop_words = StopWordSet::from_lines(["of"]);
        let text = "state of the art\nthe art of war";
        let mut index = TagIndex::new();
        index.scan(text, &stop_words);
        let first = index.ranked_view();
        index.scan(text, &stop_words);
        assert_eq!(first, index.ranked_view());
    }

    #[test]
    fn ranked_view_excludes_stop_words_and_sums_to_token_count() {
        let stop_words = StopWordSet::from_lines(["is", "a"]);
        let text = "This is a test. A test is only a test!";
        let mut index = TagIndex::new();
        index.scan(text, &stop_words);

        let view = index.ranked_view();
        assert!(view.iter().all(|entry| !stop_words.contains(&entry.token)));
        let expected = tokenize_lines(text)
            .filter(|token| !stop_words.contains(token))
            .count();
        assert_eq!(index.total(), expected);
    }

    #[test]
    fn empty_stop_words_keep_every_word() {
        let mut index = TagIndex::new();
        index.scan("one two two three", &StopWordSet::empty());
        let tokens: Vec<String> = index
            .ranked_view()
            .into_iter()
            .map(|entry| entry.token)
            .collect();
        assert_eq!(tokens, vec!["two", "one", "three"]);
    }

    #[test]
    fn serialize_uses_ranked_order() {
        let mut index = TagIndex::new();
        index.scan("x y y", &StopWordSet::empty());
        assert_eq!(index.serialize(), vec!["y: 2", "x: 1"]);
    }

    #[test]
    fn scan_file_reports_missing_file() {
        let result = TagIndex::scan_file(
            Path::new("/definitely/not/here/input.txt"),
            &StopWordSet::empty(),
        );
        assert!(matches!(result, Err(TagError::Read { .. })));
    }
}
