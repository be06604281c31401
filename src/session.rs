use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Result, TagError};
use crate::stopwords::StopWordSet;
use crate::tags::{RankedEntry, TagIndex};

pub const TAGS_OUTPUT_FILE: &str = "tags_output.txt";

/// Every operation either completes and replaces the relevant state, or
/// fails and leaves it untouched.
#[derive(Debug, Default)]
pub struct Session {
    stop_words: StopWordSet,
    tags: TagIndex,
    text_file: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_stop_words(&mut self, path: &Path) -> Result<usize> {
        let stop_words = StopWordSet::load(path)?;
        info!(
            "loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        self.stop_words = stop_words;
        Ok(self.stop_words.len())
    }

    pub fn scan_text(&mut self, path: &Path) -> Result<Vec<RankedEntry>> {
        let tags = TagIndex::scan_file(path, &self.stop_words)?;
        info!(
            "scanned {}: {} tags from {} tokens",
            path.display(),
            tags.len(),
            tags.total()
        );
        self.tags = tags;
        self.text_file = Some(path.to_path_buf());
        Ok(self.tags.ranked_view())
    }

    /// Saves to `tags_output.txt` beside the scanned text file.
    pub fn save_tags(&self) -> Result<PathBuf> {
        let text_file = self.saveable_text_file()?;
        let dir = text_file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.save_tags_to(&dir.join(TAGS_OUTPUT_FILE))
    }

    pub fn save_tags_to(&self, path: &Path) -> Result<PathBuf> {
        self.saveable_text_file()?;

        let mut contents = String::new();
        for line in self.tags.serialize() {
            contents.push_str(&line);
            contents.push('\n');
        }
        let mut file = fs::File::create(path).map_err(|err| TagError::write(path, err))?;
        file.write_all(contents.as_bytes())
            .map_err(|err| TagError::write(path, err))?;

        let written = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        info!("saved {} tags to {}", self.tags.len(), written.display());
        Ok(written)
    }

    fn saveable_text_file(&self) -> Result<&Path> {
        match self.text_file.as_deref() {
            Some(path) if !self.tags.is_empty() => Ok(path),
            _ => Err(TagError::NothingToSave),
        }
    }

    pub fn ranked_view(&self) -> Vec<RankedEntry> {
        self.tags.ranked_view()
    }

    #[cfg(test)]
    fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    #[cfg(test)]
    pub(crate) fn tags(&self) -> &TagIndex {
        &self.tags
    }

    #[cfg(test)]
    fn text_file(&self) -> Option<&Path> {
        self.text_file.as_deref()
    }
}
