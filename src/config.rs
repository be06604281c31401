use std::env;
use std::path::{Path, PathBuf};

pub const STOP_WORDS_ENV: &str = "TAG_EXTRACTOR_STOP_WORDS";

pub fn resolve_stop_words_path(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_path_buf());
    }

    env::var_os(STOP_WORDS_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
