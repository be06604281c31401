use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagError>;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Save attempted before any tags were extracted.
    #[error("No tags to save!")]
    NothingToSave,
}

impl TagError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TagError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TagError::Write {
            path: path.into(),
            source,
        }
    }
}
