// src/domain/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid note title {title:?}: {reason}")]
    InvalidTitle { title: String, reason: &'static str },
    #[error("Note content must not be empty")]
    EmptyContent,
    #[error("Note already exists: {0}")]
    Conflict(String),
    #[error("Note not found: {0}")]
    NotFound(String),
    #[error("Notes directory unavailable: {}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read note: {title}")]
    StorageRead {
        title: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write note: {title}")]
    StorageWrite {
        title: String,
        #[source]
        source: io::Error,
    },
}
