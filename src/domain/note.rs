// src/domain/note.rs
use crate::constants::{MAX_FILE_NAME_BYTES, NOTE_EXTENSION};
use crate::domain::DomainError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub title: String,
    pub content: String,
}

/// A validated note title, safe to turn into a single file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteTitle(String);

impl NoteTitle {
    /// Validate a user supplied title.
    ///
    /// Surrounding whitespace is dropped. The result must be a single path
    /// component: no separators, no NUL, not `.` or `..`, and it must not
    /// already carry the note extension. Its file name must also fit in
    /// `MAX_FILE_NAME_BYTES`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let title = raw.trim();
        let invalid = |reason| DomainError::InvalidTitle {
            title: raw.to_string(),
            reason,
        };

        if title.is_empty() {
            return Err(invalid("title must not be empty"));
        }
        if title.contains(['/', '\\']) {
            return Err(invalid("title must not contain path separators"));
        }
        if title.contains('\0') {
            return Err(invalid("title must not contain NUL characters"));
        }
        if title == "." || title == ".." {
            return Err(invalid("title must not be a relative path component"));
        }
        let suffix = format!(".{NOTE_EXTENSION}");
        if title.to_ascii_lowercase().ends_with(&suffix) {
            return Err(invalid("title must be given without the .txt extension"));
        }
        if title.len() + suffix.len() > MAX_FILE_NAME_BYTES {
            return Err(invalid("title is too long"));
        }

        Ok(Self(title.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name backing this note, `<title>.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, NOTE_EXTENSION)
    }

    /// Recover a title from a directory entry name, if it names a note file.
    ///
    /// Names whose stem would not survive `parse` unchanged are not notes we
    /// could address again, so they yield `None`.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(NOTE_EXTENSION)?.strip_suffix('.')?;
        let title = Self::parse(stem).ok()?;
        (title.0 == stem).then_some(title)
    }
}

impl fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reject content that is blank after trimming whitespace.
pub fn ensure_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::EmptyContent);
    }
    Ok(())
}
