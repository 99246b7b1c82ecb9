// src/application/note_deleter.rs
use crate::application::{Confirm, NoteRepository};
use crate::domain::{DomainError, NoteTitle};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note after the user has confirmed it
    ///
    /// The question is only asked for a valid title naming a stored note;
    /// otherwise the validation or `NotFound` error is returned unasked.
    pub fn delete(
        &mut self,
        title: &str,
        confirm: &mut impl Confirm,
    ) -> Result<DeleteOutcome, DomainError> {
        let title = NoteTitle::parse(title)?;
        self.repository.read_note(title.as_str())?;

        if !confirm.confirm(&format!("Delete note '{title}'?")) {
            debug!(%title, "Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }
        self.delete_note(title.as_str())?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Delete a note without asking
    pub fn delete_note(&mut self, title: &str) -> Result<(), DomainError> {
        self.repository.delete_note(title)
    }
}
