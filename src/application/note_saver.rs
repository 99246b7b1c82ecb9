// src/application/note_saver.rs
use crate::application::{Confirm, NoteRepository};
use crate::domain::DomainError;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Created,
    Overwritten,
    /// The title was taken and the user declined to overwrite it.
    Declined,
}

pub struct NoteSaver<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteSaver<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Save a new note, asking before an existing note is replaced
    ///
    /// The repository is first asked to create the note without overwriting.
    /// Only on `Conflict` is the user consulted; if they agree the note is
    /// written again as an explicit overwrite.
    pub fn save(
        &mut self,
        title: &str,
        content: &str,
        confirm: &mut impl Confirm,
    ) -> Result<SaveOutcome, DomainError> {
        match self.repository.create_note(title, content) {
            Ok(()) => Ok(SaveOutcome::Created),
            Err(DomainError::Conflict(existing)) => {
                let question = format!("Note '{existing}' already exists. Overwrite?");
                if !confirm.confirm(&question) {
                    debug!(title = %existing, "Overwrite declined");
                    return Ok(SaveOutcome::Declined);
                }
                self.repository.overwrite_note(title, content)?;
                Ok(SaveOutcome::Overwritten)
            }
            Err(e) => Err(e),
        }
    }

    /// Save without asking, replacing an existing note if there is one
    pub fn save_forced(&mut self, title: &str, content: &str) -> Result<SaveOutcome, DomainError> {
        self.save(title, content, &mut |_: &str| true)
    }
}
