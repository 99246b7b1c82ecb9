// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List the titles of all notes
    ///
    /// # Returns
    /// Titles in the repository's stable order, empty if there are no notes
    pub fn list_titles(&mut self) -> Result<Vec<String>, DomainError> {
        self.repository.list_titles()
    }
}
