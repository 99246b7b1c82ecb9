// src/application/note_repository.rs
use crate::domain::{DomainError, Note};

/// Persistence boundary for notes, addressed by title.
///
/// Implementations are used from a single thread; the `&mut self` receivers
/// reflect that no internal synchronisation is provided.
pub trait NoteRepository {
    /// Titles of all stored notes, in a stable order.
    fn list_titles(&mut self) -> Result<Vec<String>, DomainError>;

    /// Store a new note. Fails with `Conflict` if the title is taken.
    fn create_note(&mut self, title: &str, content: &str) -> Result<(), DomainError>;

    /// Store a note, replacing any existing note with the same title.
    fn overwrite_note(&mut self, title: &str, content: &str) -> Result<(), DomainError>;

    fn read_note(&mut self, title: &str) -> Result<Note, DomainError>;

    /// Replace the content of an existing note. Fails with `NotFound` if absent.
    fn update_note(&mut self, title: &str, content: &str) -> Result<(), DomainError>;

    fn delete_note(&mut self, title: &str) -> Result<(), DomainError>;

    /// Flag-style entry point: `overwrite` selects between the two create variants.
    fn save_note(&mut self, title: &str, content: &str, overwrite: bool) -> Result<(), DomainError> {
        if overwrite {
            self.overwrite_note(title, content)
        } else {
            self.create_note(title, content)
        }
    }
}

impl<R: NoteRepository + ?Sized> NoteRepository for &mut R {
    fn list_titles(&mut self) -> Result<Vec<String>, DomainError> {
        (**self).list_titles()
    }

    fn create_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        (**self).create_note(title, content)
    }

    fn overwrite_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        (**self).overwrite_note(title, content)
    }

    fn read_note(&mut self, title: &str) -> Result<Note, DomainError> {
        (**self).read_note(title)
    }

    fn update_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        (**self).update_note(title, content)
    }

    fn delete_note(&mut self, title: &str) -> Result<(), DomainError> {
        (**self).delete_note(title)
    }
}
