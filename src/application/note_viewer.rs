// src/application/note_viewer.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&mut self, title: &str) -> Result<Note, DomainError> {
        self.repository.read_note(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteRepository;

    #[test]
    fn given_stored_note_when_viewing_then_returns_content() {
        // Arrange
        let mock = MockNoteRepository::builder()
            .with_note("todo", "buy milk")
            .build();
        let mut viewer = NoteViewer::new(mock);

        // Act
        let note = viewer.view_note("todo").expect("Note should exist");

        // Assert
        assert_eq!(note.title, "todo");
        assert_eq!(note.content, "buy milk");
    }

    #[test]
    fn given_missing_note_when_viewing_then_returns_not_found() {
        let mut viewer = NoteViewer::new(MockNoteRepository::builder().build());

        let result = viewer.view_note("missing");

        match result.expect_err("Should return error") {
            DomainError::NotFound(title) => assert_eq!(title, "missing"),
            other => panic!("Expected NotFound error, got {other:?}"),
        }
    }
}
