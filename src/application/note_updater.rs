// src/application/note_updater.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;

pub struct NoteUpdater<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteUpdater<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Replace the content of the note currently bound to `title`
    pub fn update_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        self.repository.update_note(title, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteRepository;

    #[test]
    fn given_existing_note_when_updating_then_replaces_content() {
        // Arrange
        let mock = MockNoteRepository::builder().with_note("todo", "old").build();
        let mut updater = NoteUpdater::new(mock);

        // Act
        updater.update_note("todo", "new").unwrap();

        // Assert
        assert_eq!(updater.repository.read_note("todo").unwrap().content, "new");
    }

    #[test]
    fn given_missing_note_when_updating_then_returns_not_found_and_creates_nothing() {
        let mut updater = NoteUpdater::new(MockNoteRepository::builder().build());

        let result = updater.update_note("missing", "z");

        assert!(matches!(result, Err(DomainError::NotFound(ref t)) if t == "missing"));
        assert!(updater.repository.list_titles().unwrap().is_empty());
    }

    #[test]
    fn given_empty_content_when_updating_then_returns_empty_content() {
        let mock = MockNoteRepository::builder().with_note("todo", "old").build();
        let mut updater = NoteUpdater::new(mock);

        let result = updater.update_note("todo", "");

        assert!(matches!(result, Err(DomainError::EmptyContent)));
        assert_eq!(updater.repository.read_note("todo").unwrap().content, "old");
    }
}
