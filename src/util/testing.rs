// src/util/testing.rs

use anyhow::Result;
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Confirm, NoteRepository};
use crate::domain::{ensure_content, DomainError, Note, NoteTitle};

/// Shared in-memory repository for testing use cases that depend on NoteRepository
///
/// Titles and content are validated like the file-backed repository does, so
/// use cases see the same error kinds. Storage failures can be injected
/// through the builder.
///
/// # Examples
///
/// ```
/// use plainnotes::application::NoteRepository;
/// use plainnotes::util::testing::MockNoteRepository;
///
/// let mut mock = MockNoteRepository::builder()
///     .with_note("todo", "buy milk")
///     .build();
/// assert_eq!(mock.list_titles().unwrap(), vec!["todo"]);
/// ```
pub struct MockNoteRepository {
    notes: BTreeMap<String, String>,
    unavailable: bool,
    delete_failures: HashSet<String>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    fn ensure_available(&self) -> Result<(), DomainError> {
        if self.unavailable {
            return Err(DomainError::StorageUnavailable {
                path: PathBuf::from("mock"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock storage unavailable"),
            });
        }
        Ok(())
    }

    fn validated(&self, title: &str, content: &str) -> Result<NoteTitle, DomainError> {
        let title = NoteTitle::parse(title)?;
        ensure_content(content)?;
        self.ensure_available()?;
        Ok(title)
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_titles(&mut self) -> Result<Vec<String>, DomainError> {
        self.ensure_available()?;
        Ok(self.notes.keys().cloned().collect())
    }

    fn create_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        let title = self.validated(title, content)?;
        if self.notes.contains_key(title.as_str()) {
            return Err(DomainError::Conflict(title.to_string()));
        }
        self.notes.insert(title.to_string(), content.to_string());
        Ok(())
    }

    fn overwrite_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        let title = self.validated(title, content)?;
        self.notes.insert(title.to_string(), content.to_string());
        Ok(())
    }

    fn read_note(&mut self, title: &str) -> Result<Note, DomainError> {
        let title = NoteTitle::parse(title)?;
        self.ensure_available()?;
        self.notes
            .get(title.as_str())
            .map(|content| Note {
                title: title.to_string(),
                content: content.clone(),
            })
            .ok_or_else(|| DomainError::NotFound(title.to_string()))
    }

    fn update_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        let title = self.validated(title, content)?;
        match self.notes.get_mut(title.as_str()) {
            Some(stored) => {
                *stored = content.to_string();
                Ok(())
            }
            None => Err(DomainError::NotFound(title.to_string())),
        }
    }

    fn delete_note(&mut self, title: &str) -> Result<(), DomainError> {
        let title = NoteTitle::parse(title)?;
        self.ensure_available()?;
        if !self.notes.contains_key(title.as_str()) {
            return Err(DomainError::NotFound(title.to_string()));
        }
        if self.delete_failures.contains(title.as_str()) {
            return Err(DomainError::StorageWrite {
                title: title.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock delete failure"),
            });
        }
        self.notes.remove(title.as_str());
        Ok(())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: BTreeMap<String, String>,
    unavailable: bool,
    delete_failures: HashSet<String>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            unavailable: false,
            delete_failures: HashSet::new(),
        }
    }

    /// Add a note that is present from the start
    pub fn with_note(mut self, title: &str, content: &str) -> Self {
        self.notes.insert(title.to_string(), content.to_string());
        self
    }

    /// Make every operation fail as if the directory could not be accessed
    pub fn with_unavailable_storage(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Configure delete_note to fail with a write error for a specific title
    pub fn with_delete_failure(mut self, title: &str) -> Self {
        self.delete_failures.insert(title.to_string());
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            unavailable: self.unavailable,
            delete_failures: self.delete_failures,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirm implementation that replays canned answers and records the questions
///
/// Once the answers run out every further question is answered with "no".
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    questions: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            questions: vec![],
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // RUST_LOG wins; default to trace so failing tests show repository calls
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
