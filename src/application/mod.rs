// src/application/mod.rs
pub mod confirm;
pub mod note_deleter;
pub mod note_lister;
pub mod note_repository;
pub mod note_saver;
pub mod note_updater;
pub mod note_viewer;

pub use confirm::Confirm;
pub use note_deleter::{DeleteOutcome, NoteDeleter};
pub use note_lister::NoteLister;
pub use note_repository::NoteRepository;
pub use note_saver::{NoteSaver, SaveOutcome};
pub use note_updater::NoteUpdater;
pub use note_viewer::NoteViewer;
