// src/domain/mod.rs
pub mod error;
pub mod note;

pub use error::DomainError;
pub use note::{ensure_content, Note, NoteTitle};
