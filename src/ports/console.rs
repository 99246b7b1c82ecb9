// src/ports/console.rs
use crate::application::{DeleteOutcome, SaveOutcome};
use crate::domain::Note;
use anyhow::{Context, Result};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    /// One title per line, or a hint when the directory holds no notes
    pub fn render_titles(&self, titles: &[String]) -> String {
        if titles.is_empty() {
            return "No notes found.".to_string();
        }
        titles.join("\n")
    }

    pub fn render_titles_json(&self, titles: &[String]) -> Result<String> {
        serde_json::to_string_pretty(titles).context("Failed to serialize note titles to JSON")
    }

    /// The note content exactly as stored
    pub fn render_note(&self, note: &Note) -> String {
        note.content.clone()
    }

    pub fn render_note_json(&self, note: &Note) -> Result<String> {
        serde_json::to_string_pretty(note).context("Failed to serialize note to JSON")
    }

    #[instrument(level = "trace", ret)]
    pub fn render_save(&self, title: &str, outcome: SaveOutcome) -> String {
        let title = title.trim();
        match outcome {
            SaveOutcome::Created => format!("Saved note '{title}'."),
            SaveOutcome::Overwritten => format!("Overwrote note '{title}'."),
            SaveOutcome::Declined => format!("Kept existing note '{title}', nothing saved."),
        }
    }

    pub fn render_updated(&self, title: &str) -> String {
        format!("Updated note '{}'.", title.trim())
    }

    #[instrument(level = "trace", ret)]
    pub fn render_delete(&self, title: &str, outcome: DeleteOutcome) -> String {
        let title = title.trim();
        match outcome {
            DeleteOutcome::Deleted => format!("Deleted note '{title}'."),
            DeleteOutcome::Cancelled => format!("Kept note '{title}'."),
        }
    }
}
