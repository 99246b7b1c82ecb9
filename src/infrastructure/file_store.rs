// src/infrastructure/file_store.rs
use crate::application::NoteRepository;
use crate::constants::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use crate::domain::{ensure_content, DomainError, Note, NoteTitle};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, info, instrument, warn};

/// Notes stored as `<title>.txt` files in one flat directory.
///
/// The directory is created on first use. Every write goes to a scratch file
/// in the same directory which is then renamed over the note file, so a
/// reader sees either the old or the new content.
#[derive(Debug)]
pub struct FileNoteRepository {
    dir: PathBuf,
    dir_ready: bool,
}

enum WriteMode {
    CreateNew,
    Replace,
}

impl FileNoteRepository {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = PathBuf::from(dir.as_ref());
        debug!(?dir, "Creating new FileNoteRepository");
        Self {
            dir,
            dir_ready: false,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn note_path(&self, title: &NoteTitle) -> PathBuf {
        self.dir.join(title.file_name())
    }

    fn ensure_dir(&mut self) -> io::Result<()> {
        if !self.dir_ready {
            fs::create_dir_all(&self.dir)?;
            debug!(dir = ?self.dir, "Notes directory ready");
            self.dir_ready = true;
        }
        Ok(())
    }

    fn ensure_dir_for_read(&mut self) -> Result<(), DomainError> {
        self.ensure_dir()
            .map_err(|source| DomainError::StorageUnavailable {
                path: self.dir.clone(),
                source,
            })
    }

    fn ensure_dir_for_write(&mut self, title: &NoteTitle) -> Result<(), DomainError> {
        self.ensure_dir().map_err(|source| DomainError::StorageWrite {
            title: title.to_string(),
            source,
        })
    }

    fn write_note(
        &mut self,
        title: &NoteTitle,
        content: &str,
        mode: WriteMode,
    ) -> Result<(), DomainError> {
        self.ensure_dir_for_write(title)?;
        let write_error = |source| DomainError::StorageWrite {
            title: title.to_string(),
            source,
        };

        let mut scratch = Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(TEMP_FILE_SUFFIX)
            .tempfile_in(&self.dir)
            .map_err(write_error)?;
        scratch.write_all(content.as_bytes()).map_err(write_error)?;
        scratch.as_file().sync_all().map_err(write_error)?;

        let path = self.note_path(title);
        let persisted = match mode {
            WriteMode::CreateNew => scratch.persist_noclobber(&path),
            WriteMode::Replace => scratch.persist(&path),
        };
        match persisted {
            Ok(_) => Ok(()),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                // Scratch file is removed when `e.file` drops.
                Err(DomainError::Conflict(title.to_string()))
            }
            Err(e) => Err(write_error(e.error)),
        }
    }
}

impl NoteRepository for FileNoteRepository {
    #[instrument(level = "debug", skip(self), fields(dir = ?self.dir))]
    fn list_titles(&mut self) -> Result<Vec<String>, DomainError> {
        self.ensure_dir_for_read()?;
        let unavailable = |source| DomainError::StorageUnavailable {
            path: self.dir.clone(),
            source,
        };

        let mut titles = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            let is_file = entry
                .file_type()
                .map(|t| t.is_file())
                .map_err(unavailable)?;
            if !is_file {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                warn!(?file_name, "Skipping file with non UTF-8 name");
                continue;
            };
            match NoteTitle::from_file_name(name) {
                Some(title) => titles.push(title.to_string()),
                None => debug!(name, "Skipping non-note file"),
            }
        }

        titles.sort();
        debug!(count = titles.len(), "Listed notes");
        Ok(titles)
    }

    #[instrument(level = "debug", skip(self, content))]
    fn create_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        let title = NoteTitle::parse(title)?;
        ensure_content(content)?;

        if self.note_path(&title).exists() {
            debug!(%title, "Refusing to overwrite existing note");
            return Err(DomainError::Conflict(title.to_string()));
        }
        self.write_note(&title, content, WriteMode::CreateNew)?;

        info!(%title, bytes = content.len(), "Created note");
        Ok(())
    }

    #[instrument(level = "debug", skip(self, content))]
    fn overwrite_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        let title = NoteTitle::parse(title)?;
        ensure_content(content)?;

        self.write_note(&title, content, WriteMode::Replace)?;

        info!(%title, bytes = content.len(), "Saved note");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn read_note(&mut self, title: &str) -> Result<Note, DomainError> {
        let title = NoteTitle::parse(title)?;
        self.ensure_dir_for_read()?;

        let read_error = |source| DomainError::StorageRead {
            title: title.to_string(),
            source,
        };
        let bytes = match fs::read(self.note_path(&title)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(%title, "Note not found");
                return Err(DomainError::NotFound(title.to_string()));
            }
            Err(e) => return Err(read_error(e)),
        };
        let content = String::from_utf8(bytes)
            .map_err(|e| read_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        Ok(Note {
            title: title.to_string(),
            content,
        })
    }

    #[instrument(level = "debug", skip(self, content))]
    fn update_note(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        let title = NoteTitle::parse(title)?;
        ensure_content(content)?;
        self.ensure_dir_for_write(&title)?;

        if !self.note_path(&title).is_file() {
            debug!(%title, "Note not found for update");
            return Err(DomainError::NotFound(title.to_string()));
        }
        self.write_note(&title, content, WriteMode::Replace)?;

        info!(%title, bytes = content.len(), "Updated note");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, title: &str) -> Result<(), DomainError> {
        let title = NoteTitle::parse(title)?;
        self.ensure_dir_for_write(&title)?;

        match fs::remove_file(self.note_path(&title)) {
            Ok(()) => {
                info!(%title, "Deleted note");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(%title, "Note not found for deletion");
                Err(DomainError::NotFound(title.to_string()))
            }
            Err(source) => Err(DomainError::StorageWrite {
                title: title.to_string(),
                source,
            }),
        }
    }
}
