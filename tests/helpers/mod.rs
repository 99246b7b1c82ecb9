use plainnotes::infrastructure::FileNoteRepository;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for working with a temporary notes directory
#[allow(dead_code)]
pub struct TestNotesDir {
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub notes_dir: PathBuf,
}

#[allow(dead_code)]
impl TestNotesDir {
    /// Create a fixture whose notes directory does not exist yet
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let root = temp_dir.path().to_path_buf();
        let notes_dir = root.join("my_notes");
        Self {
            _temp_dir: temp_dir,
            root,
            notes_dir,
        }
    }

    /// Create a fixture pre-populated with `<title>.txt` files
    pub fn with_notes(notes: &[(&str, &str)]) -> Self {
        let fixture = Self::new();
        fs::create_dir_all(&fixture.notes_dir).expect("Failed to create notes directory");
        for (title, content) in notes {
            fs::write(fixture.note_path(title), content).expect("Failed to write note fixture");
        }
        fixture
    }

    /// Open repository for this notes directory
    pub fn open_repository(&self) -> FileNoteRepository {
        FileNoteRepository::new(&self.notes_dir)
    }

    pub fn note_path(&self, title: &str) -> PathBuf {
        self.notes_dir.join(format!("{title}.txt"))
    }

    /// Names of everything under the temp root, notes directory included
    pub fn all_files(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_files(&self.root, &self.root, &mut names);
        names.sort();
        names
    }
}

fn collect_files(base: &Path, dir: &Path, names: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(base, &path, names);
        } else if let Ok(relative) = path.strip_prefix(base) {
            names.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}
