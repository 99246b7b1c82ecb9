// src/constants.rs
//
// Application-wide constants shared by the storage and configuration layers.

/// Extension of every note file. A note titled `todo` lives in `todo.txt`.
///
/// Used in: `domain/note.rs`
pub const NOTE_EXTENSION: &str = "txt";

/// Notes directory used when neither `--dir` nor the config file names one.
///
/// Relative paths resolve against the current working directory.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_NOTES_DIR: &str = "my_notes";

/// Sub-directory of the platform config dir holding our config file.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "plainnotes";

/// File name of the TOML configuration.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix and suffix of the scratch files a write goes through before it is
/// renamed onto the note file. They never match the note extension, so a
/// listing ignores them.
///
/// Used in: `infrastructure/file_store.rs`
pub const TEMP_FILE_PREFIX: &str = ".";
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

/// Longest file name, in bytes, that common file systems accept.
///
/// Used in: `domain/note.rs`
pub const MAX_FILE_NAME_BYTES: usize = 255;
