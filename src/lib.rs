// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use application::{
    Confirm, DeleteOutcome, NoteDeleter, NoteLister, NoteRepository, NoteSaver, NoteUpdater,
    NoteViewer, SaveOutcome,
};
use infrastructure::config::{default_config_path, Config, StorageConfig};
use infrastructure::FileNoteRepository;
use ports::{AssumeYes, ConsolePresenter, TerminalConfirm};
use tracing::{debug, info};
use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting plainnotes with arguments");

    if let Command::Init { force } = args.command {
        let path = init_config(args.config.as_deref(), args.dir.as_deref(), force)?;
        println!("Wrote config file {}", path.display());
        return Ok(());
    }

    // Initialize infrastructure
    let notes_dir = resolve_notes_dir(args.dir.as_deref(), args.config.as_deref())?;
    if let Command::Path = args.command {
        println!("{}", notes_dir.display());
        return Ok(());
    }
    info!(?notes_dir, "Using notes directory");
    let mut repository = FileNoteRepository::new(&notes_dir);

    // Initialize presentation
    let mut confirm = TerminalConfirm::stdio();
    let mut out = io::stdout().lock();

    execute(args.command, &mut repository, &mut confirm, &mut out)
}

/// Run one command against a repository, writing user-facing output to `out`
pub fn execute<R, C, W>(
    command: Command,
    repository: &mut R,
    confirm: &mut C,
    out: &mut W,
) -> Result<()>
where
    R: NoteRepository,
    C: Confirm,
    W: Write,
{
    let presenter = ConsolePresenter::new();

    match command {
        Command::List { json } => {
            let titles = NoteLister::new(&mut *repository)
                .list_titles()
                .context("Failed to list notes")?;
            if json {
                writeln!(out, "{}", presenter.render_titles_json(&titles)?)?;
            } else {
                writeln!(out, "{}", presenter.render_titles(&titles))?;
            }
        }
        Command::Show { title, json } => {
            let note = NoteViewer::new(&mut *repository)
                .view_note(&title)
                .with_context(|| format!("Failed to load note '{}'", title.trim()))?;
            if json {
                writeln!(out, "{}", presenter.render_note_json(&note)?)?;
            } else {
                let text = presenter.render_note(&note);
                write!(out, "{text}")?;
                if !text.ends_with('\n') {
                    writeln!(out)?;
                }
            }
        }
        Command::New {
            title,
            text,
            file,
            force,
        } => {
            let content = read_content(text, file.as_deref())?;
            let mut saver = NoteSaver::new(&mut *repository);
            let outcome = if force {
                saver.save_forced(&title, &content)
            } else {
                saver.save(&title, &content, confirm)
            }
            .with_context(|| format!("Failed to save note '{}'", title.trim()))?;

            writeln!(out, "{}", presenter.render_save(&title, outcome))?;
            if outcome != SaveOutcome::Declined {
                print_titles(repository, &presenter, out)?;
            }
        }
        Command::Update { title, text, file } => {
            let content = read_content(text, file.as_deref())?;
            NoteUpdater::new(&mut *repository)
                .update_note(&title, &content)
                .with_context(|| format!("Failed to update note '{}'", title.trim()))?;
            writeln!(out, "{}", presenter.render_updated(&title))?;
        }
        Command::Delete { title, yes } => {
            let mut deleter = NoteDeleter::new(&mut *repository);
            let outcome = if yes {
                deleter.delete(&title, &mut AssumeYes)
            } else {
                deleter.delete(&title, confirm)
            }
            .with_context(|| format!("Failed to delete note '{}'", title.trim()))?;

            writeln!(out, "{}", presenter.render_delete(&title, outcome))?;
            if outcome == DeleteOutcome::Deleted {
                print_titles(repository, &presenter, out)?;
            }
        }
        Command::Path | Command::Init { .. } => {}
    }

    Ok(())
}

/// Refreshed listing shown after a note was added or removed
fn print_titles<R: NoteRepository, W: Write>(
    repository: &mut R,
    presenter: &ConsolePresenter,
    out: &mut W,
) -> Result<()> {
    let titles = repository.list_titles().context("Failed to list notes")?;
    writeln!(out, "{}", presenter.render_titles(&titles))?;
    Ok(())
}

/// Note text from the command line, a file, or stdin, in that order
pub fn read_content(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read note text from {}", path.display()));
    }
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read note text from stdin")?;
    Ok(content)
}

/// Pick the notes directory: `--dir`, then the config file, then the default
pub fn resolve_notes_dir(dir: Option<&Path>, config: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        debug!(?dir, "Using provided notes directory");
        return Ok(dir.to_path_buf());
    }

    let config = match config {
        Some(path) => {
            debug!(?path, "Using provided config file");
            Config::load(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => match default_config_path() {
            Some(path) => Config::load_or_default(path)?,
            None => Config::default(),
        },
    };

    Ok(config.storage.notes_dir)
}

/// Write a config file at `config` or the platform default location
///
/// Without `dir` the defaults are written. An existing file is only replaced
/// when `force` is set.
pub fn init_config(config: Option<&Path>, dir: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => default_config_path().context("Could not determine the config directory")?,
    };
    if path.exists() && !force {
        bail!(
            "Config file {} already exists, use --force to replace it",
            path.display()
        );
    }

    match dir {
        Some(dir) => Config {
            storage: StorageConfig {
                notes_dir: dir.to_path_buf(),
            },
        }
        .save(&path)
        .with_context(|| format!("Failed to write config file {}", path.display()))?,
        None => {
            Config::create_default(&path)
                .with_context(|| format!("Failed to write config file {}", path.display()))?;
        }
    }

    info!(?path, "Wrote config file");
    Ok(path)
}
