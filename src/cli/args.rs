// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Notes directory (overrides the config file)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the titles of all notes
    List {
        /// Output titles as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the content of a note
    Show {
        /// Note title (file name without .txt)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a new note; asks before replacing an existing one
    New {
        /// Note title (file name without .txt)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Note text; read from --file or stdin if omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read note text from a file
        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Overwrite an existing note without asking
        #[arg(long)]
        force: bool,
    },

    /// Replace the content of an existing note
    Update {
        /// Note title (file name without .txt)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Note text; read from --file or stdin if omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read note text from a file
        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Delete a note
    Delete {
        /// Note title (file name without .txt)
        #[arg(value_name = "TITLE")]
        title: String,

        /// Delete without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the resolved notes directory
    Path,

    /// Write a config file; stores --dir as the notes directory if given
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}
