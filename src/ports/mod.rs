// src/ports/mod.rs
pub mod console;
pub mod prompt;

pub use console::ConsolePresenter;
pub use prompt::{AssumeYes, TerminalConfirm};
