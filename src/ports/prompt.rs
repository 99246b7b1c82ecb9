// src/ports/prompt.rs
use crate::application::Confirm;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Yes/no prompt on a terminal. The default answer is "no".
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl TerminalConfirm<io::BufReader<io::Stdin>, io::Stderr> {
    /// Prompt on stderr so stdout stays reserved for note output.
    ///
    /// Stdin is locked per read only, so note text can still be read from it
    /// while this prompt exists.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} [y/N] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        self.ask(question).unwrap_or_else(|e| {
            warn!(error = %e, "Prompt failed, treating as no");
            false
        })
    }
}

/// Answers every question with "yes". Backs the `--force` and `--yes` flags.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}
