//! Terminal Input
//!
//! Prompts are behind the [`Prompter`] trait. On a terminal they are
//! rendered with `inquire`; when stdin is piped, the label is printed and one
//! line is read per question.

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use inquire::{InquireError, Text};

use crate::errors::{CommitBuddyError, Result};

/// Asks the user for a single line of text.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Shows `label` and returns the answer with surrounding whitespace removed.
    ///
    /// # Errors
    /// * `CommitBuddyError::UserCancelled` if the user aborts the prompt
    /// * `CommitBuddyError::InputClosed` if input ends before an answer
    fn ask(&mut self, label: &str) -> Result<String>;
}

/// Reads answers line by line from any buffered reader.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the next output off the prompt line
            writeln!(self.output)?;
            return Err(CommitBuddyError::InputClosed {
                field: label.to_string(),
            });
        }

        Ok(line.trim().to_string())
    }
}

/// Prompter bound to the process's own stdin and stdout.
pub enum TerminalPrompter {
    Interactive,
    Piped(LinePrompter<StdinLock<'static>, Stdout>),
}

impl TerminalPrompter {
    /// Picks `inquire` when both stdin and stdout are terminals.
    #[must_use]
    pub fn new() -> Self {
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            Self::Interactive
        } else {
            Self::Piped(LinePrompter::new(io::stdin().lock(), io::stdout()))
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str) -> Result<String> {
        match self {
            Self::Interactive => match Text::new(&format!("{label}:")).prompt() {
                Ok(answer) => Ok(answer.trim().to_string()),
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    Err(CommitBuddyError::UserCancelled)
                }
                Err(e) => Err(e.into()),
            },
            Self::Piped(prompter) => prompter.ask(label),
        }
    }
}
