//! Commit Operations
//!
//! Hands a composed message over to `git commit`.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::{GitError, Result};

/// Something that can record a commit with a given message.
///
/// The composer only talks to this trait, so it can be exercised without a
/// repository.
#[cfg_attr(test, mockall::automock)]
pub trait Committer {
    /// Creates a commit with `message` as its full commit message.
    ///
    /// # Errors
    /// * If the commit could not be created
    fn commit(&self, message: &str) -> Result<()>;
}

/// Runs the real `git` executable.
#[derive(Debug, Clone)]
pub struct GitCommitter {
    program: String,
}

impl Default for GitCommitter {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

impl GitCommitter {
    /// Uses `program` instead of `git` from `PATH`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Committer for GitCommitter {
    /// Runs `git commit -m <message>`.
    ///
    /// Standard input, output and error are inherited, so hooks, signing
    /// prompts and git's own summary reach the terminal unchanged.
    ///
    /// # Errors
    /// * `GitError::Spawn` if the program cannot be started
    /// * `GitError::CommandFailed` if it exits unsuccessfully
    fn commit(&self, message: &str) -> Result<()> {
        debug!(program = %self.program, commit_message = message, "running commit");

        let status = Command::new(&self.program)
            .args(["commit", "-m", message])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(GitError::Spawn)?;

        if status.success() {
            Ok(())
        } else {
            Err(GitError::CommandFailed {
                command: format!("{} commit -m \"{message}\"", self.program),
                status: status.to_string(),
            }
            .into())
        }
    }
}
