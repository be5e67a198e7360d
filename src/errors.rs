use thiserror::Error;

use crate::domain::CommitType;

/// Main error type for the commitbuddy application
#[derive(Error, Debug)]
pub enum CommitBuddyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("Cannot use -t or -s flags with -c.")]
    ConflictingDefaults,

    #[error("No config found.")]
    NoDefaults,

    #[error("Usage: commitbuddy config -t <type> -s <scope>")]
    MissingConfigArgs,

    #[error("Invalid commit type '{0}'")]
    InvalidType(String),

    #[error("Input closed before a value was provided for '{field}'")]
    InputClosed { field: String },

    #[error("Operation cancelled by user")]
    UserCancelled,
}

impl CommitBuddyError {
    /// Short heading used when the error is reported on stderr.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration failure",
            Self::Git(_) => "Git failure",
            Self::Io(_) => "I/O failure",
            Self::Prompt(_) | Self::InputClosed { .. } | Self::UserCancelled => "No input",
            Self::ConflictingDefaults | Self::NoDefaults | Self::MissingConfigArgs => {
                "Invalid usage"
            }
            Self::InvalidType(_) => "Invalid commit type",
        }
    }

    /// A hint telling the user how to recover.
    #[must_use]
    pub fn suggestion(&self) -> String {
        match self {
            Self::ConflictingDefaults => {
                "Either pass -c alone, or give the type and scope explicitly.".to_string()
            }
            Self::NoDefaults => {
                "Save defaults first with `commitbuddy config -t <type> -s <scope>`.".to_string()
            }
            Self::MissingConfigArgs => "Provide at least one of -t or -s.".to_string(),
            Self::InvalidType(_) => format!("Valid types: {}", CommitType::list()),
            Self::Config(ConfigError::HomeDirNotFound) => {
                "Set the HOME environment variable and try again.".to_string()
            }
            Self::Git(GitError::RepositoryNotFound) => {
                "Please run this command from within a git repository.".to_string()
            }
            Self::Git(GitError::Spawn(_)) => "Make sure `git` is installed and on PATH.".to_string(),
            Self::InputClosed { .. } => {
                "Pass the value with a flag when stdin is not interactive.".to_string()
            }
            _ => "Fix the problem above and run the command again.".to_string(),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error while accessing config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine home directory - please set HOME environment variable")]
    HomeDirNotFound,

    #[error("Failed to replace config file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Not in a git repository - please run this command from within a git repository")]
    RepositoryNotFound,

    #[error("Git command failed: {command} ({status})")]
    CommandFailed { command: String, status: String },
}

/// Type alias for Result using `CommitBuddyError`
pub type Result<T> = std::result::Result<T, CommitBuddyError>;
