//! Persisted Defaults for commitbuddy
//!
//! This module handles the per-user defaults file, including
//! - Locating the file in the user's home directory
//! - Parsing its `key=value` lines into [`Defaults`]
//! - Overwriting it when new defaults are saved
//!
//! # File Format
//!
//! The file lives at `~/.commitbuddy.config` and holds up to two lines:
//!
//! ```text
//! type=feat
//! scope=api
//! ```
//!
//! Reading is forgiving: a missing file, an unknown home directory or an
//! unreadable file all mean "no defaults". Writing is strict and replaces
//! the whole file in one rename, following a symlinked file to its target.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{ConfigError, Result};

pub const CONFIG_FILE_NAME: &str = ".commitbuddy.config";

const TYPE_KEY: &str = "type";
const SCOPE_KEY: &str = "scope";

/// Commit type and scope reused across invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    pub commit_type: Option<String>,
    pub scope: Option<String>,
}

impl Defaults {
    /// Builds defaults from raw values, dropping the empty ones.
    #[must_use]
    pub fn from_values(commit_type: &str, scope: &str) -> Self {
        Self {
            commit_type: non_empty(commit_type),
            scope: non_empty(scope),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commit_type.is_none() && self.scope.is_none()
    }

    /// Renders the defaults back into the file format, `type` first.
    #[must_use]
    pub fn render(&self) -> String {
        let mut content = String::new();

        if let Some(commit_type) = &self.commit_type {
            content.push_str(&format!("{TYPE_KEY}={commit_type}\n"));
        }
        if let Some(scope) = &self.scope {
            content.push_str(&format!("{SCOPE_KEY}={scope}\n"));
        }

        content
    }
}

/// Parses the content of a defaults file.
///
/// Lines are trimmed before matching. `type=` and `scope=` lines set their
/// field, a later line overriding an earlier one. Everything else (blank
/// lines, `#` comments, unknown keys) is skipped.
#[must_use]
pub fn parse_defaults(content: &str) -> Defaults {
    let mut defaults = Defaults::default();

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        match key {
            TYPE_KEY => defaults.commit_type = non_empty(value),
            SCOPE_KEY => defaults.scope = non_empty(value),
            _ => debug!(key, "ignoring unknown config key"),
        }
    }

    defaults
}

/// Handles reading and writing of the defaults file
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Creates a new Config rooted at the user's home directory
    ///
    /// # Errors
    /// * When the home directory cannot be determined
    pub fn new() -> Result<Self> {
        let root = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Config { root })
    }

    /// Creates a new Config instance with a custom root path
    ///
    /// # Arguments
    /// * `root` - The directory holding the defaults file
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into() }
    }

    /// Returns the path to the defaults file
    #[must_use]
    pub fn get_config_file_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Reads the saved defaults. Any failure yields empty defaults.
    #[must_use]
    pub fn load_defaults(&self) -> Defaults {
        let config_file = self.get_config_file_path();

        match fs::read_to_string(&config_file) {
            Ok(content) => parse_defaults(&content),
            Err(e) => {
                debug!(path = %config_file.display(), error = %e, "no defaults loaded");
                Defaults::default()
            }
        }
    }

    /// Overwrites the defaults file with the non-empty values given.
    ///
    /// # Arguments
    /// * `commit_type` - The default commit type, or `""` to leave it unset
    /// * `scope` - The default scope, or `""` to leave it unset
    ///
    /// When the defaults file is a symlink, its target is replaced and the
    /// link is left in place. The replacement keeps the old file's
    /// permissions; a brand new file gets mode 0644 on Unix.
    ///
    /// # Errors
    /// * If the temporary file cannot be created or written
    /// * If it cannot replace the existing defaults file
    pub fn save_defaults(&self, commit_type: &str, scope: &str) -> Result<()> {
        let defaults = Defaults::from_values(commit_type, scope);
        let config_file = self.get_config_file_path();

        // Dangling or missing links resolve to the path itself
        let target = fs::canonicalize(&config_file).unwrap_or_else(|_| config_file.clone());
        let target_dir = target.parent().unwrap_or(self.root.as_path());

        let mut staged = NamedTempFile::new_in(target_dir).map_err(ConfigError::Io)?;
        staged
            .write_all(defaults.render().as_bytes())
            .map_err(ConfigError::Io)?;
        copy_permissions(&target, staged.as_file()).map_err(ConfigError::Io)?;
        staged.persist(&target).map_err(ConfigError::Persist)?;

        debug!(path = %target.display(), "defaults saved");

        Ok(())
    }
}

/// Gives `staged` the permissions of `target`, or the default file mode
/// when `target` does not exist yet.
fn copy_permissions(target: &Path, staged: &File) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) => staged.set_permissions(metadata.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => default_permissions(staged),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn default_permissions(staged: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    staged.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_staged: &File) -> io::Result<()> {
    Ok(())
}

/// Loads the defaults from the user's home directory, or empty ones when
/// the home directory is unknown.
#[must_use]
pub fn load_defaults() -> Defaults {
    match Config::new() {
        Ok(config) => config.load_defaults(),
        Err(e) => {
            debug!(error = %e, "no defaults loaded");
            Defaults::default()
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
