//! Repository Detection

use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use crate::errors::{GitError, Result};

/// Finds the `.git` directory of the repository containing the current directory.
///
/// Runs `git rev-parse --git-dir`, which works from any subdirectory.
///
/// # Errors
/// * `GitError::Spawn` if git cannot be started
/// * `GitError::RepositoryNotFound` if the current directory is not inside a repository
///
/// # Examples
///
/// ```no_run
/// use commitbuddy::git::find_git_root;
///
/// match find_git_root() {
///     Ok(git_dir) => println!("Git directory: {}", git_dir.display()),
///     Err(e) => eprintln!("Not in a git repository: {e}"),
/// }
/// ```
pub fn find_git_root() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .stdin(Stdio::null())
        .output()
        .map_err(GitError::Spawn)?;

    if !output.status.success() {
        return Err(GitError::RepositoryNotFound.into());
    }

    let git_root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());

    if git_root.exists() {
        Ok(git_root)
    } else {
        Err(GitError::RepositoryNotFound.into())
    }
}
