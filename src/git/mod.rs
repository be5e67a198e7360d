//! Git Operations Module
//!
//! The only contact point with the version-control executable: creating the
//! commit and checking that we are inside a repository.

pub mod commit;
pub mod repository;

pub use commit::{Committer, GitCommitter};
pub use repository::find_git_root;

#[cfg(test)]
pub use commit::MockCommitter;
