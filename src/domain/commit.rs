use std::fmt;

use super::CommitType;

/// A fully resolved commit header, built fresh for every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSpec {
    pub commit_type: CommitType,
    /// Optional scope; empty means "no scope".
    pub scope: String,
    pub message: String,
}

impl CommitSpec {
    #[must_use]
    pub fn new(
        commit_type: CommitType,
        scope: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            commit_type,
            scope: scope.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CommitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scope.is_empty() {
            write!(f, "{}: {}", self.commit_type, self.message)
        } else {
            write!(f, "{}({}): {}", self.commit_type, self.scope, self.message)
        }
    }
}
