mod commit;
mod commit_type;

pub use commit::CommitSpec;
pub use commit_type::CommitType;
