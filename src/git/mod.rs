mod diff;
mod repo;
mod snapshot;

pub use diff::{DiffStatLine, StagedDiff, parse_nul_paths, parse_numstat};
pub use repo::GitRepo;
pub use snapshot::{ContentSnapshotter, Revision, Snapshot};

/// Program used for every version-control query.
pub const GIT_PROGRAM: &str = "git";

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
