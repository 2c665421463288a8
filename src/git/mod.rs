//! Commit graph model used by the branch tag resolver
//!
//! The resolver works on a [CommitGraph] snapshot rather than on a live
//! repository, so the search can be tested against hand-built histories.
//!
//! - [repository::Git2Repository]: loads a snapshot from a real repository via `git2`
//! - [mock::MockGraph]: builds snapshots by hand for tests
//!
//! ```rust
//! # use ci_support::git::Git2Repository;
//! # fn example() -> ci_support::Result<()> {
//! let repo = Git2Repository::open(".")?;
//! let graph = repo.commit_graph()?;
//! println!("{} commits behind HEAD", graph.head_history.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockGraph;
pub use repository::Git2Repository;

use git2::Oid;
use std::collections::HashSet;

/// What HEAD points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    /// HEAD points directly at a commit
    Detached,
    /// HEAD points at the named local branch
    Branch(String),
}

/// A local branch and every commit reachable from its tip
#[derive(Debug, Clone, PartialEq)]
pub struct BranchHistory {
    pub name: String,
    pub commits: HashSet<Oid>,
    /// Configured upstream reference, e.g. `refs/remotes/origin/master`
    pub upstream: Option<String>,
}

impl BranchHistory {
    pub fn contains(&self, oid: &Oid) -> bool {
        self.commits.contains(oid)
    }

    pub fn is_tracking(&self) -> bool {
        self.upstream.is_some()
    }
}

/// Snapshot of HEAD and the local branches of a repository
#[derive(Debug, Clone, PartialEq)]
pub struct CommitGraph {
    pub head: HeadState,
    /// Commits reachable from HEAD, newest first
    pub head_history: Vec<Oid>,
    pub branches: Vec<BranchHistory>,
}

impl CommitGraph {
    pub fn is_detached(&self) -> bool {
        self.head == HeadState::Detached
    }

    /// Name of the checked out branch, `None` when detached
    pub fn active_branch(&self) -> Option<&str> {
        match &self.head {
            HeadState::Branch(name) => Some(name),
            HeadState::Detached => None,
        }
    }

    /// The commit HEAD points at
    pub fn head_commit(&self) -> Option<Oid> {
        self.head_history.first().copied()
    }
}
