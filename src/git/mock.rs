use crate::git::{BranchHistory, CommitGraph, HeadState};
use git2::Oid;

/// Deterministic object id for hand-built histories
pub fn oid(n: u8) -> Oid {
    // from_bytes only fails on a wrong length
    Oid::from_bytes(&[n; 20]).unwrap_or_else(|_| Oid::zero())
}

/// Builder for [CommitGraph] snapshots without a real repository
pub struct MockGraph {
    head: HeadState,
    head_history: Vec<Oid>,
    branches: Vec<BranchHistory>,
}

impl MockGraph {
    /// Start a graph whose HEAD history is `head_history`, newest first.
    ///
    /// HEAD starts out on a branch called `HEAD-branch` until
    /// [MockGraph::on_branch] or [MockGraph::detached] is called.
    pub fn new(head_history: &[Oid]) -> Self {
        MockGraph {
            head: HeadState::Branch("HEAD-branch".to_string()),
            head_history: head_history.to_vec(),
            branches: Vec::new(),
        }
    }

    /// Check out `name`, registering it as an untracked branch at HEAD if absent
    pub fn on_branch(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.branches.iter().any(|b| b.name == name) {
            let commits = self.head_history.iter().copied().collect();
            self.branches.push(BranchHistory {
                name: name.clone(),
                commits,
                upstream: None,
            });
        }
        self.head = HeadState::Branch(name);
        self
    }

    pub fn detached(mut self) -> Self {
        self.head = HeadState::Detached;
        self
    }

    /// Add (or replace) a local branch whose history is `commits`
    pub fn branch(mut self, name: impl Into<String>, commits: &[Oid], tracking: bool) -> Self {
        let name = name.into();
        let upstream = tracking.then(|| format!("refs/remotes/origin/{}", name));
        self.branches.retain(|b| b.name != name);
        self.branches.push(BranchHistory {
            name,
            commits: commits.iter().copied().collect(),
            upstream,
        });
        self
    }

    pub fn build(self) -> CommitGraph {
        CommitGraph {
            head: self.head,
            head_history: self.head_history,
            branches: self.branches,
        }
    }
}
