use crate::error::{CiError, Result};
use crate::git::{BranchHistory, CommitGraph, HeadState};
use git2::{BranchType, Oid, Repository as Git2Repo, Sort};
use std::collections::HashSet;
use std::path::Path;

/// Wrapper around git2::Repository that produces [CommitGraph] snapshots
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Snapshot HEAD and every local branch.
    ///
    /// A detached HEAD short-circuits: the resolver gives up on it, so no
    /// history is walked.
    ///
    /// # Returns
    /// * `Ok(CommitGraph)` - Head state, HEAD history (newest first) and branch histories
    /// * `Err` - If the repository is bare, HEAD is unborn, or a walk fails
    pub fn commit_graph(&self) -> Result<CommitGraph> {
        if self.repo.is_bare() {
            return Err(CiError::git("cannot resolve branches in a bare repository"));
        }

        if self.repo.head_detached()? {
            return Ok(CommitGraph {
                head: HeadState::Detached,
                head_history: Vec::new(),
                branches: Vec::new(),
            });
        }

        let head = self.repo.head()?;
        let active = head
            .shorthand()
            .ok_or_else(|| CiError::git("HEAD branch name is not valid UTF-8"))?
            .to_string();
        let head_oid = head
            .target()
            .ok_or_else(|| CiError::git("HEAD has no target"))?;

        let head_history = self.history_from(head_oid)?;

        let mut branches = Vec::new();
        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;

            // Branches with non UTF-8 names cannot be turned into a tag
            let name = match branch.name()? {
                Some(name) => name.to_string(),
                None => continue,
            };
            let reference = branch.get();
            let tip = match reference.target() {
                Some(oid) => oid,
                None => continue,
            };

            let upstream = reference.name().and_then(|refname| {
                self.repo
                    .branch_upstream_name(refname)
                    .ok()
                    .and_then(|buf| buf.as_str().map(|s| s.to_string()))
            });

            branches.push(BranchHistory {
                name,
                commits: self.history_from(tip)?.into_iter().collect::<HashSet<_>>(),
                upstream,
            });
        }

        Ok(CommitGraph {
            head: HeadState::Branch(active),
            head_history,
            branches,
        })
    }

    /// Every commit reachable from `tip`, newest first
    fn history_from(&self, tip: Oid) -> Result<Vec<Oid>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(tip)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            commits.push(oid_result?);
        }

        Ok(commits)
    }
}
