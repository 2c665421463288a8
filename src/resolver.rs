//! Branch-specific Docker image tag resolution.
//!
//! The tag comes from the nearest local branch with an upstream that
//! contains HEAD's history, then from an environment variable, then from a
//! fixed default.

use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::config::TagConfig;
use crate::git::{CommitGraph, Git2Repository};

/// Outcome of the remote parent branch search
#[derive(Debug, Clone, PartialEq)]
pub enum ParentLookup {
    Found(String),
    Detached,
    Ambiguous {
        commit_hash: String,
        branches: Vec<String>,
    },
    NotFound,
}

impl ParentLookup {
    pub fn branch(&self) -> Option<&str> {
        match self {
            ParentLookup::Found(name) => Some(name),
            _ => None,
        }
    }

    /// Warning to report when the search failed
    pub fn warning(&self) -> Option<BoundaryWarning> {
        match self {
            ParentLookup::Found(_) => None,
            ParentLookup::Detached => Some(BoundaryWarning::HeadDetached),
            ParentLookup::Ambiguous {
                commit_hash,
                branches,
            } => Some(BoundaryWarning::AmbiguousParent {
                commit_hash: commit_hash.clone(),
                branches: branches.clone(),
            }),
            ParentLookup::NotFound => Some(BoundaryWarning::NoRemoteParent),
        }
    }
}

/// Finds the nearest tracking branch that HEAD was branched from.
///
/// Walks HEAD's history newest first. For each commit the candidates are
/// the local branches that contain it, have an upstream, and are not the
/// checked out branch (the checked out branch only counts at the HEAD
/// commit itself). The first commit with exactly one candidate decides;
/// a commit with several candidates makes the search ambiguous.
pub fn find_remote_parent_branch(graph: &CommitGraph) -> ParentLookup {
    if graph.is_detached() {
        return ParentLookup::Detached;
    }

    let head_commit = graph.head_commit();
    let active = graph.active_branch();

    for commit in &graph.head_history {
        let is_head = Some(*commit) == head_commit;
        let candidates: Vec<&str> = graph
            .branches
            .iter()
            .filter(|b| b.contains(commit))
            .filter(|b| is_head || Some(b.name.as_str()) != active)
            .filter(|b| b.is_tracking())
            .map(|b| b.name.as_str())
            .collect();

        match candidates.as_slice() {
            [] => continue,
            [single] => return ParentLookup::Found(single.to_string()),
            _ => {
                return ParentLookup::Ambiguous {
                    commit_hash: commit.to_string(),
                    branches: candidates.iter().map(|s| s.to_string()).collect(),
                }
            }
        }
    }

    ParentLookup::NotFound
}

/// Where the final tag came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSource {
    RemoteParent,
    Environment,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagDecision {
    pub tag: String,
    pub source: TagSource,
}

/// Turns a branch name into an image tag: `release/1.0` becomes `release-1.0-latest`.
pub fn branch_latest_tag(branch: &str, suffix: &str) -> String {
    format!("{}{}", branch.replace('/', "-"), suffix)
}

/// Applies the fallback chain: remote parent, environment branch, default.
///
/// An empty environment value counts as unset.
pub fn resolve_tag(lookup: &ParentLookup, env_branch: Option<&str>, settings: &TagConfig) -> TagDecision {
    if let Some(branch) = lookup.branch() {
        return TagDecision {
            tag: branch_latest_tag(branch, &settings.suffix),
            source: TagSource::RemoteParent,
        };
    }

    match env_branch.filter(|b| !b.is_empty()) {
        Some(branch) => TagDecision {
            tag: branch_latest_tag(branch, &settings.suffix),
            source: TagSource::Environment,
        },
        None => TagDecision {
            tag: settings.default_tag.clone(),
            source: TagSource::Default,
        },
    }
}

/// Diagnostic line for a fallback decision, `None` when a remote parent was found.
///
/// A variable that is set but empty is reported as such.
pub fn fallback_note(decision: &TagDecision, env_branch: Option<&str>, settings: &TagConfig) -> Option<String> {
    let env = &settings.fallback_env;
    match (decision.source, env_branch) {
        (TagSource::RemoteParent, _) => None,
        (TagSource::Environment, _) => Some(format!("Detected {} environment variable.", env)),
        (TagSource::Default, Some(_)) => Some(format!(
            "{} environment variable is empty, falling back to the {} docker.",
            env, settings.default_tag
        )),
        (TagSource::Default, None) => Some(format!(
            "No {} environment variable, falling back to the {} docker.",
            env, settings.default_tag
        )),
    }
}

/// Runs the parent branch search on the repository containing `repo_path`.
///
/// Never fails: an unusable repository is reported as a warning and
/// treated as having no remote parent.
///
/// # Returns
/// The lookup result and the warnings to report, in order
pub fn lookup_parent_branch<P: AsRef<Path>>(repo_path: P) -> (ParentLookup, Vec<BoundaryWarning>) {
    let graph = Git2Repository::open(repo_path).and_then(|repo| repo.commit_graph());

    match graph {
        Ok(graph) => {
            let lookup = find_remote_parent_branch(&graph);
            let warnings = lookup.warning().into_iter().collect();
            (lookup, warnings)
        }
        Err(e) => (
            ParentLookup::NotFound,
            vec![
                BoundaryWarning::RepositoryUnavailable {
                    reason: e.to_string(),
                },
                BoundaryWarning::NoRemoteParent,
            ],
        ),
    }
}
