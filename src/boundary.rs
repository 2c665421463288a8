use std::fmt;

/// Warnings raised while looking for the remote parent branch of HEAD.
/// These are non-fatal: the resolver falls back and reports them on stderr.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// HEAD points directly at a commit
    HeadDetached,
    /// The nearest qualifying commit is on more than one tracking branch
    AmbiguousParent {
        commit_hash: String,
        branches: Vec<String>,
    },
    /// No tracking branch contains any commit of HEAD's history
    NoRemoteParent,
    /// The repository could not be opened or walked
    RepositoryUnavailable { reason: String },
    /// The configuration file could not be loaded
    InvalidConfig { reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::HeadDetached => write!(f, "HEAD is detached."),
            BoundaryWarning::AmbiguousParent {
                commit_hash,
                branches,
            } => {
                let short_hash = if commit_hash.len() > 7 {
                    &commit_hash[..7]
                } else {
                    commit_hash.as_str()
                };
                write!(
                    f,
                    "The active branch has two remote parent branches ({}) at {}.",
                    branches.join(", "),
                    short_hash
                )
            }
            BoundaryWarning::NoRemoteParent => write!(f, "No remote parent branch found."),
            BoundaryWarning::RepositoryUnavailable { reason } => {
                write!(f, "Cannot inspect git repository: {}", reason)
            }
            BoundaryWarning::InvalidConfig { reason } => {
                write!(f, "Ignoring configuration, using defaults: {}", reason)
            }
        }
    }
}
