use thiserror::Error;

/// Unified error type for the CI support tools
#[derive(Error, Debug)]
pub enum CiError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP request rejected: {0}")]
    HttpStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in ci-support
pub type Result<T> = std::result::Result<T, CiError>;

impl From<reqwest::Error> for CiError {
    fn from(err: reqwest::Error) -> Self {
        CiError::Http(err.to_string())
    }
}

impl CiError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CiError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        CiError::Version(msg.into())
    }

    /// Create an HTTP error with context
    pub fn http(msg: impl Into<String>) -> Self {
        CiError::Http(msg.into())
    }

    /// Create an error for a response with a non-success status
    pub fn http_status(msg: impl Into<String>) -> Self {
        CiError::HttpStatus(msg.into())
    }

    /// Create a git error from a plain message
    pub fn git(msg: impl AsRef<str>) -> Self {
        CiError::Git(git2::Error::from_str(msg.as_ref()))
    }
}
