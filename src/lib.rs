pub mod artifact;
pub mod boundary;
pub mod config;
pub mod error;
pub mod fetch;
pub mod git;
pub mod resolver;
pub mod ui;

pub use error::{CiError, Result};
