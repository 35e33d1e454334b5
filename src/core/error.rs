//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitsiError`] which covers every failure the browser can
//! hit. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the variants that carry context.
//!
//! # Public API
//! - [`GitsiError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitsiError>`
//!
//! # Error Categories
//! - **Repository open**: not a repository, bare repository
//! - **Backend mutation**: git2 failures, failing git CLI invocations, I/O
//! - **Empty status**: nothing to display, handled by the binary as a clean exit

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gitsi
#[derive(Error, Debug)]
pub enum GitsiError {
    // Repository open errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Could not report status on bare repository: {path}")]
    BareRepository { path: PathBuf },

    #[error("Repository has no working directory")]
    NoWorkdir,

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    // Process and file errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    // Status errors
    #[error("No entries found")]
    NothingToShow,
}

/// Convenience type alias for Results using GitsiError
pub type Result<T> = std::result::Result<T, GitsiError>;

impl GitsiError {
    /// Create a bare repository error
    pub fn bare_repository(path: impl Into<PathBuf>) -> Self {
        Self::BareRepository { path: path.into() }
    }

    /// Create a failed external command error
    pub fn command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Whether the binary should treat this error as a clean exit
    pub fn is_clean_exit(&self) -> bool {
        matches!(self, GitsiError::NothingToShow)
    }
}
