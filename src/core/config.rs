//! Runtime settings resolved from the command line and the environment.
//!
//! There are no configuration files; everything is either a flag or an
//! environment variable.

use crate::commands::handoff::DEFAULT_PAGER;
use crate::core::dirs::default_log_file;
use std::path::PathBuf;

/// Environment variable overriding the diff pager
pub const PAGER_ENV: &str = "GITSI_PAGER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the repository is discovered from
    pub repo_dir: PathBuf,
    pub debug: bool,
    /// Explicit log destination; see [`Settings::log_path`]
    pub log_file: Option<PathBuf>,
    pub pager: String,
    /// Search term applied once at startup
    pub initial_search: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_dir: PathBuf::from("."),
            debug: false,
            log_file: None,
            pager: DEFAULT_PAGER.to_string(),
            initial_search: None,
        }
    }
}

impl Settings {
    /// Fill in what the environment provides
    pub fn with_env(mut self) -> Self {
        self.pager = pager_from(std::env::var(PAGER_ENV).ok());
        self
    }

    /// File the logger writes to
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_file)
    }
}

fn pager_from(value: Option<String>) -> String {
    value
        .filter(|pager| !pager.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PAGER.to_string())
}
