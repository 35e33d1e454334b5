//! Collaborator seams of the browser.
//!
//! [`Backend`] is the version-control side, [`Console`] the terminal side. The
//! app only talks to these traits, so tests drive it with in-memory fakes.

use crate::core::entry::StatusRecord;
use crate::core::error::Result;
use crate::core::mode::Mode;

/// An external program run with the terminal handed over to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Shell-like rendering for logs
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Version-control operations the browser needs
pub trait Backend {
    /// Current status as records grouped by category
    fn status(&mut self) -> Result<Vec<StatusRecord>>;

    /// Add a file, directory or deletion to the index
    fn stage(&mut self, label: &str) -> Result<()>;

    /// Reset a staged path back to its HEAD state in the index
    fn unstage_from_index(&mut self, label: &str) -> Result<()>;

    /// Remove a path from the index
    fn unstage_from_workspace(&mut self, label: &str) -> Result<()>;

    /// Restore a file deleted in the work tree from HEAD
    fn discard_workspace_deletion(&mut self, label: &str) -> Result<()>;

    /// Remove an untracked file or directory from disk, best effort
    fn delete_untracked(&mut self, label: &str);

    /// Drop every change to a path, index and work tree
    fn checkout(&mut self, label: &str) -> Result<()>;

    /// Run a program in the work tree and wait for it; its exit status is ignored
    fn run_interactive(&mut self, invocation: &Invocation) -> Result<()>;

    /// Run `git <text>` in the work tree and wait for it
    fn run_external_command(&mut self, text: &str) -> Result<()>;
}

/// Terminal services used while a command runs
pub trait Console {
    /// Block until the user answers the prompt of a [`Mode::ConfirmDialog`]
    /// with yes or no. Any other mode answers no.
    fn confirm(&mut self, mode: &mut Mode) -> Result<bool>;

    /// Give the terminal to an external process
    fn suspend(&mut self) -> Result<()>;

    /// Take the terminal back and repaint everything
    fn resume(&mut self) -> Result<()>;
}
