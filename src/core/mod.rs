//! Core functionality for gitsi.
//!
//! This module holds the entry model, the filtered view, cursor and mark
//! handling, the input state machine and the git backend. Nothing here draws
//! to the terminal.

pub mod app;
pub mod backend;
pub mod config;
pub mod cursor;
pub mod dirs;
pub mod entry;
pub mod error;
pub mod filter;
pub mod fs_util;
pub mod git;
pub mod git_status;
pub mod keys;
pub mod marks;
pub mod mode;
pub mod output;
pub mod state;

// === Error handling ===
pub use error::{GitsiError, Result};

// === Git operations ===
// libgit2 status reading and path operations behind the Backend seam
pub use git::GitRepo;
pub use git_status::Category;

// === Entry model and list state ===
pub use entry::{Entry, EntryCollection, EntryId, StatusRecord};
pub use filter::FilteredView;
pub use state::StatusList;

// === Input handling ===
pub use app::{App, Flow};
pub use backend::{Backend, Console, Invocation};
pub use keys::{Command, Key, KeyBindings};
pub use mode::{Mode, Prompt};

// === Settings and output ===
pub use config::Settings;
pub use output::{print_error, print_info};
