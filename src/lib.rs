//! gitsi - an interactive terminal browser for the git status of a working tree.
//!
//! The list shows staged, unstaged and untracked changes in three sections. The
//! user moves a cursor over it, filters it, marks entries and stages, unstages,
//! discards or deletes them, or hands the terminal to `git diff`, `git add -p`
//! and `git commit`.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`StatusList`]: entries, filter, cursor and marks
//! - [`App`]: the input state machine
//! - [`Backend`] and [`Console`]: the seams to git and to the terminal
//! - [`GitRepo`]: the libgit2 backend
//! - Error handling and result types

pub mod commands;
pub mod core;
pub mod ui;

pub use core::{
    App, Backend, Category, Console, Entry, Flow, GitRepo, GitsiError, Invocation, Key, Mode,
    Result, Settings, StatusList, StatusRecord,
};
