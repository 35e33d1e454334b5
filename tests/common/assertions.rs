//! Predicates for the messages the binary prints outside the terminal UI

#![allow(dead_code)]

use predicates::prelude::*;

/// Error printed when no repository is found
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Error printed for a repository without a work tree
pub fn bare_repository() -> impl Predicate<str> {
    predicates::str::contains("Could not report status on bare repository")
}

/// Clean-exit message for an empty status
pub fn no_entries() -> impl Predicate<str> {
    predicates::str::contains("No entries found")
}

/// Prefix of every error line
pub fn is_error() -> impl Predicate<str> {
    predicates::str::contains("Error:")
}
