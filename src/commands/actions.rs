//! Per-entry actions shared by the single-entry keys and their batch forms.
//!
//! An [`Action`] decides which backend call fits an entry's category. The app
//! runs it on the selected entry, or on every marked entry through
//! [`StatusList::apply_to_marked`](crate::core::StatusList::apply_to_marked).

use crate::core::app::Dialog;
use crate::core::backend::Backend;
use crate::core::entry::Entry;
use crate::core::error::Result;
use crate::core::git_status::Category;

/// Note the backend gives a work-tree deletion
const DELETED_NOTE: &str = "deleted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add the entry to the index
    Stage,
    /// Undo the entry's change at its level; deletes untracked files
    Unstage,
    /// Drop every change to the entry
    Checkout,
    /// Remove an untracked entry from disk after confirmation
    Delete,
}

impl Action {
    pub fn apply(self, backend: &mut dyn Backend, dialog: &mut Dialog<'_>, entry: &Entry) -> Result<()> {
        log::debug!("{:?} on {} ({})", self, entry.label, entry.category);

        match (self, entry.category) {
            (_, Category::Header) => Ok(()),

            (Action::Stage, _) => backend.stage(&entry.label),

            (Action::Unstage, Category::Index) => backend.unstage_from_index(&entry.label),
            (Action::Unstage, Category::Workspace) if entry.note == DELETED_NOTE => {
                backend.discard_workspace_deletion(&entry.label)
            }
            (Action::Unstage, Category::Workspace) => backend.unstage_from_workspace(&entry.label),
            (Action::Unstage, Category::Untracked) => Action::Delete.apply(backend, dialog, entry),

            (Action::Checkout, Category::Untracked) => Ok(()),
            (Action::Checkout, _) => backend.checkout(&entry.label),

            (Action::Delete, Category::Untracked) => {
                let question = format!("Delete File '{}'?", entry.label);
                if dialog.ask(&question)? {
                    backend.delete_untracked(&entry.label);
                }
                Ok(())
            }
            (Action::Delete, _) => Ok(()),
        }
    }

    /// Status-bar names of the `s` and `u` keys on `category`
    pub fn key_names(category: Category) -> (&'static str, &'static str) {
        match category {
            Category::Header => ("", ""),
            Category::Index => ("", "unstage"),
            Category::Workspace => ("stage", "stage delete"),
            Category::Untracked => ("stage", "delete file"),
        }
    }
}
