//! Marking: single entries, whole sections, visual drag-marking and batch apply.
//!
//! Marks live on the entries of the full collection, so entries hidden by the
//! current filter keep their marks and take part in batch actions.

use crate::core::entry::{Entry, EntryId};
use crate::core::error::Result;
use crate::core::state::StatusList;

impl StatusList {
    /// Mark the selectable entry at view index `index`
    pub(crate) fn mark_at(&mut self, index: usize) {
        let Some(position) = self.view.position(index) else {
            return;
        };
        if let Some(entry) = self.collection.get_mut(position) {
            if entry.is_selectable() {
                entry.marked = true;
            }
        }
    }

    /// Flip the mark of one entry; headers and unknown ids are ignored
    pub fn toggle_mark(&mut self, id: EntryId) {
        if let Some(entry) = self.collection.find_mut(id) {
            if entry.is_selectable() {
                entry.marked = !entry.marked;
            }
        }
    }

    pub fn toggle_mark_current(&mut self) {
        if let Some(id) = self.cursor {
            self.toggle_mark(id);
        }
    }

    /// Set every entry of `id`'s category to the opposite of `id`'s own mark
    pub fn toggle_section(&mut self, id: EntryId) {
        let Some(entry) = self.collection.find(id) else {
            return;
        };
        if !entry.is_selectable() {
            return;
        }
        let category = entry.category;
        let target = !entry.marked;

        for entry in self.collection.iter_mut() {
            if entry.category == category {
                entry.marked = target;
            }
        }
    }

    pub fn toggle_section_current(&mut self) {
        if let Some(id) = self.cursor {
            self.toggle_section(id);
        }
    }

    /// Switch visual mode on or off. Switching on marks the selected entry;
    /// switching off keeps every mark.
    pub fn toggle_visual(&mut self) {
        self.visual = !self.visual;
        if self.visual {
            if let Some(index) = self.cursor_index() {
                self.mark_at(index);
            }
        }
    }

    /// Leave visual mode and unmark the whole collection
    pub fn cancel_visual(&mut self) {
        self.visual = false;
        self.clear_marks();
    }

    /// Leave visual mode, marks untouched
    pub fn leave_visual(&mut self) {
        self.visual = false;
    }

    pub fn clear_marks(&mut self) {
        for entry in self.collection.iter_mut() {
            entry.marked = false;
        }
    }

    /// Marked entries in collection order, hidden ones included
    pub fn marked(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.collection.iter().filter(|entry| entry.marked)
    }

    pub fn marked_count(&self) -> usize {
        self.marked().count()
    }

    /// First unmarked selectable view index at or after the cursor
    pub fn fallback_index(&self) -> Option<usize> {
        let start = self.cursor_index().unwrap_or(0);
        (start..self.view.len()).find(|&index| {
            self.row(index)
                .is_some_and(|entry| entry.is_selectable() && !entry.marked)
        })
    }

    /// Run `act` on every marked entry in collection order, unmarking each one
    /// as soon as its action succeeds. Stops at the first error and leaves the
    /// remaining entries marked.
    ///
    /// Returns the fallback view index computed before anything ran; feed it to
    /// [`StatusList::reselect_after_batch`] once the status has been reloaded.
    pub fn apply_to_marked<F>(&mut self, mut act: F) -> Result<Option<usize>>
    where
        F: FnMut(&Entry) -> Result<()>,
    {
        let fallback = self.fallback_index();
        let targets: Vec<EntryId> = self.marked().map(|entry| entry.id).collect();
        log::debug!(
            "Applying batch action to {} marked entries (fallback {:?})",
            targets.len(),
            fallback
        );

        for id in targets {
            let Some(entry) = self.collection.find(id) else {
                continue;
            };
            act(entry)?;
            if let Some(entry) = self.collection.find_mut(id) {
                entry.marked = false;
            }
        }

        Ok(fallback)
    }

    /// Re-resolve the cursor after a batch: the row now at `fallback`, or the
    /// first entry when no fallback was found
    pub fn reselect_after_batch(&mut self, fallback: Option<usize>) {
        match fallback {
            Some(index) => self.select_index(index),
            None => self.select_first(),
        }
    }
}
