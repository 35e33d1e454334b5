//! Search-term filtering of the entry collection.
//!
//! A [`FilteredView`] stores positions into the collection rather than copies,
//! so marking or selecting through the view touches the same [`Entry`].

use crate::core::entry::{Entry, EntryCollection};

/// Longest search or command line the edit buffer accepts
pub const MAX_SEARCH_CHARS: usize = 256;

/// Ordered subsequence of the collection currently shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    positions: Vec<usize>,
}

impl FilteredView {
    /// Keep headers, and every entry whose label contains `term`
    /// (case-sensitive). An empty term keeps everything.
    pub fn apply(collection: &EntryCollection, term: &str) -> Self {
        let positions = collection
            .iter()
            .enumerate()
            .filter(|(_, entry)| matches(entry, term))
            .map(|(position, _)| position)
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Collection position of the row at `index`
    pub fn position(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    /// View index of a collection position, if that entry is shown
    pub fn index_of(&self, position: usize) -> Option<usize> {
        // positions are ascending, filtering preserves collection order
        self.positions.binary_search(&position).ok()
    }

    pub fn entry<'a>(&self, collection: &'a EntryCollection, index: usize) -> Option<&'a Entry> {
        self.position(index).and_then(|position| collection.get(position))
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

fn matches(entry: &Entry, term: &str) -> bool {
    term.is_empty() || !entry.is_selectable() || entry.label.contains(term)
}
