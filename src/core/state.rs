//! The owned status-list context.
//!
//! [`StatusList`] holds the current [`EntryCollection`], the [`FilteredView`]
//! derived from the committed search term, the identity-based cursor and the
//! visual-mark flag. Cursor movement lives in [`crate::core::cursor`] and marking
//! in [`crate::core::marks`]; both extend this type.
//!
//! # Cursor resolution
//! The cursor is an [`EntryId`]. After a refresh every old id is gone, so the
//! cursor falls back to the first selectable entry. After a filter change the id
//! still resolves against the collection and is kept even when the entry is
//! hidden; movement and search commit deal with that case.

use crate::core::entry::{Entry, EntryCollection, EntryId, IdSource, StatusRecord};
use crate::core::filter::FilteredView;

#[derive(Debug, Default)]
pub struct StatusList {
    pub(crate) ids: IdSource,
    pub(crate) collection: EntryCollection,
    pub(crate) view: FilteredView,
    pub(crate) cursor: Option<EntryId>,
    pub(crate) search_term: String,
    pub(crate) visual: bool,
}

impl StatusList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list straight from records, cursor on the first entry
    pub fn from_records(records: Vec<StatusRecord>) -> Self {
        let mut list = Self::new();
        list.replace_entries(records);
        list
    }

    /// Rebuild the collection from a fresh status, re-filter with the stored
    /// term and re-resolve the cursor.
    pub fn replace_entries(&mut self, records: Vec<StatusRecord>) {
        self.collection = EntryCollection::build(records, &mut self.ids);
        log::debug!("Rebuilt status list with {} rows", self.collection.len());
        self.refilter();
    }

    /// Replace the search term and recompute the view
    pub fn apply_filter(&mut self, term: &str) {
        if self.search_term != term {
            self.search_term = term.to_string();
        }
        self.refilter();
    }

    pub(crate) fn refilter(&mut self) {
        self.view = FilteredView::apply(&self.collection, &self.search_term);
        self.resolve_cursor();
    }

    fn resolve_cursor(&mut self) {
        let known = self
            .cursor
            .and_then(|id| self.collection.find(id))
            .is_some_and(Entry::is_selectable);
        if !known {
            self.cursor = None;
            self.select_first();
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn has_search_term(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn is_visual(&self) -> bool {
        self.visual
    }

    pub fn collection(&self) -> &EntryCollection {
        &self.collection
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn cursor(&self) -> Option<EntryId> {
        self.cursor
    }

    /// The selected entry, if any
    pub fn current(&self) -> Option<&Entry> {
        self.cursor.and_then(|id| self.collection.find(id))
    }

    /// View index of the selected entry, if it is shown
    pub fn cursor_index(&self) -> Option<usize> {
        let position = self.collection.position_of(self.cursor?)?;
        self.view.index_of(position)
    }

    /// Whether the selected entry is part of the current view
    pub fn cursor_visible(&self) -> bool {
        self.cursor_index().is_some()
    }

    /// Entry shown at view index `index`
    pub fn row(&self, index: usize) -> Option<&Entry> {
        self.view.entry(&self.collection, index)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Entry> + '_ {
        (0..self.view.len()).filter_map(move |index| self.row(index))
    }

    pub fn is_selected(&self, entry: &Entry) -> bool {
        self.cursor == Some(entry.id)
    }
}
