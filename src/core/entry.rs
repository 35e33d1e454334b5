//! Entry model: the rows of the status list and the arena that owns them.
//!
//! An [`EntryCollection`] is rebuilt wholesale on every status refresh. Entries
//! are addressed by [`EntryId`], a handle minted from a counter that never
//! repeats, so an id held across a refresh simply stops resolving instead of
//! pointing at a different row.

use crate::core::git_status::Category;
use std::collections::HashMap;

/// Stable handle of one entry within one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// Mints entry ids; owned by whoever rebuilds collections
#[derive(Debug, Default)]
pub struct IdSource {
    next: u64,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self) -> EntryId {
        let id = EntryId(self.next);
        self.next += 1;
        id
    }
}

/// One `(label, note, category)` tuple as delivered by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub label: String,
    pub note: String,
    pub category: Category,
}

impl StatusRecord {
    pub fn new(label: impl Into<String>, note: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            note: note.into(),
            category,
        }
    }
}

/// One row of the status list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub label: String,
    pub note: String,
    pub category: Category,
    pub marked: bool,
}

impl Entry {
    /// Headers are never selectable nor markable
    pub fn is_selectable(&self) -> bool {
        !self.category.is_header()
    }
}

/// Ordered arena of entries with an id lookup table
#[derive(Debug, Default)]
pub struct EntryCollection {
    entries: Vec<Entry>,
    positions: HashMap<EntryId, usize>,
}

impl EntryCollection {
    /// Build a collection from backend records, inserting one header before the
    /// first entry of every non-empty category.
    pub fn build(records: Vec<StatusRecord>, ids: &mut IdSource) -> Self {
        let mut records = records;
        // Stable: keeps the backend's order inside each category
        records.sort_by_key(|record| record.category.rank());

        let mut entries = Vec::with_capacity(records.len() + Category::SECTIONS.len());
        let mut current: Option<Category> = None;

        for record in records {
            if record.category.is_header() {
                continue;
            }
            if current != Some(record.category) {
                current = Some(record.category);
                entries.push(Entry {
                    id: ids.mint(),
                    label: record.category.title().to_string(),
                    note: String::new(),
                    category: Category::Header,
                    marked: false,
                });
            }
            entries.push(Entry {
                id: ids.mint(),
                label: record.label,
                note: record.note,
                category: record.category,
                marked: false,
            });
        }

        let positions = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.id, position))
            .collect();

        Self { entries, positions }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Entry> {
        self.entries.get_mut(position)
    }

    /// Position of an entry in the collection, if the id belongs to it
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn find(&self, id: EntryId) -> Option<&Entry> {
        self.position_of(id).and_then(|position| self.entries.get(position))
    }

    pub fn find_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        let position = self.position_of(id)?;
        self.entries.get_mut(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entry> {
        self.entries.iter_mut()
    }
}
