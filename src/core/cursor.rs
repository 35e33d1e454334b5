//! Cursor movement over the filtered view and scroll-window computation.
//!
//! Movement walks the view one selectable entry at a time, skipping headers and
//! wrapping at both ends. While visual-mark mode is on, every entry the cursor
//! lands on is marked.

use crate::core::git_status::Category;
use crate::core::state::StatusList;

/// Rows taken by the blank separator and the status bar
pub const STATUS_BAR_ROWS: usize = 2;

/// Entries moved by the jump commands
pub const JUMP_STEP: isize = 10;

/// One rendered row of the list window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRow {
    /// Index into the filtered view
    pub index: usize,
    /// Distance in selectable rows to the selected row; `None` for headers
    pub line_number: Option<usize>,
}

/// The slice of the view that fits on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub start: usize,
    pub rows: Vec<PageRow>,
}

/// First view index of the window keeping `cursor` centred where possible
pub fn window_start(cursor: usize, height: usize, len: usize) -> usize {
    if len < height {
        return 0;
    }
    cursor
        .saturating_sub(height / 2)
        .min(len.saturating_sub(height))
}

impl StatusList {
    fn selectable_at(&self, index: usize) -> bool {
        self.row(index).is_some_and(|entry| entry.is_selectable())
    }

    fn select_at(&mut self, index: usize) {
        if let Some(entry) = self.row(index) {
            if entry.is_selectable() {
                self.cursor = Some(entry.id);
            }
        }
    }

    pub fn first_selectable_index(&self) -> Option<usize> {
        (0..self.view.len()).find(|&index| self.selectable_at(index))
    }

    pub fn last_selectable_index(&self) -> Option<usize> {
        (0..self.view.len()).rev().find(|&index| self.selectable_at(index))
    }

    /// Select the first non-header row; no-op when there is none
    pub fn select_first(&mut self) {
        if let Some(index) = self.first_selectable_index() {
            self.select_at(index);
        }
    }

    /// Select the last non-header row; no-op when there is none
    pub fn select_last(&mut self) {
        if let Some(index) = self.last_selectable_index() {
            self.select_at(index);
        }
    }

    /// Select the first shown entry of `category`; no-op if none is shown
    pub fn select_category(&mut self, category: Category) {
        if category.is_header() {
            return;
        }
        let found = (0..self.view.len())
            .find(|&index| self.row(index).is_some_and(|entry| entry.category == category));
        if let Some(index) = found {
            self.select_at(index);
        }
    }

    /// Select whatever occupies view index `index` now. A header selects the next
    /// entry after it; running past the end selects the last entry.
    pub fn select_index(&mut self, index: usize) {
        let len = self.view.len();
        let found = (index.min(len)..len).find(|&candidate| self.selectable_at(candidate));
        match found {
            Some(candidate) => self.select_at(candidate),
            None => self.select_last(),
        }
    }

    /// Move `delta` selectable entries (negative is backwards), wrapping at both
    /// ends. A cursor that is not in the view snaps to the first entry instead.
    pub fn move_by(&mut self, delta: isize) {
        let Some(mut index) = self.cursor_index() else {
            self.select_first();
            return;
        };

        // One full lap visits every selectable row, so any further laps change
        // neither the final row nor the marks
        let selectable = (0..self.view.len())
            .filter(|&index| self.selectable_at(index))
            .count();
        let mut steps = delta.unsigned_abs();
        if selectable > 0 && steps > selectable {
            steps = selectable + steps % selectable;
        }

        let direction = delta.signum();
        for _ in 0..steps {
            let Some(next) = self.step_from(index, direction) else {
                return;
            };
            index = next;
            self.select_at(index);
            if self.visual {
                self.mark_at(index);
            }
        }
    }

    fn step_from(&self, index: usize, direction: isize) -> Option<usize> {
        let mut position = index as isize;
        loop {
            position += direction;
            if position < 0 {
                return self.last_selectable_index();
            }
            if position >= self.view.len() as isize {
                return self.first_selectable_index();
            }
            if self.selectable_at(position as usize) {
                return Some(position as usize);
            }
        }
    }

    /// Rows to draw in a list area `height` rows tall
    pub fn page(&self, height: usize) -> Page {
        let len = self.view.len();
        let cursor_index = self.cursor_index();
        let start = window_start(cursor_index.unwrap_or(0), height, len);
        let end = (start + height).min(len);

        let mut ordinals = Vec::with_capacity(end - start);
        let mut ordinal = 0usize;
        let mut selected_ordinal = None;
        for index in start..end {
            if self.selectable_at(index) {
                ordinal += 1;
                ordinals.push(Some(ordinal));
                if Some(index) == cursor_index {
                    selected_ordinal = Some(ordinal);
                }
            } else {
                ordinals.push(None);
            }
        }
        let selected_ordinal = selected_ordinal.unwrap_or(ordinal);

        let rows = (start..end)
            .zip(ordinals)
            .map(|(index, ordinal)| PageRow {
                index,
                line_number: ordinal.map(|ordinal| ordinal.abs_diff(selected_ordinal)),
            })
            .collect();

        Page { start, rows }
    }
}
