//! Unified color system for the status list.
//!
//! Every row style comes from here so the list, the help screen and the
//! status bar agree on one palette.
//!
//! # Color Scheme
//! - **Index**: Green for staged changes
//! - **Workspace**: Yellow for unstaged changes
//! - **Untracked**: Red for files git does not know
//! - **Headers**: Cyan section banners
//! - **Visual marking**: Black on cyan for marked rows while visual mode is on

use crate::core::entry::Entry;
use crate::core::git_status::Category;
use ratatui::style::{Color, Modifier, Style};

/// Foreground style for one category
pub fn category_style(category: Category) -> Style {
    match category {
        Category::Index => Style::default().fg(Color::Green),
        Category::Workspace => Style::default().fg(Color::Yellow),
        Category::Untracked => Style::default().fg(Color::Red),
        Category::Header => Style::default().fg(Color::Cyan),
    }
}

pub fn visual_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan)
}

/// Status bar and prompt lines
pub fn bar_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub fn title_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

/// Style of a list row given its selection state
pub fn row_style(entry: &Entry, selected: bool, visual: bool) -> Style {
    let mut style = if visual && (entry.marked || selected) {
        visual_style()
    } else if selected {
        Style::default()
    } else {
        category_style(entry.category)
    };

    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}
