//! Text of the bottom bar and the help screen.
//!
//! The functions here only build strings; drawing happens in [`crate::ui`].

use crate::commands::actions::Action;
use crate::core::git_status::Category;
use crate::core::mode::Prompt;

pub const HELP_HINT: &str = "[h: HELP]";
pub const SEARCH_HELP: &str = "[Enter: back to list] [Escape: Cancel]";
pub const SEARCH_HELP_SHORT: &str = "[ENTER|ESC]";
pub const REPEAT_HINT: &str = "Use 1-9 before j/k/C-d/C-u to repeat the action [like vi]";

/// Short name shown in the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintName {
    Fixed(&'static str),
    /// Name of `s` for the selected entry
    StageAction,
    /// Name of `u` for the selected entry
    UnstageAction,
}

#[derive(Debug, Clone, Copy)]
pub struct HelpEntry {
    pub key: &'static str,
    pub name: HintName,
    pub desc: &'static str,
}

const fn entry(key: &'static str, name: HintName, desc: &'static str) -> HelpEntry {
    HelpEntry { key, name, desc }
}

/// Every binding, most useful first: the bar shows as many as fit
pub const HELP_ENTRIES: &[HelpEntry] = &[
    entry("j", HintName::Fixed("down"), "Go to the next line"),
    entry("k", HintName::Fixed("up"), "Go to the previous line"),
    entry("s", HintName::StageAction, "Add file or stage changes"),
    entry("u", HintName::UnstageAction, "Unstage changes or delete file"),
    entry("/", HintName::Fixed("filter"), "Filter the list of files"),
    entry("q", HintName::Fixed("quit"), "Quit the program"),
    entry("d", HintName::Fixed("diff"), "Run `git diff` on the selected file"),
    entry("i", HintName::Fixed("add -p"), "Run git interactive add on the selected file"),
    entry("c", HintName::Fixed("commit"), "Run `git commit`"),
    entry("C-d", HintName::Fixed("jump down"), "Jump ten entries down"),
    entry("C-u", HintName::Fixed("jump up"), "Jump ten entries up"),
    entry("!", HintName::Fixed("go index"), "Jump to the index [Shift 1]"),
    entry("@", HintName::Fixed("go workspace"), "Jump to the workspace [Shift 2]"),
    entry("#", HintName::Fixed("go untracked"), "Jump to the untracked [Shift 3]"),
    entry("G", HintName::Fixed("bottom"), "Jump to the bottom of the list"),
    entry("g", HintName::Fixed("top"), "Jump to the top of the list"),
    entry("m", HintName::Fixed("mark"), "Mark / Unmark the selected file"),
    entry("M", HintName::Fixed("mark section"), "Mark / Unmark all files in section"),
    entry(
        "V",
        HintName::Fixed("visual mark mode"),
        "Toggle Visual Mark mode to mark files by moving. ESC cancels",
    ),
    entry("C", HintName::Fixed("amend"), "Run `git commit --amend`"),
    entry("S", HintName::Fixed("s action on marked"), "Perform the add/stage action on all marked files"),
    entry("U", HintName::Fixed("u action on marked"), "Perform the unstage/delete action on all marked files"),
    entry("x", HintName::Fixed("Reset"), "Remove / Reset all changes this file has"),
    entry(":", HintName::Fixed("git command"), "Run any git command, e.g. `:push`"),
];

/// Names of `s` and `u` for the selected entry's category
pub fn action_names(category: Option<Category>) -> (&'static str, &'static str) {
    match category {
        Some(category) => Action::key_names(category),
        None => ("", ""),
    }
}

fn hint_name(name: HintName, category: Option<Category>) -> &'static str {
    let (stage, unstage) = action_names(category);
    match name {
        HintName::Fixed(name) => name,
        HintName::StageAction => stage,
        HintName::UnstageAction => unstage,
    }
}

/// Hints for a bar `width` columns wide, starting at column 1 and stopping
/// before the right-aligned [`HELP_HINT`]. Entries with an empty name are skipped.
pub fn help_hints(width: usize, category: Option<Category>) -> String {
    let mut remaining = width as isize - (1 + HELP_HINT.len()) as isize;
    let mut line = String::new();

    for help in HELP_ENTRIES {
        let name = hint_name(help.name, category);
        if name.is_empty() {
            continue;
        }
        let title = format!("[{}: {}] ", help.key, name);
        remaining -= title.chars().count() as isize;
        if remaining < 0 {
            break;
        }
        line.push_str(&title);
    }
    line
}

/// Right-hand help of the search bar, shortened when the term leaves no room
pub fn search_help(width: usize, term: &str) -> &'static str {
    let used = term.chars().count() + 4;
    if width.saturating_sub(used) > SEARCH_HELP.len() {
        SEARCH_HELP
    } else {
        SEARCH_HELP_SHORT
    }
}

/// One bar line `width` columns wide: `left` from column 1, `right` ending one
/// column before the edge. `right` wins where the two overlap.
pub fn compose_bar(width: usize, left: &str, right: &str) -> String {
    let mut cells: Vec<char> = std::iter::once(' ').chain(left.chars()).collect();
    cells.resize(width, ' ');
    cells.truncate(width);

    let right: Vec<char> = right.chars().collect();
    let start = width.saturating_sub(right.len() + 1);
    for (offset, c) in right.into_iter().enumerate() {
        if let Some(cell) = cells.get_mut(start + offset) {
            *cell = c;
        }
    }
    cells.into_iter().collect()
}

/// The confirmation prompt as a full bar line
pub fn prompt_bar(width: usize, prompt: &Prompt) -> String {
    compose_bar(width, &prompt.text(), "")
}

/// Lines of the full help screen below its title
pub fn full_help_lines() -> Vec<String> {
    let mut lines: Vec<String> = HELP_ENTRIES
        .iter()
        .map(|help| format!("{:<6}{}", format!("[{}]", help.key), help.desc))
        .collect();
    lines.push(String::new());
    lines.push(REPEAT_HINT.to_string());
    lines
}
