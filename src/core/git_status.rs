//! Entry categories and the change notes derived from git2 status flags.
//!
//! This module defines [`Category`], the section an entry belongs to, and the
//! conversions from `git2::Status` flags to the one-line note shown next to each
//! file. The core never interprets version-control semantics beyond these two
//! values.
//!
//! # Public API
//! - [`Category`]: Index, Workspace, Untracked or the synthetic Header
//! - [`index_note`]: note for changes between HEAD and the index
//! - [`workspace_note`]: note for changes between the index and the work tree
//! - [`is_untracked`]: whether a status is a plain untracked file

use std::fmt;

/// Section of the status list an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Staged change (HEAD -> index)
    Index,
    /// Unstaged change (index -> work tree)
    Workspace,
    /// New file git does not track
    Untracked,
    /// Synthetic section banner
    Header,
}

impl Category {
    /// Non-header categories in display order
    pub const SECTIONS: [Category; 3] = [Category::Index, Category::Workspace, Category::Untracked];

    /// Collation rank; headers sort with the section they introduce
    pub fn rank(&self) -> u8 {
        match self {
            Category::Index => 0,
            Category::Workspace => 1,
            Category::Untracked => 2,
            Category::Header => 3,
        }
    }

    /// Banner text used for the header of this section
    pub fn title(&self) -> &'static str {
        match self {
            Category::Index => "Index",
            Category::Workspace => "Workspace",
            Category::Untracked => "Untracked",
            Category::Header => "",
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Category::Header)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Note for a staged change, or `None` if nothing is staged.
/// When several flags are set the last one checked wins.
pub fn index_note(flags: git2::Status) -> Option<&'static str> {
    let mut note = None;
    if flags.contains(git2::Status::INDEX_NEW) {
        note = Some("new file");
    }
    if flags.contains(git2::Status::INDEX_MODIFIED) {
        note = Some("modified");
    }
    if flags.contains(git2::Status::INDEX_DELETED) {
        note = Some("deleted");
    }
    if flags.contains(git2::Status::INDEX_RENAMED) {
        note = Some("renamed");
    }
    if flags.contains(git2::Status::INDEX_TYPECHANGE) {
        note = Some("typechange");
    }
    note
}

/// Note for an unstaged change to a tracked file, or `None`
pub fn workspace_note(flags: git2::Status) -> Option<&'static str> {
    let mut note = None;
    if flags.contains(git2::Status::WT_MODIFIED) {
        note = Some("modified");
    }
    if flags.contains(git2::Status::WT_DELETED) {
        note = Some("deleted");
    }
    if flags.contains(git2::Status::WT_RENAMED) {
        note = Some("renamed");
    }
    if flags.contains(git2::Status::WT_TYPECHANGE) {
        note = Some("typechange");
    }
    note
}

/// Untracked means the work-tree-new flag and nothing else
pub fn is_untracked(flags: git2::Status) -> bool {
    flags == git2::Status::WT_NEW
}
