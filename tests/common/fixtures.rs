//! Repositories in predefined states

#![allow(dead_code)]

use super::repository::*;
use gitsi::core::error::Result;

/// Scenario: one entry in each section
///
/// - `staged.txt` new in the index
/// - `tracked.txt` modified in the work tree
/// - `removed.txt` deleted in the work tree
/// - `loose.txt` untracked
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["tracked.txt", "removed.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["tracked.txt"])?;
    delete_file(&repo.path, "removed.txt")?;
    create_file(&repo.path, "staged.txt", "staged\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "loose.txt", "loose\n")?;

    Ok(repo)
}

/// Scenario: committed history and nothing changed
pub fn create_clean_repo() -> Result<TestRepo> {
    setup_test_repo_with_initial_commit()
}
