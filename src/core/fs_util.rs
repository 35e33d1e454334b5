//! Best-effort removal of untracked files and directories.
//!
//! [`remove_recursive`] walks a tree depth first and reports one
//! [`RemovalOutcome`] per path it tried to remove. A failure never stops the
//! walk; callers decide what to do with the failed outcomes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct RemovalOutcome {
    pub path: PathBuf,
    pub result: io::Result<()>,
}

impl RemovalOutcome {
    fn new(path: &Path, result: io::Result<()>) -> Self {
        Self {
            path: path.to_path_buf(),
            result,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Remove `path`: a file or symlink directly, a directory children first.
/// Symlinks are never followed.
pub fn remove_recursive(path: &Path) -> Vec<RemovalOutcome> {
    let mut outcomes = Vec::new();
    remove_into(path, &mut outcomes);
    outcomes
}

fn remove_into(path: &Path, outcomes: &mut Vec<RemovalOutcome>) {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            outcomes.push(RemovalOutcome::new(path, Err(e)));
            return;
        }
    };

    if !metadata.is_dir() {
        outcomes.push(RemovalOutcome::new(path, fs::remove_file(path)));
        return;
    }

    match fs::read_dir(path) {
        Ok(children) => {
            for child in children {
                match child {
                    Ok(child) => remove_into(&child.path(), outcomes),
                    Err(e) => outcomes.push(RemovalOutcome::new(path, Err(e))),
                }
            }
        }
        Err(e) => outcomes.push(RemovalOutcome::new(path, Err(e))),
    }

    outcomes.push(RemovalOutcome::new(path, fs::remove_dir(path)));
}
