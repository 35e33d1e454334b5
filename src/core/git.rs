//! Git repository operations behind the [`Backend`] trait.
//!
//! This module provides [`GitRepo`], which wraps the `git2` library to read the
//! working-tree status and mutate the index. Operations libgit2 handles poorly
//! from a long-lived handle (path checkout) shell out to the git CLI, and the
//! handle is reopened afterwards.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for git repository operations
//!
//! # Key Features
//! - **Status reading**: git2 status flags become Index, Workspace and Untracked records
//! - **Index mutation**: stage files, directories and deletions; unstage; restore
//! - **Handoffs**: run interactive git commands in the work tree with the terminal attached

use crate::core::{
    backend::{Backend, Invocation},
    entry::StatusRecord,
    error::{GitsiError, Result},
    fs_util,
    git_status::{self, Category},
};
use git2::{build::CheckoutBuilder, IndexAddOption, Repository, StatusOptions, StatusShow};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct GitRepo {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`. Bare repositories are rejected.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            log::debug!("Repository discovery from {} failed: {}", path.display(), e);
            GitsiError::NotInGitRepo
        })?;

        if repo.is_bare() {
            return Err(GitsiError::bare_repository(path));
        }

        let workdir = repo.workdir().ok_or(GitsiError::NoWorkdir)?.to_path_buf();
        log::debug!("Opened repository with work tree {}", workdir.display());
        Ok(GitRepo { repo, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Drop the libgit2 handle and open a fresh one after the CLI touched the repo
    fn reopen(&mut self) -> Result<()> {
        self.repo = Repository::open(self.repo.path())?;
        Ok(())
    }

    /// Execute a git command in the repository's working directory
    fn execute_git_command(&self, mut cmd: Command) -> Result<()> {
        cmd.current_dir(&self.workdir);

        let output = cmd.output()?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(GitsiError::command_failed(
                format!("{:?}", cmd),
                error_msg.trim(),
            ));
        }

        Ok(())
    }

    fn head_commit(&self) -> Option<git2::Object<'_>> {
        self.repo
            .head()
            .ok()
            .and_then(|head| head.peel(git2::ObjectType::Commit).ok())
    }

    fn head_has_path(&self, label: &str) -> bool {
        self.repo
            .head()
            .and_then(|head| head.peel_to_tree())
            .map(|tree| tree.get_path(Path::new(label)).is_ok())
            .unwrap_or(false)
    }
}

/// Label of a delta: the old path when the file moved, else whichever is known
fn delta_label(delta: Option<git2::DiffDelta<'_>>) -> Option<PathBuf> {
    let delta = delta?;
    let old_path = delta.old_file().path();
    let new_path = delta.new_file().path();
    old_path.or(new_path).map(Path::to_path_buf)
}

fn label_string(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|_| GitsiError::InvalidUtf8Path)
}

impl Backend for GitRepo {
    fn status(&mut self) -> Result<Vec<StatusRecord>> {
        let mut opts = StatusOptions::new();
        opts.show(StatusShow::IndexAndWorkdir)
            .include_untracked(true)
            .include_ignored(false)
            .renames_head_to_index(true)
            .sort_case_sensitively(true);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut index = Vec::new();
        let mut workspace = Vec::new();
        let mut untracked = Vec::new();

        for entry in statuses.iter() {
            let flags = entry.status();
            if flags.is_empty() {
                continue;
            }

            if let Some(note) = git_status::index_note(flags) {
                if let Some(path) = delta_label(entry.head_to_index()) {
                    index.push(StatusRecord::new(label_string(path)?, note, Category::Index));
                }
            }

            if let Some(note) = git_status::workspace_note(flags) {
                if let Some(path) = delta_label(entry.index_to_workdir()) {
                    workspace.push(StatusRecord::new(
                        label_string(path)?,
                        note,
                        Category::Workspace,
                    ));
                }
            }

            if git_status::is_untracked(flags) {
                if let Some(path) = delta_label(entry.index_to_workdir()) {
                    untracked.push(StatusRecord::new(
                        label_string(path)?,
                        "untracked",
                        Category::Untracked,
                    ));
                }
            }
        }

        log::debug!(
            "Status: {} staged, {} unstaged, {} untracked",
            index.len(),
            workspace.len(),
            untracked.len()
        );

        index.extend(workspace);
        index.extend(untracked);
        Ok(index)
    }

    fn stage(&mut self, label: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let full_path = self.workdir.join(label);

        match std::fs::symlink_metadata(&full_path) {
            Ok(metadata) if metadata.is_dir() => {
                let pathspec = label.trim_end_matches('/');
                index.add_all([pathspec], IndexAddOption::DEFAULT, None)?;
            }
            Ok(metadata) if metadata.is_file() || metadata.file_type().is_symlink() => {
                index.add_path(Path::new(label))?;
            }
            Ok(_) => {
                log::debug!("Not staging {}: unsupported file type", label);
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // Staging a path that is gone records its deletion
                index.remove_path(Path::new(label))?;
            }
            Err(e) => return Err(e.into()),
        }

        index.write()?;
        Ok(())
    }

    fn unstage_from_index(&mut self, label: &str) -> Result<()> {
        let head = self.head_commit();
        self.repo.reset_default(head.as_ref(), [label])?;
        Ok(())
    }

    fn unstage_from_workspace(&mut self, label: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.remove_path(Path::new(label))?;
        index.write()?;
        Ok(())
    }

    fn discard_workspace_deletion(&mut self, label: &str) -> Result<()> {
        let mut checkout = CheckoutBuilder::new();
        checkout.force().path(label);
        self.repo.checkout_head(Some(&mut checkout))?;
        Ok(())
    }

    fn delete_untracked(&mut self, label: &str) {
        let outcomes = fs_util::remove_recursive(&self.workdir.join(label));
        for outcome in outcomes.iter().filter(|outcome| !outcome.is_ok()) {
            if let Err(e) = &outcome.result {
                log::warn!("Could not remove {}: {}", outcome.path.display(), e);
            }
        }
    }

    fn checkout(&mut self, label: &str) -> Result<()> {
        if self.head_has_path(label) {
            let mut cmd = Command::new("git");
            cmd.args(["checkout", "HEAD", "--", label]);
            self.execute_git_command(cmd)?;
        } else {
            // Nothing to go back to: drop the path from the index, keep the file
            let mut index = self.repo.index()?;
            index.remove_path(Path::new(label))?;
            index.write()?;
        }
        self.reopen()
    }

    fn run_interactive(&mut self, invocation: &Invocation) -> Result<()> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&self.workdir)
            .status()?;
        log::debug!("`{}` exited with {}", invocation.display(), status);
        Ok(())
    }

    fn run_external_command(&mut self, text: &str) -> Result<()> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(format!("git {}", text))
            .current_dir(&self.workdir)
            .status()?;
        log::debug!("`git {}` exited with {}", text, status);

        print!("\nPress ENTER to continue");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) -> Result<()> {
        std::process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()?;
        Ok(())
    }

    fn setup_test_repo() -> Result<(TempDir, GitRepo)> {
        let temp_dir = TempDir::new()?;
        let repo_path = temp_dir.path();

        git(repo_path, &["init"])?;
        git(repo_path, &["config", "user.name", "Test User"])?;
        git(repo_path, &["config", "user.email", "test@example.com"])?;
        git(repo_path, &["config", "commit.gpgsign", "false"])?;

        let git_repo = GitRepo::open(repo_path)?;
        Ok((temp_dir, git_repo))
    }

    fn commit_file(repo: &GitRepo, name: &str, content: &str) -> Result<()> {
        std::fs::write(repo.workdir().join(name), content)?;
        git(repo.workdir(), &["add", name])?;
        git(repo.workdir(), &["commit", "-m", &format!("Add {name}")])?;
        Ok(())
    }

    fn find<'a>(
        records: &'a [StatusRecord],
        label: &str,
        category: Category,
    ) -> Option<&'a StatusRecord> {
        records
            .iter()
            .find(|record| record.label == label && record.category == category)
    }

    #[test]
    fn test_open_non_git_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let result = GitRepo::open(temp_dir.path());
        assert!(matches!(result, Err(GitsiError::NotInGitRepo)));
        Ok(())
    }

    #[test]
    fn test_open_bare_repository() -> Result<()> {
        let temp_dir = TempDir::new()?;
        git(temp_dir.path(), &["init", "--bare"])?;
        let result = GitRepo::open(temp_dir.path());
        assert!(matches!(result, Err(GitsiError::BareRepository { .. })));
        Ok(())
    }

    #[test]
    fn test_open_from_subdirectory() -> Result<()> {
        let (_temp_dir, git_repo) = setup_test_repo()?;
        let nested = git_repo.workdir().join("src/nested");
        std::fs::create_dir_all(&nested)?;
        let reopened = GitRepo::open(&nested)?;
        assert_eq!(
            reopened.workdir().canonicalize()?,
            git_repo.workdir().canonicalize()?
        );
        Ok(())
    }

    #[test]
    fn test_status_empty_repo() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        assert!(git_repo.status()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_status_categories_in_order() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "tracked.txt", "one")?;

        std::fs::write(git_repo.workdir().join("tracked.txt"), "two")?;
        std::fs::write(git_repo.workdir().join("staged.txt"), "new")?;
        git(git_repo.workdir(), &["add", "staged.txt"])?;
        std::fs::write(git_repo.workdir().join("loose.txt"), "loose")?;

        let records = git_repo.status()?;
        let categories: Vec<_> = records.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            [Category::Index, Category::Workspace, Category::Untracked]
        );
        let note = |label, category| find(&records, label, category).map(|r| r.note.as_str());
        assert_eq!(note("staged.txt", Category::Index), Some("new file"));
        assert_eq!(note("tracked.txt", Category::Workspace), Some("modified"));
        assert_eq!(note("loose.txt", Category::Untracked), Some("untracked"));
        Ok(())
    }

    #[test]
    fn test_status_same_file_in_index_and_workspace() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "both.txt", "one")?;
        std::fs::write(git_repo.workdir().join("both.txt"), "two")?;
        git(git_repo.workdir(), &["add", "both.txt"])?;
        std::fs::write(git_repo.workdir().join("both.txt"), "three")?;

        let records = git_repo.status()?;
        assert!(find(&records, "both.txt", Category::Index).is_some());
        assert!(find(&records, "both.txt", Category::Workspace).is_some());
        Ok(())
    }

    #[test]
    fn test_status_rename_uses_old_path() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "before.txt", "some content that git can follow\n")?;
        git(git_repo.workdir(), &["mv", "before.txt", "after.txt"])?;

        let records = git_repo.status()?;
        let renamed = find(&records, "before.txt", Category::Index);
        assert_eq!(renamed.map(|r| r.note.as_str()), Some("renamed"));
        Ok(())
    }

    #[test]
    fn test_stage_file_and_directory() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        let workdir = git_repo.workdir().to_path_buf();
        std::fs::write(workdir.join("single.txt"), "single")?;
        std::fs::create_dir_all(workdir.join("dir/sub"))?;
        std::fs::write(workdir.join("dir/a.rs"), "a")?;
        std::fs::write(workdir.join("dir/sub/b.rs"), "b")?;

        git_repo.stage("single.txt")?;
        git_repo.stage("dir/")?;

        let records = git_repo.status()?;
        assert!(find(&records, "single.txt", Category::Index).is_some());
        assert!(find(&records, "dir/a.rs", Category::Index).is_some());
        assert!(find(&records, "dir/sub/b.rs", Category::Index).is_some());
        assert!(records.iter().all(|r| r.category == Category::Index));
        Ok(())
    }

    #[test]
    fn test_stage_deleted_file_stages_deletion() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "gone.txt", "bye")?;
        std::fs::remove_file(git_repo.workdir().join("gone.txt"))?;

        git_repo.stage("gone.txt")?;

        let records = git_repo.status()?;
        assert_eq!(
            find(&records, "gone.txt", Category::Index).map(|r| r.note.as_str()),
            Some("deleted")
        );
        assert!(find(&records, "gone.txt", Category::Workspace).is_none());
        Ok(())
    }

    #[test]
    fn test_unstage_from_index_keeps_work_tree() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "file.txt", "one")?;
        std::fs::write(git_repo.workdir().join("file.txt"), "two")?;
        git_repo.stage("file.txt")?;

        git_repo.unstage_from_index("file.txt")?;

        let records = git_repo.status()?;
        assert!(find(&records, "file.txt", Category::Index).is_none());
        assert!(find(&records, "file.txt", Category::Workspace).is_some());
        Ok(())
    }

    #[test]
    fn test_unstage_from_index_without_head() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        std::fs::write(git_repo.workdir().join("first.txt"), "first")?;
        git_repo.stage("first.txt")?;

        git_repo.unstage_from_index("first.txt")?;

        let records = git_repo.status()?;
        assert!(find(&records, "first.txt", Category::Untracked).is_some());
        Ok(())
    }

    #[test]
    fn test_unstage_from_workspace_removes_from_index() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "file.txt", "one")?;
        std::fs::write(git_repo.workdir().join("file.txt"), "two")?;

        git_repo.unstage_from_workspace("file.txt")?;

        let records = git_repo.status()?;
        assert_eq!(
            find(&records, "file.txt", Category::Index).map(|r| r.note.as_str()),
            Some("deleted")
        );
        // INDEX_DELETED | WT_NEW is not a plain untracked file
        assert!(find(&records, "file.txt", Category::Workspace).is_none());
        assert!(find(&records, "file.txt", Category::Untracked).is_none());
        Ok(())
    }

    #[test]
    fn test_discard_workspace_deletion_restores_file() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "keep.txt", "keep me")?;
        std::fs::remove_file(git_repo.workdir().join("keep.txt"))?;

        git_repo.discard_workspace_deletion("keep.txt")?;

        let restored = std::fs::read_to_string(git_repo.workdir().join("keep.txt"))?;
        assert_eq!(restored, "keep me");
        assert!(git_repo.status()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_checkout_discards_index_and_work_tree() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "file.txt", "original")?;
        std::fs::write(git_repo.workdir().join("file.txt"), "staged")?;
        git_repo.stage("file.txt")?;
        std::fs::write(git_repo.workdir().join("file.txt"), "unstaged")?;

        git_repo.checkout("file.txt")?;

        let content = std::fs::read_to_string(git_repo.workdir().join("file.txt"))?;
        assert_eq!(content, "original");
        assert!(git_repo.status()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_checkout_of_new_file_unstages_it() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        commit_file(&git_repo, "base.txt", "base")?;
        std::fs::write(git_repo.workdir().join("fresh.txt"), "fresh")?;
        git_repo.stage("fresh.txt")?;

        git_repo.checkout("fresh.txt")?;

        let records = git_repo.status()?;
        assert!(find(&records, "fresh.txt", Category::Untracked).is_some());
        assert!(git_repo.workdir().join("fresh.txt").exists());
        Ok(())
    }

    #[test]
    fn test_delete_untracked_file_and_directory() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        let workdir = git_repo.workdir().to_path_buf();
        std::fs::write(workdir.join("junk.txt"), "junk")?;
        std::fs::create_dir_all(workdir.join("target/debug"))?;
        std::fs::write(workdir.join("target/debug/bin"), "bin")?;

        git_repo.delete_untracked("junk.txt");
        git_repo.delete_untracked("target/");

        assert!(!workdir.join("junk.txt").exists());
        assert!(!workdir.join("target").exists());
        assert!(git_repo.status()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_delete_missing_file_is_absorbed() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        git_repo.delete_untracked("never-existed.txt");
        Ok(())
    }

    #[test]
    fn test_run_interactive_ignores_exit_status() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        let invocation = Invocation::new("git").arg("not-a-real-subcommand");
        git_repo.run_interactive(&invocation)?;
        Ok(())
    }

    #[test]
    fn test_run_interactive_reports_spawn_failure() -> Result<()> {
        let (_temp_dir, mut git_repo) = setup_test_repo()?;
        let invocation = Invocation::new("gitsi-definitely-missing-program");
        assert!(matches!(
            git_repo.run_interactive(&invocation),
            Err(GitsiError::Io(_))
        ));
        Ok(())
    }

    #[test]
    fn test_execute_git_command_failure() -> Result<()> {
        let (_temp_dir, git_repo) = setup_test_repo()?;
        let mut cmd = Command::new("git");
        cmd.args(["checkout", "HEAD", "--", "missing.txt"]);
        let result = git_repo.execute_git_command(cmd);
        assert!(matches!(result, Err(GitsiError::CommandFailed { .. })));
        Ok(())
    }
}
