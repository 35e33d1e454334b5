//! Interactive git invocations that take over the terminal.
//!
//! Each builder returns the [`Invocation`] for one key; [`run`] and
//! [`run_command_line`] suspend the UI around the blocking call.

use crate::core::backend::{Backend, Console, Invocation};
use crate::core::entry::Entry;
use crate::core::error::Result;
use crate::core::git_status::Category;

/// Pager used for diffs unless overridden
pub const DEFAULT_PAGER: &str = "less -RSX -+F";

/// `git diff` for one entry, shown through `pager`
pub fn diff(entry: &Entry, pager: &str) -> Option<Invocation> {
    let base = Invocation::new("git").arg("diff");
    let invocation = match entry.category {
        Category::Index => base.args(["--cached", "--", entry.label.as_str()]),
        Category::Workspace => base.args(["--", entry.label.as_str()]),
        Category::Untracked => base.args(["--no-index", "--", "/dev/null", entry.label.as_str()]),
        Category::Header => return None,
    };
    Some(invocation.env("GIT_PAGER", pager))
}

/// `git add -p` for one entry
pub fn add_patch(entry: &Entry) -> Option<Invocation> {
    if entry.category.is_header() {
        return None;
    }
    Some(Invocation::new("git").args(["add", "-p", "--", entry.label.as_str()]))
}

/// `git commit`, optionally amending
pub fn commit(amend: bool) -> Invocation {
    let invocation = Invocation::new("git").arg("commit");
    if amend {
        invocation.arg("--amend")
    } else {
        invocation
    }
}

/// Hand the terminal to `invocation` and take it back afterwards.
/// A program that cannot be started is logged, not reported.
pub fn run(
    backend: &mut dyn Backend,
    console: &mut dyn Console,
    invocation: &Invocation,
) -> Result<()> {
    log::debug!("Handing off to `{}`", invocation.display());
    console.suspend()?;
    let outcome = backend.run_interactive(invocation);
    console.resume()?;

    if let Err(e) = outcome {
        log::warn!("`{}` could not be run: {}", invocation.display(), e);
    }
    Ok(())
}

/// Run a typed `git` command line the same way
pub fn run_command_line(
    backend: &mut dyn Backend,
    console: &mut dyn Console,
    text: &str,
) -> Result<()> {
    log::debug!("Running command line `git {}`", text);
    console.suspend()?;
    let outcome = backend.run_external_command(text);
    console.resume()?;

    if let Err(e) = outcome {
        log::warn!("`git {}` could not be run: {}", text, e);
    }
    Ok(())
}
