//! The interactive session: open the repository, load the status and run the
//! event loop until the user quits.

use crate::core::app::{App, Flow};
use crate::core::backend::Backend;
use crate::core::config::Settings;
use crate::core::error::Result;
use crate::core::git::GitRepo;
use crate::ui::terminal::Tui;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How long the loop waits for a key before checking the cancel flag
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Browse the status of the repository found from `settings.repo_dir`.
///
/// The status is loaded before the terminal is touched, so an empty status or a
/// repository error is reported on a normal screen.
pub fn execute_browse(settings: &Settings) -> Result<()> {
    let mut repo = GitRepo::open(&settings.repo_dir)?;
    info!("Browsing {}", repo.workdir().display());

    let mut app = App::new(settings.pager.clone());
    app.refresh(&mut repo)?;
    if let Some(term) = &settings.initial_search {
        app.apply_search(term);
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let mut tui = Tui::start(Arc::clone(&cancel))?;
    let outcome = event_loop(&mut app, &mut repo, &mut tui, &cancel);
    tui.stop()?;
    outcome
}

fn event_loop(
    app: &mut App,
    backend: &mut dyn Backend,
    tui: &mut Tui,
    cancel: &AtomicBool,
) -> Result<()> {
    loop {
        if cancel.load(Ordering::SeqCst) {
            debug!("Interrupted");
            return Ok(());
        }

        tui.draw(app)?;
        let Some(key) = tui.next_key(POLL_INTERVAL)? else {
            continue;
        };

        if app.handle_key(key, backend, tui)? == Flow::Quit {
            debug!("Quit requested");
            return Ok(());
        }
    }
}
