//! Terminal setup, key input and the real [`Console`].

use crate::core::app::App;
use crate::core::backend::Console;
use crate::core::error::Result;
use crate::core::keys::Key;
use crate::core::mode::{confirm_loop, Mode, Prompt};
use crate::ui::statusbar;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyEventKind},
    execute,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cancel: Arc<AtomicBool>,
    active: bool,
}

impl Tui {
    /// Switch to raw mode on the alternate screen
    pub fn start(cancel: Arc<AtomicBool>) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        log::debug!("Terminal started");
        Ok(Self {
            terminal,
            cancel,
            active: true,
        })
    }

    /// Restore the terminal; safe to call more than once
    pub fn stop(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)?;
        self.terminal.show_cursor()?;
        log::debug!("Terminal restored");
        Ok(())
    }

    pub fn draw(&mut self, app: &App) -> Result<()> {
        self.terminal.draw(|frame| super::draw(frame, app))?;
        Ok(())
    }

    /// Wait up to `timeout` for a key press. Ctrl-c raises the cancel flag
    /// instead of being returned.
    pub fn next_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let key = Key::from(key);
                if key.is_interrupt() {
                    self.cancel.store(true, Ordering::SeqCst);
                    return Ok(None);
                }
                Ok(Some(key))
            }
            Event::Resize(_, _) => {
                self.terminal.autoresize()?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

fn read_key_blocking() -> Result<Key> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Key::from(key));
            }
        }
    }
}

fn draw_prompt(out: &mut impl io::Write, prompt: &Prompt) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    execute!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        Clear(ClearType::CurrentLine),
        SetAttribute(Attribute::Reverse),
        Print(statusbar::prompt_bar(cols as usize, prompt)),
        SetAttribute(Attribute::Reset)
    )?;
    Ok(())
}

impl Console for Tui {
    fn confirm(&mut self, mode: &mut Mode) -> Result<bool> {
        let Mode::ConfirmDialog(prompt) = mode else {
            return Ok(false);
        };
        let backend = self.terminal.backend_mut();
        let answer = confirm_loop(prompt, read_key_blocking, |prompt| {
            draw_prompt(backend, prompt)
        })?;
        // the prompt was drawn behind ratatui's back
        self.terminal.clear()?;
        Ok(answer)
    }

    fn suspend(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)?;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(self.terminal.backend_mut(), EnterAlternateScreen, Hide)?;
        self.terminal.clear()?;
        Ok(())
    }
}
