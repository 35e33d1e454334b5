//! The input state machine.
//!
//! [`App`] owns the status list, the current [`Mode`], the repeat count and the
//! edit buffer. The event loop feeds it one [`Key`] at a time through
//! [`App::handle_key`]; backend work goes through the [`Backend`] and
//! [`Console`] it is handed with each key. Confirmations go through a
//! [`Dialog`], which holds [`Mode::ConfirmDialog`] for as long as the console
//! blocks on the answer.
//!
//! # Refresh protocol
//! Every command that calls the backend reloads the status afterwards and then
//! re-resolves the cursor by the view index it had before the command ran. An
//! empty status ends the session with [`GitsiError::NothingToShow`].

use crate::commands::actions::Action;
use crate::commands::handoff;
use crate::core::backend::{Backend, Console};
use crate::core::cursor::JUMP_STEP;
use crate::core::error::{GitsiError, Result};
use crate::core::git_status::Category;
use crate::core::keys::{Command, Key, KeyBindings};
use crate::core::mode::{EditBuffer, Mode, Prompt, RepeatCount};
use crate::core::state::StatusList;

/// Question asked before discarding every change to a file
pub const DISCARD_QUESTION: &str = "Do you really want to reset all changes to this file?";

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs a confirmation as a [`Mode::ConfirmDialog`]: the mode holds the
/// prompt while the console blocks for the answer and is Normal again after.
pub struct Dialog<'a> {
    mode: &'a mut Mode,
    console: &'a mut dyn Console,
}

impl<'a> Dialog<'a> {
    pub fn new(mode: &'a mut Mode, console: &'a mut dyn Console) -> Self {
        Self { mode, console }
    }

    pub fn ask(&mut self, question: &str) -> Result<bool> {
        *self.mode = Mode::ConfirmDialog(Prompt::new(question));
        let answer = self.console.confirm(self.mode);
        *self.mode = Mode::Normal;
        log::debug!("Answer to {:?}: {:?}", question, answer.as_ref().ok());
        answer
    }
}

#[derive(Debug)]
pub struct App {
    list: StatusList,
    mode: Mode,
    count: RepeatCount,
    edit: EditBuffer,
    term_before_edit: String,
    bindings: KeyBindings,
    pager: String,
}

impl App {
    pub fn new(pager: impl Into<String>) -> Self {
        Self {
            list: StatusList::new(),
            mode: Mode::Normal,
            count: RepeatCount::new(),
            edit: EditBuffer::new(),
            term_before_edit: String::new(),
            bindings: KeyBindings::default(),
            pager: pager.into(),
        }
    }

    pub fn list(&self) -> &StatusList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut StatusList {
        &mut self.list
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn repeat_count(&self) -> &RepeatCount {
        &self.count
    }

    pub fn edit_buffer(&self) -> &EditBuffer {
        &self.edit
    }

    /// Reload the status from the backend, re-filter and re-resolve the cursor
    pub fn refresh(&mut self, backend: &mut dyn Backend) -> Result<()> {
        let records = backend.status()?;
        if records.is_empty() {
            return Err(GitsiError::NothingToShow);
        }
        self.list.replace_entries(records);
        Ok(())
    }

    /// Commit a search term without going through SearchEdit
    pub fn apply_search(&mut self, term: &str) {
        self.edit.seed(term);
        let term = self.edit.take();
        self.list.apply_filter(&term);
        if !self.list.cursor_visible() {
            self.list.select_first();
        }
    }

    pub fn handle_key(
        &mut self,
        key: Key,
        backend: &mut dyn Backend,
        console: &mut dyn Console,
    ) -> Result<Flow> {
        log::debug!("Key {:?} in {:?}", key, self.mode);

        match self.mode {
            Mode::Normal => self.handle_normal(key, backend, console),
            Mode::SearchEdit => {
                self.handle_search(key);
                Ok(Flow::Continue)
            }
            Mode::CommandEdit => self.handle_command(key, backend, console),
            Mode::HelpOverlay => {
                self.mode = Mode::Normal;
                Ok(Flow::Continue)
            }
            // answered inside Console::confirm; Dialog never leaves it set
            Mode::ConfirmDialog(_) => {
                self.mode = Mode::Normal;
                Ok(Flow::Continue)
            }
        }
    }

    fn enter_mode(&mut self, mode: Mode) {
        // visual marking only survives inside Normal mode
        self.list.leave_visual();
        self.mode = mode;
    }

    fn handle_normal(
        &mut self,
        key: Key,
        backend: &mut dyn Backend,
        console: &mut dyn Console,
    ) -> Result<Flow> {
        if let Some(digit) = key.digit() {
            self.count.push(digit);
            return Ok(Flow::Continue);
        }

        let Some(command) = self.bindings.get(key) else {
            return Ok(Flow::Continue);
        };

        let repeat = if command.is_movement() {
            self.count.take().unwrap_or(1) as isize
        } else {
            self.count.clear();
            1
        };

        match command {
            Command::Down => self.list.move_by(repeat),
            Command::Up => self.list.move_by(-repeat),
            Command::PageDown => self.list.move_by(JUMP_STEP.saturating_mul(repeat)),
            Command::PageUp => self.list.move_by(-JUMP_STEP.saturating_mul(repeat)),
            Command::Top => self.list.select_first(),
            Command::Bottom => self.list.select_last(),
            Command::GotoIndex => self.list.select_category(Category::Index),
            Command::GotoWorkspace => self.list.select_category(Category::Workspace),
            Command::GotoUntracked => self.list.select_category(Category::Untracked),

            Command::Stage => self.act_on_current(Action::Stage, backend, console)?,
            Command::Unstage => self.act_on_current(Action::Unstage, backend, console)?,
            Command::StageMarked => self.act_on_marked(Action::Stage, backend, console)?,
            Command::UnstageMarked => self.act_on_marked(Action::Unstage, backend, console)?,
            Command::Discard => self.discard_current(backend, console)?,

            Command::Diff => {
                let invocation = self
                    .list
                    .current()
                    .and_then(|entry| handoff::diff(entry, &self.pager));
                if let Some(invocation) = invocation {
                    self.with_refresh(backend, |backend, _| {
                        handoff::run(backend, console, &invocation)
                    })?;
                }
            }
            Command::AddPatch => {
                if let Some(invocation) = self.list.current().and_then(handoff::add_patch) {
                    self.with_refresh(backend, |backend, _| {
                        handoff::run(backend, console, &invocation)
                    })?;
                }
            }
            Command::Commit | Command::Amend => {
                let invocation = handoff::commit(command == Command::Amend);
                self.with_refresh(backend, |backend, _| {
                    handoff::run(backend, console, &invocation)
                })?;
            }

            Command::ToggleMark => self.list.toggle_mark_current(),
            Command::ToggleSectionMark => self.list.toggle_section_current(),
            Command::ToggleVisual => self.list.toggle_visual(),

            Command::Search => {
                self.term_before_edit = self.list.search_term().to_string();
                self.edit.seed(&self.term_before_edit);
                self.enter_mode(Mode::SearchEdit);
            }
            Command::CommandLine => {
                self.edit.clear();
                self.enter_mode(Mode::CommandEdit);
            }
            Command::Help => self.enter_mode(Mode::HelpOverlay),
            Command::Cancel => {
                if self.list.has_search_term() {
                    self.list.apply_filter("");
                } else if self.list.is_visual() {
                    self.list.cancel_visual();
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Run `work`, reload the status and put the cursor back on the row index
    /// it had before
    fn with_refresh<F>(&mut self, backend: &mut dyn Backend, work: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Backend, &mut Mode) -> Result<()>,
    {
        let index = self.list.cursor_index().unwrap_or(0);
        work(&mut *backend, &mut self.mode)?;
        self.refresh(backend)?;
        self.list.select_index(index);
        Ok(())
    }

    fn act_on_current(
        &mut self,
        action: Action,
        backend: &mut dyn Backend,
        console: &mut dyn Console,
    ) -> Result<()> {
        let Some(entry) = self.list.current().cloned() else {
            return Ok(());
        };
        self.with_refresh(backend, |backend, mode| {
            action.apply(backend, &mut Dialog::new(mode, console), &entry)
        })
    }

    fn discard_current(
        &mut self,
        backend: &mut dyn Backend,
        console: &mut dyn Console,
    ) -> Result<()> {
        let Some(entry) = self.list.current() else {
            return Ok(());
        };
        if entry.category == Category::Untracked {
            return Ok(());
        }
        if !Dialog::new(&mut self.mode, console).ask(DISCARD_QUESTION)? {
            return Ok(());
        }
        self.act_on_current(Action::Checkout, backend, console)
    }

    fn act_on_marked(
        &mut self,
        action: Action,
        backend: &mut dyn Backend,
        console: &mut dyn Console,
    ) -> Result<()> {
        let mode = &mut self.mode;
        let fallback = self.list.apply_to_marked(|entry| {
            action.apply(&mut *backend, &mut Dialog::new(&mut *mode, &mut *console), entry)
        })?;
        self.refresh(backend)?;
        self.list.reselect_after_batch(fallback);
        Ok(())
    }

    fn handle_search(&mut self, key: Key) {
        match key {
            Key::Enter => {
                self.edit.clear();
                self.mode = Mode::Normal;
                if !self.list.cursor_visible() {
                    self.list.select_first();
                }
            }
            Key::Esc => {
                self.edit.clear();
                let term = std::mem::take(&mut self.term_before_edit);
                self.list.apply_filter(&term);
                self.mode = Mode::Normal;
            }
            Key::Backspace => {
                if self.edit.pop().is_some() {
                    self.list.apply_filter(self.edit.as_str());
                }
            }
            key => {
                if let Some(c) = key.printable() {
                    if self.edit.push(c) {
                        self.list.apply_filter(self.edit.as_str());
                    }
                }
            }
        }
    }

    fn handle_command(
        &mut self,
        key: Key,
        backend: &mut dyn Backend,
        console: &mut dyn Console,
    ) -> Result<Flow> {
        match key {
            Key::Enter => {
                let text = self.edit.take();
                self.mode = Mode::Normal;
                if !text.trim().is_empty() {
                    self.with_refresh(backend, |backend, _| {
                        handoff::run_command_line(backend, console, text.trim())
                    })?;
                }
            }
            Key::Esc => {
                self.edit.clear();
                self.mode = Mode::Normal;
            }
            Key::Backspace => {
                self.edit.pop();
            }
            key => {
                if let Some(c) = key.printable() {
                    self.edit.push(c);
                }
            }
        }
        Ok(Flow::Continue)
    }
}
