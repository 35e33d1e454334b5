//! In-memory collaborators for driving [`App`](gitsi::App) without git or a
//! terminal

#![allow(dead_code)]

use gitsi::core::backend::{Backend, Console, Invocation};
use gitsi::core::entry::StatusRecord;
use gitsi::core::error::{GitsiError, Result};
use gitsi::core::git_status::Category;
use gitsi::core::mode::Mode;
use std::collections::VecDeque;

/// Shorthand for a status record
pub fn record(label: &str, note: &str, category: Category) -> StatusRecord {
    StatusRecord::new(label, note, category)
}

/// Backend with scripted status snapshots and a log of every call.
///
/// Each `status()` call takes the next snapshot; the last one repeats.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub snapshots: VecDeque<Vec<StatusRecord>>,
    pub calls: Vec<String>,
    /// Label whose mutations fail
    pub fail_on: Option<String>,
}

impl FakeBackend {
    pub fn new(status: Vec<StatusRecord>) -> Self {
        Self {
            snapshots: VecDeque::from([status]),
            ..Self::default()
        }
    }

    /// Queue the status returned after the current one
    pub fn then(mut self, status: Vec<StatusRecord>) -> Self {
        self.snapshots.push_back(status);
        self
    }

    pub fn failing_on(mut self, label: &str) -> Self {
        self.fail_on = Some(label.to_string());
        self
    }

    fn log(&mut self, call: &str, label: &str) -> Result<()> {
        self.calls.push(format!("{} {}", call, label));
        if self.fail_on.as_deref() == Some(label) {
            return Err(GitsiError::command_failed(call, "scripted failure"));
        }
        Ok(())
    }

    /// Calls other than `status`
    pub fn mutations(&self) -> Vec<&str> {
        self.calls
            .iter()
            .map(String::as_str)
            .filter(|call| *call != "status")
            .collect()
    }
}

impl Backend for FakeBackend {
    fn status(&mut self) -> Result<Vec<StatusRecord>> {
        self.calls.push("status".to_string());
        let snapshot = if self.snapshots.len() > 1 {
            self.snapshots.pop_front().unwrap_or_default()
        } else {
            self.snapshots.front().cloned().unwrap_or_default()
        };
        Ok(snapshot)
    }

    fn stage(&mut self, label: &str) -> Result<()> {
        self.log("stage", label)
    }

    fn unstage_from_index(&mut self, label: &str) -> Result<()> {
        self.log("unstage_from_index", label)
    }

    fn unstage_from_workspace(&mut self, label: &str) -> Result<()> {
        self.log("unstage_from_workspace", label)
    }

    fn discard_workspace_deletion(&mut self, label: &str) -> Result<()> {
        self.log("discard_workspace_deletion", label)
    }

    fn delete_untracked(&mut self, label: &str) {
        self.calls.push(format!("delete_untracked {}", label));
    }

    fn checkout(&mut self, label: &str) -> Result<()> {
        self.log("checkout", label)
    }

    fn run_interactive(&mut self, invocation: &Invocation) -> Result<()> {
        let display = invocation.display();
        self.log("run_interactive", &display)
    }

    fn run_external_command(&mut self, text: &str) -> Result<()> {
        self.log("run_external_command", text)
    }
}

/// Console answering confirmations from a script; unscripted questions get no
#[derive(Debug, Default)]
pub struct FakeConsole {
    pub answers: VecDeque<bool>,
    pub questions: Vec<String>,
    /// The app mode seen by each confirmation
    pub modes: Vec<Mode>,
    pub suspended: usize,
    pub resumed: usize,
}

impl FakeConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Console for FakeConsole {
    fn confirm(&mut self, mode: &mut Mode) -> Result<bool> {
        self.modes.push(mode.clone());
        let Mode::ConfirmDialog(prompt) = mode else {
            return Ok(false);
        };
        self.questions.push(prompt.question.clone());
        Ok(self.answers.pop_front().unwrap_or(false))
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspended += 1;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.resumed += 1;
        Ok(())
    }
}
