//! Keys and the Normal-mode dispatch table.
//!
//! Terminal events are reduced to [`Key`] so the state machine can be driven
//! from tests without crossterm. [`KeyBindings`] maps keys to [`Command`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// A keystroke as seen by the input state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Enter,
    Esc,
    Backspace,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Other,
}

impl Key {
    /// Printable character carried by this key, if any
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }

    pub fn digit(&self) -> Option<char> {
        match self {
            Key::Char(c) if c.is_ascii_digit() => Some(*c),
            _ => None,
        }
    }

    pub fn is_interrupt(&self) -> bool {
        matches!(self, Key::Ctrl('c'))
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char(c) if ctrl => Key::Ctrl(c.to_ascii_lowercase()),
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

/// Normal-mode commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Down,
    Up,
    PageDown,
    PageUp,
    Top,
    Bottom,
    GotoIndex,
    GotoWorkspace,
    GotoUntracked,
    Stage,
    Unstage,
    StageMarked,
    UnstageMarked,
    Discard,
    Diff,
    AddPatch,
    Commit,
    Amend,
    ToggleMark,
    ToggleSectionMark,
    ToggleVisual,
    Search,
    CommandLine,
    Help,
    Cancel,
    Quit,
}

impl Command {
    /// Commands that take the pending repeat count as a repetition factor
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Command::Down | Command::Up | Command::PageDown | Command::PageUp
        )
    }
}

/// Maps keys to Normal-mode commands
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<Key, Command>,
}

impl KeyBindings {
    /// Look up the command for a key
    pub fn get(&self, key: Key) -> Option<Command> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Movement
        bindings.insert(Key::Char('j'), Command::Down);
        bindings.insert(Key::Down, Command::Down);
        bindings.insert(Key::Char('k'), Command::Up);
        bindings.insert(Key::Up, Command::Up);
        bindings.insert(Key::Ctrl('d'), Command::PageDown);
        bindings.insert(Key::PageDown, Command::PageDown);
        bindings.insert(Key::Ctrl('u'), Command::PageUp);
        bindings.insert(Key::PageUp, Command::PageUp);

        // Navigation
        bindings.insert(Key::Char('g'), Command::Top);
        bindings.insert(Key::Home, Command::Top);
        bindings.insert(Key::Char('G'), Command::Bottom);
        bindings.insert(Key::End, Command::Bottom);
        bindings.insert(Key::Char('!'), Command::GotoIndex);
        bindings.insert(Key::Char('@'), Command::GotoWorkspace);
        bindings.insert(Key::Char('#'), Command::GotoUntracked);

        // Actions
        bindings.insert(Key::Char('s'), Command::Stage);
        bindings.insert(Key::Char('u'), Command::Unstage);
        bindings.insert(Key::Char('S'), Command::StageMarked);
        bindings.insert(Key::Char('U'), Command::UnstageMarked);
        bindings.insert(Key::Char('x'), Command::Discard);

        // Handoffs
        bindings.insert(Key::Char('d'), Command::Diff);
        bindings.insert(Key::Char('i'), Command::AddPatch);
        bindings.insert(Key::Char('c'), Command::Commit);
        bindings.insert(Key::Char('C'), Command::Amend);

        // Marks
        bindings.insert(Key::Char('m'), Command::ToggleMark);
        bindings.insert(Key::Char('M'), Command::ToggleSectionMark);
        bindings.insert(Key::Char('V'), Command::ToggleVisual);

        // Modes
        bindings.insert(Key::Char('/'), Command::Search);
        bindings.insert(Key::Char(':'), Command::CommandLine);
        bindings.insert(Key::Char('h'), Command::Help);
        bindings.insert(Key::Esc, Command::Cancel);
        bindings.insert(Key::Char('q'), Command::Quit);

        Self { bindings }
    }
}
