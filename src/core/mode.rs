//! Input modes and the small buffers they own.
//!
//! # Public API
//! - [`Mode`]: the state of the input state machine
//! - [`Prompt`]: question shown by the confirmation dialog
//! - [`RepeatCount`]: bounded digit prefix for movement commands
//! - [`EditBuffer`]: bounded line buffer for search and command entry
//! - [`confirm_loop`]: the blocking yes/no read loop

use crate::core::error::Result;
use crate::core::filter::MAX_SEARCH_CHARS;
use crate::core::keys::Key;

/// Most digits a repeat count holds; further digits are dropped
pub const MAX_REPEAT_DIGITS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub question: String,
    /// Set after an answer that was neither yes nor no
    pub emphasis: bool,
}

impl Prompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            emphasis: false,
        }
    }

    /// Feed one key: `Some` answer for yes or no (an interrupt is no),
    /// otherwise `None` with the emphasis flag raised
    pub fn answer(&mut self, key: Key) -> Option<bool> {
        match key {
            Key::Char('y' | 'Y') => Some(true),
            Key::Char('n' | 'N') => Some(false),
            key if key.is_interrupt() => Some(false),
            _ => {
                self.emphasis = true;
                None
            }
        }
    }

    /// Text drawn on the prompt line
    pub fn text(&self) -> String {
        if self.emphasis {
            format!("PLEASE ENTER {} [Y]es or [N]o", self.question)
        } else {
            format!("{} [Y]es or [N]o", self.question)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    SearchEdit,
    CommandEdit,
    HelpOverlay,
    ConfirmDialog(Prompt),
}

impl Mode {
    pub fn is_normal(&self) -> bool {
        matches!(self, Mode::Normal)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatCount {
    digits: String,
}

impl RepeatCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit; ignored once the count is full
    pub fn push(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.digits.len() < MAX_REPEAT_DIGITS {
            self.digits.push(digit);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Consume the count, or `None` if no digit was typed
    pub fn take(&mut self) -> Option<usize> {
        let value = self.digits.parse().ok();
        self.digits.clear();
        value
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content, truncated to the buffer limit
    pub fn seed(&mut self, text: &str) {
        self.text = text.chars().take(MAX_SEARCH_CHARS).collect();
    }

    /// Append a character; returns false when the buffer is full
    pub fn push(&mut self, c: char) -> bool {
        if self.text.chars().count() >= MAX_SEARCH_CHARS {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Ask `prompt` until the user answers yes or no.
///
/// `draw` is called before every read; after an unrecognised key the prompt is
/// redrawn with its emphasis flag set. An interrupt answers no.
pub fn confirm_loop<R, D>(prompt: &mut Prompt, mut read_key: R, mut draw: D) -> Result<bool>
where
    R: FnMut() -> Result<Key>,
    D: FnMut(&Prompt) -> Result<()>,
{
    loop {
        draw(prompt)?;
        if let Some(answer) = prompt.answer(read_key()?) {
            return Ok(answer);
        }
    }
}
