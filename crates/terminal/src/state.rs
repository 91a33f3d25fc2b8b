//! The `Terminal` value: the driver's public configuration plus the private
//! per-session state (history, cursor, selection, suggestion-row count).

use termline_types::{Command, Styles};
use termline_util::history::{History, HistoryError};

/// Reads, edits, validates and dispatches single-line commands from a
/// raw-mode TTY.
///
/// Holds the command schema and style configuration the embedding
/// application provides, plus the history log and the editor state for the
/// lifetime of one [`Terminal::get`] call. The schema is owned here (not
/// borrowed) so the driver can clone a resolved [`Command`] out of a call
/// without entangling its lifetime with the caller's.
pub struct Terminal {
    pub styles: Styles,
    pub commands: Vec<Command>,
    pub bypass_character: String,
    pub ctrl_keys: Vec<u8>,
    pub(crate) history: History,
    pub(crate) cursor: usize,
    pub(crate) selection_anchor: Option<usize>,
    pub(crate) autocomplete_lines: usize,
}

impl Terminal {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            styles: Styles::default(),
            commands,
            bypass_character: String::new(),
            ctrl_keys: Vec::new(),
            history: History::new(),
            cursor: 0,
            selection_anchor: None,
            autocomplete_lines: 0,
        }
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_bypass_character(mut self, bypass_character: impl Into<String>) -> Self {
        self.bypass_character = bypass_character.into();
        self
    }

    pub fn with_ctrl_keys(mut self, ctrl_keys: Vec<u8>) -> Self {
        self.ctrl_keys = ctrl_keys;
        self
    }

    /// Resets the editor state at the start of each [`Terminal::get`] call,
    /// matching the original's `t.init()`: cursor and selection are fresh
    /// every call, but history survives across calls on the same `Terminal`.
    pub(crate) fn init_editor(&mut self) {
        self.cursor = 0;
        self.selection_anchor = None;
        self.autocomplete_lines = 1;
        self.history.reset_index();
    }

    pub fn print_history(&self, limit: usize) {
        self.history.print(limit);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn count_history(&self) -> usize {
        self.history.count()
    }

    pub fn get_history_at(&self, index: i64) -> Result<&str, HistoryError> {
        self.history.get_at(index)
    }

    pub fn get_history(&self) -> &[String] {
        self.history.get_all()
    }
}
