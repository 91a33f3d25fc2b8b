//! Ordered command history with a navigation cursor and a one-slot draft cache.
//!
//! The draft cache exists so that a user who types a partial line, browses
//! backward through history, then browses forward past the newest entry
//! again sees the in-progress line they started with, rather than an empty
//! buffer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("no previous commands")]
    NoPrevious,
    #[error("no more commands")]
    NoNext,
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(i64),
}

/// Owns the submitted-command log and the cursor used to browse it.
#[derive(Debug, Default)]
pub struct History {
    commands: Vec<String>,
    index: usize,
    draft: Option<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `line` onto the tail, resets the cursor to "past the newest
    /// entry", and clears any stashed draft.
    pub fn append(&mut self, line: impl Into<String>) {
        self.commands.push(line.into());
        self.index = self.commands.len();
        self.draft = None;
    }

    /// Moves the cursor one entry backward, stashing `current_line` into the
    /// draft cache the first time navigation leaves the live editing
    /// position.
    pub fn prev(&mut self, current_line: &str) -> Result<String, HistoryError> {
        if self.index == 0 {
            return Err(HistoryError::NoPrevious);
        }
        if self.index == self.commands.len() {
            self.draft = Some(current_line.to_string());
        }
        self.index -= 1;
        Ok(self.commands[self.index].clone())
    }

    /// Moves the cursor one entry forward, or consumes the stashed draft when
    /// the cursor is already on the newest entry.
    pub fn next(&mut self) -> Result<String, HistoryError> {
        if self.index < self.commands.len().saturating_sub(1) {
            self.index += 1;
            return Ok(self.commands[self.index].clone());
        }
        if let Some(draft) = self.draft.take() {
            self.index = self.commands.len();
            return Ok(draft);
        }
        Err(HistoryError::NoNext)
    }

    pub fn reset_index(&mut self) {
        self.index = self.commands.len();
        self.draft = None;
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.reset_index();
    }

    pub fn count(&self) -> usize {
        self.commands.len()
    }

    pub fn get_at(&self, i: i64) -> Result<&str, HistoryError> {
        if i < 0 || i as usize >= self.commands.len() {
            return Err(HistoryError::IndexOutOfBounds(i));
        }
        Ok(&self.commands[i as usize])
    }

    pub fn get_all(&self) -> &[String] {
        &self.commands
    }

    /// Prints the last `limit` entries (oldest first); `0` or an oversize
    /// limit prints the entire log.
    pub fn print(&self, limit: usize) {
        let limit = if limit == 0 || limit > self.commands.len() {
            self.commands.len()
        } else {
            limit
        };
        let start = self.commands.len() - limit;
        for line in &self.commands[start..] {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_then_next_restores_draft() {
        let mut history = History::new();
        history.append("first");
        history.append("second");

        assert_eq!(history.prev("typing...").unwrap(), "second");
        assert_eq!(history.prev("typing...").unwrap(), "first");
        assert_eq!(history.next().unwrap(), "second");
        assert_eq!(history.next().unwrap(), "typing...");
        assert_eq!(history.next(), Err(HistoryError::NoNext));
    }

    #[test]
    fn prev_at_empty_history_errors() {
        let mut history = History::new();
        assert_eq!(history.prev("x"), Err(HistoryError::NoPrevious));
    }

    #[test]
    fn append_resets_cursor_and_clears_draft() {
        let mut history = History::new();
        history.append("a");
        history.append("b");
        history.prev("draft").unwrap();
        history.append("c");
        assert_eq!(history.count(), 3);
        // cursor is back past the newest entry; next() has nothing to offer
        assert_eq!(history.next(), Err(HistoryError::NoNext));
    }

    #[test]
    fn get_at_rejects_negative_and_oversize_index() {
        let mut history = History::new();
        history.append("only");
        assert_eq!(history.get_at(0).unwrap(), "only");
        assert!(history.get_at(-1).is_err());
        assert!(history.get_at(5).is_err());
    }

    #[test]
    fn clear_empties_log_and_resets_cursor() {
        let mut history = History::new();
        history.append("a");
        history.clear();
        assert_eq!(history.count(), 0);
        assert_eq!(history.prev("x"), Err(HistoryError::NoPrevious));
    }
}
