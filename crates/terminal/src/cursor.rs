//! Arrow-key navigation, Shift+arrow selection tracking, and selection
//! highlighting. Grounded on `terminal_cursor.go`.

use crate::render::colorize;
use crate::state::Terminal;

impl Terminal {
    /// Handles a `\x1b[` CSI sequence's arrow/history navigation. Returns
    /// `false` for the reserved Shift+Up/Down and Alt+arrow patterns, which
    /// the caller treats as a no-op for the rest of this read iteration
    /// (matching spec.md's CSI sub-table).
    pub(crate) fn handle_cursor_and_continue(&mut self, buf: &[u8; 6], buffer: &mut String) -> bool {
        if buf[0] == 27 && buf[1] == 91 {
            match buf[2] {
                68 => {
                    if self.cursor > 0 {
                        self.cursor -= 1;
                    }
                }
                67 => {
                    if self.cursor < buffer.len() {
                        self.cursor += 1;
                    }
                }
                65 => {
                    if let Ok(line) = self.history.prev(buffer) {
                        self.replace_line(buffer, &line);
                    }
                }
                66 => {
                    if let Ok(line) = self.history.next() {
                        self.replace_line(buffer, &line);
                    }
                }
                _ => {}
            }

            // Shift+Up / Shift+Down: reserved, no-op.
            if buf[2] == 49 && buf[3] == 59 && buf[4] == 50 && (buf[5] == 65 || buf[5] == 66) {
                return false;
            }
            // Alt+arrow: reserved, no-op.
            if buf[2] == 49 && buf[3] == 59 && buf[4] == 51 && matches!(buf[5], 68 | 67 | 65 | 66) {
                return false;
            }
        }
        true
    }

    /// Must run before cursor navigation clears the anchor, and after the
    /// Ctrl-C copy check reads the *previous* iteration's selection — else
    /// Ctrl-C+Copy would always see an empty selection.
    pub(crate) fn update_selection(&mut self, buf: &[u8; 6], buffer_len: usize) {
        if buf[0] != 27 || buf[1] != 91 {
            return;
        }

        if buf[2] == 49 && buf[3] == 59 && buf[4] == 50 {
            if buf[5] == 68 {
                // Shift+Left
                if self.cursor > 0 {
                    self.selection_anchor.get_or_insert(self.cursor);
                    self.cursor -= 1;
                }
                return;
            }
            if buf[5] == 67 {
                // Shift+Right
                if self.cursor < buffer_len {
                    self.selection_anchor.get_or_insert(self.cursor);
                    self.cursor += 1;
                }
                return;
            }
        }

        // Any other CSI sequence (plain arrows, history, reserved) cancels an
        // in-progress selection.
        self.selection_anchor = None;
    }

    /// Colorizes the selected span with the selection palette, regular text
    /// on either side with the normal palette. Returns `None` when there is
    /// no active selection.
    pub(crate) fn highlight_selected(&self, buffer: &str) -> Option<String> {
        let anchor = self.selection_anchor?;
        let (start, end) = if anchor < self.cursor { (anchor, self.cursor) } else { (self.cursor, anchor) };

        Some(format!(
            "{}{}{}",
            colorize(&self.styles.foreground, &self.styles.background, &buffer[..start]),
            colorize(&self.styles.selection_foreground, &self.styles.selection_background, &buffer[start..end]),
            colorize(&self.styles.foreground, &self.styles.background, &buffer[end..]),
        ))
    }

    /// The substring currently selected, or the whole buffer when nothing is
    /// selected — the contract `Ctrl-C` copy relies on.
    pub(crate) fn selected_or_whole<'a>(&self, buffer: &'a str) -> &'a str {
        match self.selection_anchor {
            Some(anchor) => {
                let (start, end) = if anchor < self.cursor { (anchor, self.cursor) } else { (self.cursor, anchor) };
                &buffer[start..end]
            }
            None => buffer,
        }
    }
}
