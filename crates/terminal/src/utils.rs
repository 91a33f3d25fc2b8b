//! Small cursor/line bookkeeping helpers shared by the dispatch, autocomplete
//! and help modules. Grounded on `terminal_utils.go`.

use crate::render::{clear_to_end_of_line, cursor_up, move_to_column};
use crate::state::Terminal;

impl Terminal {
    /// Replaces the whole line with `text`, repositioning the cursor at its
    /// end. Used for history navigation and autocomplete replacement.
    pub(crate) fn replace_line(&mut self, buffer: &mut String, text: &str) {
        self.clean_line();
        print!("{text}");
        self.cursor = text.len();
        self.move_cursor_to_pos(self.cursor);
        *buffer = text.to_string();
    }

    /// Clears the input row and returns the cursor to column 1 of it.
    pub(crate) fn clean_line(&self) {
        self.move_cursor_to_pos(0);
        clear_to_end_of_line();
    }

    /// Clears the row directly below the input row without moving the
    /// terminal cursor off the input row once done.
    pub(crate) fn clean_next_line_and_stay(&self) {
        println!();
        move_to_column(1);
        clear_to_end_of_line();
    }

    /// Clears `n` rows below the input row (at least one), then restores
    /// the cursor to the input row at its current column. Used to erase
    /// autocomplete suggestion text before a redraw.
    pub(crate) fn clean_next_lines(&self, n: usize) {
        let n = n.max(1);
        for _ in 0..n {
            self.clean_next_line_and_stay();
        }
        cursor_up(n);
        self.move_cursor_to_pos(self.cursor);
    }

    /// Moves the terminal cursor to column `pos + prompt_width + 1`, i.e.
    /// immediately after the prompt plus `pos` buffer bytes.
    pub(crate) fn move_cursor_to_pos(&self, pos: usize) {
        move_to_column(pos + self.styles.prompt.len() + 1);
    }

    pub(crate) fn print_prompt(&self) {
        print!("{}{}{}", self.styles.prompt_color, self.styles.prompt, self.styles.cursor.escape());
    }
}
