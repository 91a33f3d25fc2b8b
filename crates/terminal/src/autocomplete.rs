//! Tab-triggered suggestion listing and the column-wrapped layout it's
//! printed with. Grounded on `terminal_autocompletion.go`.

use termline_types::schema::sort_commands;

use crate::render::cursor_up;
use crate::state::Terminal;

impl Terminal {
    /// Visible (non-hidden) command names starting with `prefix`, excluding
    /// `prefix` itself, sorted ascending.
    pub(crate) fn filter_commands(&mut self, prefix: &str) -> Vec<String> {
        sort_commands(&mut self.commands);
        self.commands
            .iter()
            .filter(|c| c.name.starts_with(prefix) && c.name != prefix && !c.hidden)
            .map(|c| c.name.clone())
            .collect()
    }

    /// Prints the suggestion list on the row(s) below the input row,
    /// tracking how many rows it used so the next redraw can erase them.
    pub(crate) fn print_autocomplete_suggestions(&mut self, buffer: &str) {
        self.clean_next_lines(self.autocomplete_lines);
        self.clean_next_line_and_stay();

        let items = self.filter_commands(buffer);
        let (adjusted, lines) = adjust_suggestion_layout(&items, "    ");
        let lines = lines.max(1);
        self.autocomplete_lines = lines;

        print!("{}{}", self.styles.suggestion_foreground, adjusted);
        cursor_up(lines);
        self.move_cursor_to_pos(self.cursor);
    }
}

/// Wraps `items` across terminal-width rows joined by `separator`, the way
/// `GetAdjustedLine` does: a line grows until the next item would overflow
/// the terminal width, then wraps. Returns `("", 0)` when the terminal size
/// can't be read or a single item can't fit on its own line.
fn adjust_suggestion_layout(items: &[String], separator: &str) -> (String, usize) {
    let max_len = match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => return (String::new(), 0),
    };
    wrap_items(items, separator, max_len)
}

fn wrap_items(items: &[String], separator: &str, max_len: usize) -> (String, usize) {
    let mut adjusted = String::new();
    let mut current_line = String::new();
    let mut line_count = 1usize;

    for item in items {
        if item.len() + separator.len() > max_len {
            return (String::new(), 0);
        }

        if current_line.len() + separator.len() + item.len() >= max_len {
            adjusted.push_str(&current_line);
            adjusted.push_str("\n\x1b[G");
            line_count += 1;
            current_line = item.clone();
        } else if current_line.is_empty() {
            current_line.push_str(item);
        } else {
            current_line.push_str(separator);
            current_line.push_str(item);
        }
    }

    adjusted.push_str(&current_line);
    (adjusted, line_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_under_width_stays_on_one_line() {
        let items = vec!["help".to_string(), "hello".to_string()];
        let (adjusted, lines) = wrap_items(&items, "  ", 80);
        assert_eq!(adjusted, "help  hello");
        assert_eq!(lines, 1);
    }

    #[test]
    fn overflowing_item_wraps_to_a_new_line() {
        let items = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
        let (adjusted, lines) = wrap_items(&items, "  ", 12);
        assert_eq!(adjusted, "alpha  beta\n\x1b[Ggamma");
        assert_eq!(lines, 2);
    }

    #[test]
    fn oversize_item_yields_empty_layout() {
        let items = vec!["x".repeat(500)];
        let (adjusted, lines) = wrap_items(&items, "  ", 80);
        assert_eq!(adjusted, "");
        assert_eq!(lines, 0);
    }
}
