//! ANSI escape emission: line clearing, cursor positioning, coloring.
//!
//! Pure output — the buffer and cursor are the source of truth, the screen
//! is a projection of them. All writes here are fire-and-forget.

use termline_types::styles::RESET;

pub(crate) fn colorize(fg: &str, bg: &str, text: &str) -> String {
    format!("{fg}{bg}{text}{RESET}")
}

pub(crate) fn move_to_column(col: usize) {
    print!("\x1b[{}G", col);
}

pub(crate) fn clear_to_end_of_line() {
    print!("\x1b[K");
}

pub(crate) fn cursor_left(n: usize) {
    if n > 0 {
        print!("\x1b[{n}D");
    }
}

pub(crate) fn cursor_right(n: usize) {
    if n > 0 {
        print!("\x1b[{n}C");
    }
}

pub(crate) fn cursor_up(n: usize) {
    if n > 0 {
        print!("\x1b[{n}A");
    }
}

pub(crate) fn clear_screen() {
    print!("\x1b[H\x1b[2J");
}
