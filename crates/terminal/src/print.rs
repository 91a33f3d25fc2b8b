//! Out-of-band status lines: informational, success, warning and error
//! writers that bypass the editor's line-redraw machinery entirely. Grounded
//! on `terminal_print.go`.

use crate::state::Terminal;

impl Terminal {
    pub fn print_info(&self, text: &str) {
        println!("{}{text}{}", "\x1b[36m", termline_types::styles::RESET);
    }

    pub fn print_success(&self, text: &str) {
        println!("{}{text}{}", "\x1b[32m", termline_types::styles::RESET);
    }

    pub fn print_warning(&self, text: &str) {
        println!("{}{text}{}", "\x1b[33m", termline_types::styles::RESET);
    }

    pub fn print_error(&self, text: &str) {
        eprintln!("{}{text}{}", "\x1b[31m", termline_types::styles::RESET);
    }

    pub fn print_text(&self, text: &str) {
        print!("{text}");
    }
}
