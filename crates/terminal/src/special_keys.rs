//! Single-byte Ctrl-key handling and clipboard collaboration. Grounded on
//! `terminal_special_keys.go`.
//!
//! The original source's two most recent `term.go` snapshots disagree on
//! whether Ctrl-C means "copy" or "exit"; `terminal_special_keys.go` (the
//! file actually wired into `Terminal.checkSpecialKeys`) resolves it as
//! copy, with Ctrl-X as the hard exit. That's what's implemented here.

use termline_util::shell;

use crate::render::clear_screen;
use crate::state::Terminal;

pub(crate) const CTRL_A: u8 = 1;
pub(crate) const CTRL_C: u8 = 3;
pub(crate) const CTRL_E: u8 = 5;
pub(crate) const CTRL_L: u8 = 12;
pub(crate) const CTRL_V: u8 = 22;
pub(crate) const CTRL_X: u8 = 24;

impl Terminal {
    /// Returns the byte itself when `input` is one of the application's
    /// overridden control keys, so the caller can return `CtrlKey` instead
    /// of applying the built-in binding below.
    pub(crate) fn check_overridden_ctrl(&self, input: u8) -> Option<u8> {
        self.ctrl_keys.iter().copied().find(|&b| b == input)
    }

    /// Applies the built-in Ctrl-key bindings. Returns `true` when the host
    /// process should exit immediately (Ctrl-X) — the caller disables raw
    /// mode and calls `std::process::exit` directly, matching
    /// `FnExitProgram`'s `os.Exit(0)` in the original; this never returns
    /// a `CtrlKey` response, since Ctrl-X never hands control back.
    pub(crate) fn handle_special_key(&mut self, input: u8, buffer: &mut String) -> bool {
        match input {
            CTRL_X => return true,
            CTRL_C => self.copy_to_clipboard(buffer),
            CTRL_V => self.paste_clipboard(buffer),
            CTRL_L => {
                clear_screen();
                self.print_prompt();
            }
            CTRL_A => self.cursor = 0,
            CTRL_E => self.cursor = buffer.len(),
            _ => {}
        }
        false
    }

    fn copy_to_clipboard(&self, buffer: &str) {
        let text = self.selected_or_whole(buffer);
        if let Err(err) = shell::set_clipboard(text) {
            tracing::warn!(error = %err, "failed to copy to clipboard");
        }
    }

    fn paste_clipboard(&mut self, buffer: &mut String) {
        match shell::get_clipboard_content() {
            Ok(content) => {
                let mut extended = buffer.clone();
                extended.push_str(&content);
                self.replace_line(buffer, &extended);
            }
            Err(err) => tracing::warn!(error = %err, "failed to read clipboard"),
        }
    }
}
