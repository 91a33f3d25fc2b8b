//! Interactive raw-mode command-line prompt: reads, edits, validates and
//! dispatches a single line at a time.
//!
//! Grounded end-to-end on `internal/core/terminal.go` and its sibling files
//! in `original_source/`; module-by-module grounding is documented on each
//! submodule below.

mod autocomplete;
mod cursor;
mod error;
mod help;
mod print;
mod raw_mode;
mod render;
mod special_keys;
mod state;
mod utils;

pub use error::TerminalError;
pub use raw_mode::{RawModeGuard, SignalGuard};
pub use state::Terminal;

use std::io::Read;

use termline_types::response::{Response, ResponseType};
use termline_util::shell;

impl Terminal {
    /// Reads, edits and dispatches one line from the controlling TTY.
    ///
    /// `prefill`, if non-empty, seeds the buffer before the read loop
    /// starts; only the first element is used (§9's documented quirk — a
    /// later source snapshot joined multiple prefill strings with spaces,
    /// an earlier one used only the first; this follows the single-prefill
    /// contract).
    pub fn get(&mut self, prefill: &[&str]) -> Response {
        let _raw_mode = match RawModeGuard::acquire() {
            Ok(guard) => guard,
            Err(err) => return self.finish(Response::new(ResponseType::ExecutionError).with_error(err.to_string())),
        };
        let _signal_guard = match SignalGuard::install() {
            Ok(guard) => guard,
            Err(err) => return self.finish(Response::new(ResponseType::ExecutionError).with_error(err.to_string())),
        };

        self.init_editor();

        let mut buffer = prefill.first().map(|s| s.to_string()).unwrap_or_default();
        self.cursor = buffer.len();

        self.print_prompt();
        self.render_line(&buffer);

        let mut stdin = std::io::stdin();
        loop {
            let mut buf = [0u8; 6];
            let n = match stdin.read(&mut buf) {
                Ok(n) => n,
                Err(err) => {
                    return self
                        .finish(Response::new(ResponseType::ExecutionError).with_error(TerminalError::Read(err).to_string()));
                }
            };
            if n == 0 {
                continue;
            }

            if matches!(buf[0], 10 | 13) && !buffer.is_empty() {
                return self.submit(&buffer);
            }

            if let Some(overridden) = self.check_overridden_ctrl(buf[0]) {
                return self.finish(Response::new(ResponseType::CtrlKey).with_ctrl_key(overridden));
            }

            self.update_selection(&buf, buffer.len());

            if self.handle_special_key(buf[0], &mut buffer) {
                let _ = crossterm::terminal::disable_raw_mode();
                std::process::exit(0);
            }

            if buf[0] == 9 {
                if self.handle_tab(&mut buffer) {
                    self.render_line(&buffer);
                }
                continue;
            }

            if buf[0] == 127 {
                if self.cursor > 0 {
                    buffer.remove(self.cursor - 1);
                    self.cursor -= 1;
                }
                self.render_line(&buffer);
                continue;
            }

            if buf[0] == 27 && buf[1] == 91 {
                if self.handle_cursor_and_continue(&buf, &mut buffer) {
                    self.render_line(&buffer);
                }
                continue;
            }

            if (32..127).contains(&buf[0]) {
                buffer.insert(self.cursor, buf[0] as char);
                self.cursor += 1;
                self.render_line(&buffer);
                continue;
            }

            self.render_line(&buffer);
        }
    }

    /// §4.5.2: resolve `buffer` against the visible command names. A full
    /// match (`matched == buffer`) means more than one command shares this
    /// prefix — render the suggestion list (which manages its own redraw)
    /// and report "no further redraw needed" so the caller doesn't erase
    /// the suggestions it was just asked to show. Otherwise a single
    /// command is resolvable: replace the buffer with it, appending a
    /// trailing space once it's fully resolved, and ask for the normal
    /// redraw.
    fn handle_tab(&mut self, buffer: &mut String) -> bool {
        let visible: Vec<&str> = self.commands.iter().filter(|c| !c.hidden).map(|c| c.name.as_str()).collect();
        let (matched, resolved) = termline_matcher::best_match(buffer, &visible);
        if matched == *buffer {
            self.print_autocomplete_suggestions(buffer);
            return false;
        }

        let mut replacement = matched;
        if resolved {
            replacement.push(' ');
        }
        self.cursor = replacement.len();
        *buffer = replacement;
        true
    }

    /// Clears the suggestion rows (if any) and the input row, then redraws
    /// the buffer with selection highlighting and repositions the cursor —
    /// §4.5.3's rendering step, run after every non-continuing iteration.
    fn render_line(&mut self, buffer: &str) {
        self.clean_next_lines(self.autocomplete_lines);
        self.clean_line();
        match self.highlight_selected(buffer) {
            Some(highlighted) => print!("{highlighted}"),
            None => print!("{}{buffer}{}", self.styles.foreground, termline_types::styles::RESET),
        }
        self.move_cursor_to_pos(self.cursor);
    }

    /// §4.5.1: bypass-shell execution, trailing-`?` help, or full parameter
    /// validation, in that order.
    fn submit(&mut self, buffer: &str) -> Response {
        if !self.bypass_character.is_empty() && buffer.starts_with(self.bypass_character.as_str()) {
            self.history.append(buffer);
            let suffix = &buffer[self.bypass_character.len()..];
            shell::exec_cmd(suffix);
            let response = Response::new(ResponseType::OsCmd).with_raw_input(suffix);
            return self.finish(response);
        }

        let trimmed = buffer.trim_matches(' ');

        if let Some(head) = trimmed.strip_suffix('?') {
            let head = head.trim_end_matches(' ');
            let first_token = head.split_whitespace().next().unwrap_or(head);
            return match termline_validator::resolve_command(&self.commands, first_token) {
                Some(command) => {
                    let command = command.clone();
                    self.print_help(&command);
                    self.finish(
                        Response::new(ResponseType::CmdHelp).with_raw_input(buffer).with_command(command.name.as_str()),
                    )
                }
                None => {
                    self.finish(Response::new(ResponseType::CmdError).with_raw_input(buffer).with_error("invalid command"))
                }
            };
        }

        match termline_validator::validate_command(&self.commands, trimmed) {
            Ok((command, params)) => {
                self.history.append(buffer);
                let rewritten = rewrite_first_token(buffer, &command.name);
                let mut response =
                    Response::new(ResponseType::Cmd).with_raw_input(rewritten.as_str()).with_command(command.name.as_str());
                response.params = params;
                self.finish(response)
            }
            Err(err) => {
                let response_type =
                    if err.is_command_error() { ResponseType::CmdError } else { ResponseType::ParamError };
                self.finish(Response::new(response_type).with_raw_input(buffer).with_error(err.to_string()))
            }
        }
    }

    /// §4.6: the single exit path every branch of `get` funnels through.
    /// The raw-mode and signal guards restore themselves via `Drop` once
    /// this returns; printing the trailing newline here is this helper's
    /// own contribution.
    fn finish(&self, response: Response) -> Response {
        println!();
        response
    }
}

/// Replaces exactly the first whitespace-delimited token of `line` with
/// `canonical`, preserving everything from the first whitespace byte
/// onward verbatim — matching the original's
/// `regexp.MustCompile(^\S+).ReplaceAllString` behavior.
fn rewrite_first_token(line: &str, canonical: &str) -> String {
    match line.find(char::is_whitespace) {
        Some(idx) => format!("{canonical}{}", &line[idx..]),
        None => canonical.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_first_token_preserves_trailing_args() {
        assert_eq!(rewrite_first_token("pin example.com", "ping"), "ping example.com");
    }

    #[test]
    fn rewrite_first_token_handles_bare_command() {
        assert_eq!(rewrite_first_token("pin", "ping"), "ping");
    }

    #[test]
    fn rewrite_first_token_preserves_multiple_spaces() {
        assert_eq!(rewrite_first_token("pin   -c 3", "ping"), "ping   -c 3");
    }
}
