//! Process-exec, clipboard and in-memory history helpers for the termline
//! prompt library.

pub mod history;
pub mod shell;

pub use history::{History, HistoryError};
pub use shell::{ShellError, exec_cmd, get_clipboard_content, set_clipboard};
