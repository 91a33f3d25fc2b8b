//! Errors surfaced as `ResponseType::ExecutionError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("failed to enter raw mode: {0}")]
    RawMode(#[source] std::io::Error),
    #[error("failed to read from stdin: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to install SIGINT handler: {0}")]
    Signal(#[source] std::io::Error),
}
