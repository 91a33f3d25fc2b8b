//! Scoped acquisition of TTY raw mode and a SIGINT hard-exit watcher.
//!
//! Both guards restore/tear down on `Drop`, independent of which branch of
//! `Terminal::get` returns — the Rust expression of the original's
//! `defer term.Restore(...)`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use signal_hook::consts::SIGINT;
use signal_hook::{SigId, flag, low_level};

use crate::error::TerminalError;

/// Holds the TTY in raw mode for its lifetime; restores cooked mode on drop.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn acquire() -> Result<Self, TerminalError> {
        crossterm::terminal::enable_raw_mode().map_err(TerminalError::RawMode)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Watches for SIGINT arriving while the blocking stdin read has not yet
/// been unblocked by a buffered byte (e.g. a signal from another process).
///
/// Normal Ctrl-C delivery is handled as a plain input byte (`buf[0] == 3`,
/// see §4.5's dispatch table) since raw mode disables the terminal's own
/// signal-generating line discipline; this guard only covers the
/// asynchronous case that can't reach the read loop that way.
pub struct SignalGuard {
    sig_id: Option<SigId>,
    stop: Arc<AtomicBool>,
}

impl SignalGuard {
    pub fn install() -> Result<Self, TerminalError> {
        let raised = Arc::new(AtomicBool::new(false));
        let sig_id = flag::register(SIGINT, Arc::clone(&raised)).map_err(TerminalError::Signal)?;

        let stop = Arc::new(AtomicBool::new(false));
        let watcher_stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !watcher_stop.load(Ordering::Relaxed) {
                if raised.load(Ordering::Relaxed) {
                    let _ = crossterm::terminal::disable_raw_mode();
                    println!();
                    std::process::exit(130);
                }
                thread::sleep(Duration::from_millis(50));
            }
        });

        Ok(Self { sig_id: Some(sig_id), stop })
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(id) = self.sig_id.take() {
            low_level::unregister(id);
        }
    }
}
