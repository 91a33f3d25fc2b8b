//! OS-bypass shell execution and clipboard access.
//!
//! Both collaborators are one-shot invocations of a platform-native binary,
//! matched per `std::env::consts::OS` the same way across the two concerns.
//! Neither is meant to block the editor meaningfully: clipboard access in
//! particular is treated as best-effort.

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unsupported operating system: {0}")]
    UnsupportedOs(&'static str),
    #[error("failed to spawn process: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Runs `command` through the OS shell and prints its combined output.
///
/// Mirrors the bypass-character contract: the caller already stripped the
/// bypass prefix, this only needs to execute what remains.
pub fn exec_cmd(command: &str) {
    let output = if cfg!(target_os = "windows") {
        Command::new("powershell").arg("-Command").arg(command).output()
    } else {
        Command::new("bash").arg("-c").arg(command).output()
    };

    match output {
        Ok(output) => {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            println!("{text}");
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to execute bypassed command");
            println!("error executing command: {err}");
        }
    }
}

/// Reads the system clipboard, shelling out to the platform-native reader.
///
/// Returns a diagnostic string (not an error) when the platform is
/// unsupported or the native tool is missing, matching the original
/// "never block the editor" contract: a failed paste degrades to an
/// apologetic message rather than aborting the read loop.
pub fn get_clipboard_content() -> Result<String, ShellError> {
    let (program, args): (&str, &[&str]) = match std::env::consts::OS {
        "macos" => ("pbpaste", &[]),
        "linux" => ("xclip", &["-o"]),
        "windows" => ("powershell", &["-Command", "Get-Clipboard"]),
        other => return Err(ShellError::UnsupportedOs(leak_os_name(other))),
    };

    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        _ => Ok(format!("cannot get the clipboard. please install {program}.")),
    }
}

/// Writes `content` to the system clipboard via the platform-native writer.
pub fn set_clipboard(content: &str) -> Result<(), ShellError> {
    let (program, args): (&str, &[&str]) = match std::env::consts::OS {
        "macos" => ("pbcopy", &[]),
        "linux" => ("xclip", &["-selection", "clipboard"]),
        "windows" => ("clip", &[]),
        other => return Err(ShellError::UnsupportedOs(leak_os_name(other))),
    };

    let mut child = Command::new(program).args(args).stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(content.as_bytes())?;
    }
    child.wait()?;
    Ok(())
}

fn leak_os_name(os: &str) -> &'static str {
    match os {
        "macos" => "macos",
        "linux" => "linux",
        "windows" => "windows",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_os_is_reported() {
        // `leak_os_name` degrades any unrecognized OS string to "unknown"
        // rather than panicking on an unbounded lifetime.
        assert_eq!(leak_os_name("plan9"), "unknown");
    }
}
