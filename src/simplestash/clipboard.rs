//! Cross-platform "set system clipboard text" via the native helper tools:
//! `pbcopy` on macOS, `xclip`/`xsel` on Linux, `clip` on Windows.
//!
//! Clipboard failure is recoverable: the caller warns the user and moves on.
//! It must never affect the store.

use crate::error::{Result, StashError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Places `text` on the system clipboard.
pub fn set_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_through(Command::new("pbcopy"), text)
    }

    #[cfg(target_os = "linux")]
    {
        // xclip first, xsel as the fallback.
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        match pipe_through(xclip, text) {
            Ok(()) => Ok(()),
            Err(_) => {
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                pipe_through(xsel, text).map_err(|e| {
                    StashError::Clipboard(format!("{e}. Install xclip or xsel."))
                })
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_through(Command::new("clip"), text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(StashError::Clipboard(
            "clipboard is not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_through(mut command: Command, text: &str) -> Result<()> {
    let tool = command.get_program().to_string_lossy().into_owned();
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| StashError::Clipboard(format!("failed to spawn {tool}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| StashError::Clipboard(format!("failed to write to {tool}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| StashError::Clipboard(format!("failed to wait for {tool}: {e}")))?;
    if status.success() {
        Ok(())
    } else {
        Err(StashError::Clipboard(format!("{tool} exited with an error")))
    }
}
