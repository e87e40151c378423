//! Clipboard integration via the platform's clipboard tools.
//!
//! Copying is the board's only boundary crossing with latency. It is treated
//! as fire-and-forget: the caller reports the outcome to the user and moves
//! on; no core state depends on it.

use anyhow::{Context, Result};

/// Places `text` on the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        let _ = text;
        return Err(anyhow::anyhow!(
            "Clipboard tools are not available on this platform"
        ));
    }

    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        // X11 first, Wayland as the fallback.
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("wl-copy", &[], text))
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to launch {program}"))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write clipboard content to {program}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {program}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{program} exited with {status}"))
    }
}
