use crate::error::StoreError;

/// Copies text to the system clipboard. Failures are reported but
/// never fatal; the caller surfaces them as a notice.
#[cfg(not(target_os = "linux"))]
pub fn copy_text(_text: &str) -> Result<(), StoreError> {
    Err(StoreError::Clipboard(
        "clipboard copy is only supported on Linux".to_string(),
    ))
}

#[cfg(target_os = "linux")]
pub fn copy_text(text: &str) -> Result<(), StoreError> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    // Try wl-copy first (Wayland), then xclip
    let spawned = Command::new("wl-copy")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .or_else(|_| {
            Command::new("xclip")
                .args(["-selection", "clipboard"])
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .spawn()
        });

    let mut child = spawned.map_err(|_| {
        StoreError::Clipboard("clipboard tools not available (wl-copy or xclip)".to_string())
    })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|err| StoreError::Clipboard(format!("failed to write content: {err}")))?;
    }

    let status = child
        .wait()
        .map_err(|err| StoreError::Clipboard(err.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(StoreError::Clipboard(
            "clipboard tool exited with an error".to_string(),
        ))
    }
}
