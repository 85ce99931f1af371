//! Stream muxing via the ffmpeg CLI.

use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Mux a stripped video and audio stream into an MP4 container.
///
/// Both streams are copied without re-encoding, so the mux is fast and
/// lossless. `ffmpeg` names the binary to invoke, either a bare name resolved
/// through `PATH` or an explicit path from configuration. An existing output
/// file is overwritten.
pub fn mux_copy(ffmpeg: &Path, video: &Path, audio: &Path, output: &Path) -> Result<()> {
    tracing::debug!("Muxing {:?} + {:?} -> {:?}", video, audio, output);

    let mut cmd = Command::new(ffmpeg);
    cmd.args(["-y", "-loglevel", "error", "-i"])
        .arg(video)
        .arg("-i")
        .arg(audio)
        .args(["-c:v", "copy", "-c:a", "copy"])
        .arg(output);

    let result = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found(ffmpeg.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(Error::tool_failed(
            ffmpeg.display().to_string(),
            stderr.to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_reports_tool_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = mux_copy(
            Path::new("nonexistent_tool_12345"),
            &dir.path().join("v.m4s"),
            &dir.path().join("a.m4s"),
            &dir.path().join("out.mp4"),
        );
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_reports_tool_failed() {
        let dir = tempfile::tempdir().unwrap();
        let result = mux_copy(
            Path::new("false"),
            &dir.path().join("v.m4s"),
            &dir.path().join("a.m4s"),
            &dir.path().join("out.mp4"),
        );
        assert!(matches!(result, Err(Error::ToolFailed { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_zero_exit_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let result = mux_copy(
            Path::new("true"),
            &dir.path().join("v.m4s"),
            &dir.path().join("a.m4s"),
            &dir.path().join("out.mp4"),
        );
        assert!(result.is_ok());
    }
}
