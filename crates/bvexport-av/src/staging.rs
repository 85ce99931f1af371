//! Temporary staging files for extraction.

use std::path::{Path, PathBuf};

/// Staging filename for the stripped video fragment.
pub const VIDEO_TEMP_NAME: &str = "v_temp.m4s";

/// Staging filename for the stripped audio fragment.
pub const AUDIO_TEMP_NAME: &str = "a_temp.m4s";

/// The two per-directory temp files holding header-stripped streams.
///
/// The files live next to the fragments they were stripped from, so the copy
/// stays on the same filesystem as the source. Dropping the pair removes
/// whichever files exist, which makes cleanup run on every exit path out of a
/// directory's processing, error or not.
#[derive(Debug)]
pub struct StagingPair {
    video: PathBuf,
    audio: PathBuf,
}

impl StagingPair {
    /// Reserve the staging paths inside a candidate directory.
    ///
    /// No files are created; the paths are populated by header stripping.
    pub fn new(dir: &Path) -> Self {
        Self {
            video: dir.join(VIDEO_TEMP_NAME),
            audio: dir.join(AUDIO_TEMP_NAME),
        }
    }

    /// Path of the stripped video stream.
    pub fn video(&self) -> &Path {
        &self.video
    }

    /// Path of the stripped audio stream.
    pub fn audio(&self) -> &Path {
        &self.audio
    }
}

impl Drop for StagingPair {
    fn drop(&mut self) {
        for path in [&self.video, &self.audio] {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!("Failed to remove temp file {:?}: {}", path, e);
                }
            }
        }
    }
}
