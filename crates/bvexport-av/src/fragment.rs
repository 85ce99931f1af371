//! Cached fragment files.
//!
//! The client stores each cached video as a pair of `.m4s` fragments (one
//! video track, one audio track), each prefixed with a proprietary 9-byte
//! header that must be discarded before the streams are usable.

use crate::Result;
use std::fs::File;
use std::io::{self, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// File extension used by cached fragment files.
pub const FRAGMENT_EXTENSION: &str = "m4s";

/// Length of the proprietary header prefixed to every fragment file.
pub const FRAGMENT_HEADER_LEN: u64 = 9;

/// Check if a path has the fragment file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use bvexport_av::fragment::is_fragment_file;
///
/// assert!(is_fragment_file(Path::new("30280.m4s")));
/// assert!(is_fragment_file(Path::new("/cache/123/video.M4S")));
/// assert!(!is_fragment_file(Path::new("videoInfo.json")));
/// ```
pub fn is_fragment_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(FRAGMENT_EXTENSION))
        .unwrap_or(false)
}

/// The two fragments selected for muxing.
///
/// The video track of a cached video is consistently the larger of the pair,
/// so selection is purely by byte size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamPair {
    pub video: PathBuf,
    pub audio: PathBuf,
}

/// Pick the video/audio pair from a directory's fragment files.
///
/// Sorts by file size descending and takes the two largest; any further
/// fragments are ignored. Returns `None` when fewer than two files are given.
/// Size lookups go through `fs::metadata`, so a fragment vanishing mid-run
/// surfaces as an I/O error.
pub fn select_stream_pair(files: &[PathBuf]) -> Result<Option<StreamPair>> {
    if files.len() < 2 {
        return Ok(None);
    }

    let mut sized: Vec<(PathBuf, u64)> = Vec::with_capacity(files.len());
    for file in files {
        let size = std::fs::metadata(file)?.len();
        sized.push((file.clone(), size));
    }
    sized.sort_by_key(|(_, size)| std::cmp::Reverse(*size));

    Ok(Some(StreamPair {
        video: sized[0].0.clone(),
        audio: sized[1].0.clone(),
    }))
}

/// Copy a fragment to `dest` with the proprietary header removed.
///
/// Byte-exact: the destination holds everything from offset 9 onward. A
/// source shorter than the header yields an empty destination file; whether
/// that is usable is left to the muxer. Returns the number of bytes copied.
pub fn strip_header(source: &Path, dest: &Path) -> Result<u64> {
    let mut input = File::open(source)?;
    input.seek(SeekFrom::Start(FRAGMENT_HEADER_LEN))?;

    let mut output = File::create(dest)?;
    let copied = io::copy(&mut input, &mut output)?;

    tracing::debug!("Stripped {:?} -> {:?} ({} bytes)", source, dest, copied);

    Ok(copied)
}
