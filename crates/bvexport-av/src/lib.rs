//! # bvexport-av
//!
//! Bilibili cache fragment extraction and muxing library.
//!
//! This crate provides functionality for:
//! - Parsing `videoInfo.json` documents with fallbacks for missing fields
//! - Selecting the audio/video pair among `.m4s` fragments and stripping
//!   their embedded header
//! - Staging stripped streams next to the fragments they came from, with
//!   cleanup on drop
//! - Muxing staged streams into an MP4 container via the ffmpeg CLI
//!
//! ## Example
//!
//! ```no_run
//! use bvexport_av::{artifact_name, load_metadata};
//!
//! let meta = load_metadata("/path/to/cache/videoInfo.json")?;
//! println!("Exporting as {}", artifact_name(&meta.bvid, &meta.title));
//! # Ok::<(), bvexport_av::Error>(())
//! ```

mod error;
pub mod fragment;
pub mod metadata;
pub mod mux;
pub mod naming;
pub mod staging;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use fragment::{
    is_fragment_file, select_stream_pair, strip_header, StreamPair, FRAGMENT_EXTENSION,
    FRAGMENT_HEADER_LEN,
};
pub use metadata::{VideoMetadata, METADATA_FILENAME};
pub use mux::mux_copy;
pub use naming::{artifact_name, sanitize_filename};
pub use staging::{StagingPair, AUDIO_TEMP_NAME, VIDEO_TEMP_NAME};
pub use tools::{get_tool_path, require_tool};

/// Parse a `videoInfo.json` document from disk.
///
/// # Example
///
/// ```no_run
/// use bvexport_av::load_metadata;
///
/// let meta = load_metadata("/path/to/cache/videoInfo.json")?;
/// println!("bvid: {}", meta.bvid);
/// # Ok::<(), bvexport_av::Error>(())
/// ```
pub fn load_metadata<P: AsRef<std::path::Path>>(path: P) -> Result<VideoMetadata> {
    metadata::load(path.as_ref())
}
