//! Cache metadata parsing.
//!
//! Every cached video directory carries a `videoInfo.json` describing the
//! media. The schema varies between client versions: some put `title` at the
//! top level, others nest it under a `data` object. Both shapes are accepted.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Filename of the per-directory metadata document.
pub const METADATA_FILENAME: &str = "videoInfo.json";

/// Fallback identifier when the metadata carries no `bvid`.
const UNKNOWN_BVID: &str = "unknown_bvid";

/// Fallback title when neither the top-level nor the nested field is usable.
const UNKNOWN_TITLE: &str = "unknown_title";

#[derive(Debug, Deserialize)]
struct RawInfo {
    bvid: Option<String>,
    title: Option<String>,
    data: Option<RawData>,
}

#[derive(Debug, Deserialize)]
struct RawData {
    title: Option<String>,
}

/// Identifier and title extracted from a cache metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub bvid: String,
    pub title: String,
}

impl VideoMetadata {
    fn from_raw(raw: RawInfo) -> Self {
        let bvid = raw.bvid.unwrap_or_else(|| UNKNOWN_BVID.to_string());

        // An empty top-level title counts as absent; older clients leave it
        // blank and put the real title under `data`.
        let title = match raw.title {
            Some(title) if !title.is_empty() => title,
            _ => raw
                .data
                .and_then(|data| data.title)
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        };

        Self { bvid, title }
    }
}

/// Load and parse the metadata file of a candidate directory.
///
/// Unknown fields are ignored; only `bvid` and the two title locations are
/// read. A missing or malformed file is an error for the caller to record.
pub fn load(path: &Path) -> Result<VideoMetadata> {
    let content = std::fs::read_to_string(path)?;
    parse(path, &content)
}

fn parse(path: &Path, content: &str) -> Result<VideoMetadata> {
    let raw: RawInfo =
        serde_json::from_str(content).map_err(|e| Error::metadata(path, e.to_string()))?;
    Ok(VideoMetadata::from_raw(raw))
}
