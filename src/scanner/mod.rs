//! Cache tree scanner.
//!
//! This module provides functionality for walking a cache tree and listing
//! the per-directory files that make a directory a download candidate.

use anyhow::Result;
use bvexport_av::{is_fragment_file, METADATA_FILENAME};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk every directory strictly below the root, in traversal order.
///
/// The root itself is not yielded. Unreadable entries are skipped, not
/// reported. Symlinks are followed, so a linked cache subtree is scanned like
/// a real one.
pub fn walk_directories(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
}

/// List the fragment files that are direct children of a directory.
pub fn fragment_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_fragment_file(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Locate the metadata document directly inside a directory.
pub fn metadata_file(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(METADATA_FILENAME);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}
