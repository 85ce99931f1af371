//! Export run orchestration.
//!
//! Walks the cache tree, processes each eligible directory through the
//! extract/strip/mux pipeline, and aggregates the per-directory outcomes
//! into a run summary.

use crate::scanner;
use anyhow::{Context, Result};
use bvexport_av::{
    artifact_name, get_tool_path, load_metadata, mux_copy, select_stream_pair, strip_header,
    Error, StagingPair,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Options governing a single export run.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Explicit path to the ffmpeg binary, overriding PATH lookup
    pub ffmpeg_path: Option<PathBuf>,

    /// Report what would be exported without staging or muxing
    pub dry_run: bool,
}

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Filenames of the artifacts written to the export directory
    pub succeeded: BTreeSet<String>,

    /// Names of the candidate directories that failed to export
    pub failed: BTreeSet<String>,
}

impl RunSummary {
    /// Log the run totals followed by each exported file and failed directory.
    pub fn log(&self) {
        info!(
            "Export complete: {} succeeded, {} failed",
            self.succeeded.len(),
            self.failed.len()
        );
        if !self.succeeded.is_empty() {
            info!("Exported files:");
            for name in &self.succeeded {
                info!("  - {}", name);
            }
        }
        if !self.failed.is_empty() {
            info!("Failed directories:");
            for name in &self.failed {
                info!("  - {}", name);
            }
        }
    }
}

/// Export every cached video found under `cache_root` into `export_dir`.
///
/// A directory is a candidate when it directly contains at least two fragment
/// files and a metadata document. Candidates that fail are recorded in the
/// summary and never abort the run; directories that are not candidates are
/// skipped without a summary entry.
pub fn run_export(
    cache_root: &Path,
    export_dir: &Path,
    options: &ExportOptions,
) -> Result<RunSummary> {
    if !cache_root.is_dir() {
        anyhow::bail!("Cache root is not a directory: {:?}", cache_root);
    }

    std::fs::create_dir_all(export_dir)
        .with_context(|| format!("Failed to create export directory: {:?}", export_dir))?;

    let ffmpeg = resolve_muxer(options);
    let mut summary = RunSummary::default();

    for dir in scanner::walk_directories(cache_root) {
        let fragments = match scanner::fragment_files(&dir) {
            Ok(files) => files,
            Err(e) => {
                warn!("Skipping unreadable directory {:?}: {}", dir, e);
                continue;
            }
        };

        if fragments.len() < 2 {
            continue;
        }
        let Some(metadata_path) = scanner::metadata_file(&dir) else {
            continue;
        };

        let dir_name = directory_name(&dir);
        info!("Processing directory: {}", dir_name);

        if options.dry_run {
            preview_directory(&fragments, &metadata_path, &dir_name);
            continue;
        }

        match process_directory(&dir, &fragments, &metadata_path, export_dir, &ffmpeg) {
            Ok(artifact) => {
                info!("Exported: {}", artifact);
                summary.succeeded.insert(artifact);
            }
            Err(e) => {
                error!("Failed to process {}: {}", dir_name, e);
                summary.failed.insert(dir_name);
            }
        }
    }

    Ok(summary)
}

/// Run one candidate directory through the pipeline.
///
/// Returns the artifact filename on success. The staging guard removes the
/// temp files on every exit path, including the error returns.
fn process_directory(
    dir: &Path,
    fragments: &[PathBuf],
    metadata_path: &Path,
    export_dir: &Path,
    ffmpeg: &Path,
) -> bvexport_av::Result<String> {
    let metadata = load_metadata(metadata_path)?;
    let artifact = artifact_name(&metadata.bvid, &metadata.title);
    let output = export_dir.join(&artifact);

    let pair = select_stream_pair(fragments)?.ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "fewer than two fragment files",
        ))
    })?;

    let staging = StagingPair::new(dir);
    strip_header(&pair.video, staging.video())?;
    strip_header(&pair.audio, staging.audio())?;

    mux_copy(ffmpeg, staging.video(), staging.audio(), &output)?;

    Ok(artifact)
}

/// Report what a candidate directory would produce, without writing anything.
fn preview_directory(fragments: &[PathBuf], metadata_path: &Path, dir_name: &str) {
    match preview_artifact(fragments, metadata_path) {
        Ok(artifact) => info!("Would export: {}", artifact),
        Err(e) => warn!("Would fail to process {}: {}", dir_name, e),
    }
}

fn preview_artifact(fragments: &[PathBuf], metadata_path: &Path) -> bvexport_av::Result<String> {
    let metadata = load_metadata(metadata_path)?;
    select_stream_pair(fragments)?;
    Ok(artifact_name(&metadata.bvid, &metadata.title))
}

/// Determine the muxer binary to invoke for this run.
///
/// A missing muxer is not fatal here: the run proceeds and each candidate
/// fails with a tool-not-found error instead.
fn resolve_muxer(options: &ExportOptions) -> PathBuf {
    match get_tool_path("ffmpeg", options.ffmpeg_path.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            warn!("{}; eligible directories will fail until it is available", e);
            options
                .ffmpeg_path
                .clone()
                .unwrap_or_else(|| PathBuf::from("ffmpeg"))
        }
    }
}

fn directory_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
