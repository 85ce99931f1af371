//! Shared test harness for integration tests.
//!
//! Provides [`CacheFixture`] which builds synthetic cache trees (headered
//! fragments plus `videoInfo.json`) and a stub muxer script, so the full
//! export pipeline can run without a real ffmpeg install.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header bytes prepended to every synthetic fragment.
pub const FRAGMENT_HEADER: &[u8; 9] = b"\x00\x00\x00\x00\x00\x00\x00\x00\x00";

/// Scratch tree holding a cache root, an export directory, and a stub muxer.
pub struct CacheFixture {
    dir: TempDir,
}

impl CacheFixture {
    /// Create a new fixture with an empty cache root.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create scratch dir");
        fs::create_dir(dir.path().join("cache")).expect("failed to create cache root");
        Self { dir }
    }

    pub fn cache_root(&self) -> PathBuf {
        self.dir.path().join("cache")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.dir.path().join("export")
    }

    /// Create a candidate directory holding two headered fragments and a
    /// metadata document. The larger payload should be the video stream.
    pub fn add_candidate(
        &self,
        name: &str,
        video_payload: &[u8],
        audio_payload: &[u8],
        metadata: &str,
    ) -> PathBuf {
        let dir = self.cache_root().join(name);
        fs::create_dir_all(&dir).expect("failed to create candidate dir");
        self.write_fragment(&dir, "30080.m4s", video_payload);
        self.write_fragment(&dir, "30280.m4s", audio_payload);
        fs::write(dir.join("videoInfo.json"), metadata).expect("failed to write metadata");
        dir
    }

    /// Write a single fragment file with the synthetic header prepended.
    pub fn write_fragment(&self, dir: &Path, name: &str, payload: &[u8]) {
        let mut data = FRAGMENT_HEADER.to_vec();
        data.extend_from_slice(payload);
        fs::write(dir.join(name), data).expect("failed to write fragment");
    }

    /// Write a stub muxer that checks its `-i` inputs exist and writes the
    /// string `muxed` to the output path (the final argument).
    #[cfg(unix)]
    pub fn stub_muxer(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join("stub-ffmpeg");
        fs::write(
            &path,
            concat!(
                "#!/bin/sh\n",
                "prev=\"\"\n",
                "for arg in \"$@\"; do\n",
                "  if [ \"$prev\" = \"-i\" ] && [ ! -f \"$arg\" ]; then\n",
                "    echo \"missing input: $arg\" >&2\n",
                "    exit 1\n",
                "  fi\n",
                "  prev=\"$arg\"\n",
                "  out=\"$arg\"\n",
                "done\n",
                "printf 'muxed' > \"$out\"\n",
            ),
        )
        .expect("failed to write stub muxer");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to mark stub muxer executable");
        path
    }

    /// Write a config file wiring the stub muxer in via `[tools]`.
    #[cfg(unix)]
    pub fn stub_config(&self) -> PathBuf {
        let muxer = self.stub_muxer();
        let path = self.dir.path().join("bvexport.toml");
        fs::write(
            &path,
            format!("[tools]\nffmpeg_path = \"{}\"\n", muxer.display()),
        )
        .expect("failed to write config");
        path
    }
}
