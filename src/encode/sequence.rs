use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tempfile::TempDir;

use crate::encode::sink::{FrameSink, SequenceGuard, SinkConfig};
use crate::foundation::core::{FRAME_INDEX_DIGITS, FrameIndex};
use crate::foundation::error::DlavidResult;
use crate::raster::frame::Frame;

/// Extension of frame files written by [`ImageSequenceSink`].
pub const FRAME_EXTENSION: &str = "png";

/// Writes each frame as `<5-digit index>.png` into a private temporary directory.
///
/// The directory and everything in it is removed when the sink is dropped, whether the
/// run finished or bailed out early.
pub struct ImageSequenceSink {
    dir: TempDir,
    guard: SequenceGuard,
}

impl ImageSequenceSink {
    /// Create the backing temporary directory under the system temp location.
    pub fn new() -> DlavidResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix("dlavid-frames-")
            .tempdir()
            .context("create temporary frame directory")?;
        Ok(Self::with_dir(dir))
    }

    /// Create the backing temporary directory inside `parent`.
    pub fn new_in(parent: &Path) -> DlavidResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix("dlavid-frames-")
            .tempdir_in(parent)
            .with_context(|| {
                format!("create temporary frame directory in '{}'", parent.display())
            })?;
        Ok(Self::with_dir(dir))
    }

    fn with_dir(dir: TempDir) -> Self {
        tracing::debug!(dir = %dir.path().display(), "frame directory created");
        Self {
            dir,
            guard: SequenceGuard::default(),
        }
    }

    /// Directory holding the frame files.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the file for frame `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir
            .path()
            .join(format!("{}.{FRAME_EXTENSION}", idx.file_stem()))
    }

    /// printf-style input pattern naming every frame (`<dir>/%05d.png`).
    pub fn pattern(&self) -> PathBuf {
        self.dir
            .path()
            .join(format!("%0{FRAME_INDEX_DIGITS}d.{FRAME_EXTENSION}"))
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.guard.frames_accepted()
    }
}

impl FrameSink for ImageSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> DlavidResult<()> {
        self.guard.begin(cfg)
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> DlavidResult<()> {
        self.guard.check(idx, frame)?;
        frame.save_png(&self.frame_path(idx))
    }

    fn end(&mut self) -> DlavidResult<()> {
        tracing::debug!(frames = self.frames_written(), "frame sequence complete");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sequence.rs"]
mod tests;
