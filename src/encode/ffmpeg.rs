use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::Context as _;

use crate::foundation::core::Fps;
use crate::foundation::error::{DlavidError, DlavidResult};

/// File name prefix of assembled videos (`video1.mp4`, `video2.mp4`, ...).
pub const VIDEO_BASENAME: &str = "video";
/// Container extension of assembled videos.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Options for [`FfmpegAssembler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfmpegOpts {
    /// Encoder executable, looked up on `PATH` when not a path.
    pub program: OsString,
    /// Value passed to `-vcodec`.
    pub codec: String,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
}

impl Default for FfmpegOpts {
    fn default() -> Self {
        Self {
            program: OsString::from("ffmpeg"),
            codec: String::from("mpeg4"),
            overwrite: true,
        }
    }
}

/// Runs the external encoder over a numbered image sequence.
///
/// The crate never links against an encoder; the process command line is the whole
/// contract.
#[derive(Clone, Debug, Default)]
pub struct FfmpegAssembler {
    opts: FfmpegOpts,
}

impl FfmpegAssembler {
    /// Create an assembler with the given options.
    pub fn new(opts: FfmpegOpts) -> Self {
        Self { opts }
    }

    pub(crate) fn command(&self, pattern: &Path, fps: Fps, out_path: &Path) -> Command {
        let mut cmd = Command::new(&self.opts.program);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        cmd.args(["-loglevel", "error", "-f", "image2"]);
        // `-r` before `-i` sets the input rate of the image sequence.
        cmd.args(["-r", &fps.to_string()]);
        cmd.arg("-i").arg(pattern);
        cmd.args(["-vcodec", &self.opts.codec]);
        cmd.arg(if self.opts.overwrite { "-y" } else { "-n" });
        cmd.arg(out_path);
        cmd
    }

    /// Encode the frames matched by `pattern` into `out_path` and wait for the encoder.
    ///
    /// A non-zero exit is an [`DlavidError::Encoding`] carrying the encoder's stderr.
    /// Whatever the encoder left at `out_path` is not removed.
    pub fn assemble(&self, pattern: &Path, fps: Fps, out_path: &Path) -> DlavidResult<()> {
        ensure_parent_dir(out_path)?;

        let mut cmd = self.command(pattern, fps, out_path);
        tracing::debug!(?cmd, "running encoder");

        let output = cmd.output().map_err(|e| {
            DlavidError::encoding(format!(
                "failed to spawn '{}' (is it installed and on PATH?): {e}",
                self.opts.program.to_string_lossy()
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DlavidError::encoding(format!(
                "{} exited with status {}: {}",
                self.opts.program.to_string_lossy(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Lowest-numbered `videoN.mp4` (N >= 1) that does not exist in `dir`.
///
/// Creates `dir` if needed. The scan is not atomic: two concurrent runs can pick the
/// same name.
pub fn next_available_output(dir: &Path) -> DlavidResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;

    let mut n: u64 = 1;
    loop {
        let candidate = dir.join(format!("{VIDEO_BASENAME}{n}.{VIDEO_EXTENSION}"));
        if !candidate.exists() {
            return Ok(candidate);
        }
        n += 1;
    }
}

/// Ensure the parent directory of `path` exists.
pub(crate) fn ensure_parent_dir(path: &Path) -> DlavidResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `program -version` runs successfully.
pub fn is_encoder_available(program: impl AsRef<std::ffi::OsStr>) -> bool {
    Command::new(program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
