use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::emit::emitter::FrameEmitter;
use crate::encode::ffmpeg::{FfmpegAssembler, FfmpegOpts, next_available_output};
use crate::encode::sequence::ImageSequenceSink;
use crate::encode::sink::FrameSink;
use crate::foundation::core::Fps;
use crate::foundation::error::{DlavidError, DlavidResult};
use crate::input::reader::CoordinateReader;
use crate::raster::canvas::{Canvas, scaled_dims};

/// Everything a run needs, resolved up front and passed explicitly.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Canvas width and height in cells.
    pub size: u32,
    /// Playback rate of the assembled video.
    pub fps: u32,
    /// Upscale factor applied to every frame; `<= 1` keeps native resolution.
    pub rescale: u32,
    /// Coordinates consumed per emitted frame.
    pub skip: u32,
    /// Directory receiving `videoN.mp4`.
    pub output_dir: PathBuf,
    /// Encoder invocation settings.
    pub encoder: FfmpegOpts,
    /// Parent of the temporary frame directory; the system temp dir when `None`.
    pub frames_parent: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 300,
            fps: 60,
            rescale: 2,
            skip: 1,
            output_dir: PathBuf::from("videos"),
            encoder: FfmpegOpts::default(),
            frames_parent: None,
        }
    }
}

impl RenderConfig {
    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> DlavidResult<()> {
        if self.size == 0 {
            return Err(DlavidError::validation("size must be > 0"));
        }
        if self.skip == 0 {
            return Err(DlavidError::validation("skip must be >= 1"));
        }
        Fps::new(self.fps)?;
        scaled_dims(self.size, self.size, self.rescale)?;
        Ok(())
    }

    /// Frame rate as a [`Fps`].
    pub fn frame_rate(&self) -> DlavidResult<Fps> {
        Fps::new(self.fps)
    }
}

/// Counters gathered during a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStats {
    /// Coordinates read and plotted.
    pub coordinates: u64,
    /// Frames emitted.
    pub frames: u64,
    /// Playback rate used for duration math.
    pub fps: Fps,
}

impl RenderStats {
    /// Playback duration of the emitted frames.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frames)
    }
}

/// Result of a successful [`render_to_video`].
#[derive(Clone, Debug)]
pub struct VideoOutput {
    /// Path of the written video.
    pub path: PathBuf,
    /// Counters for the run.
    pub stats: RenderStats,
}

/// Read coordinates from `source`, plot them and push sampled frames into `sink`.
///
/// Stops at the first parse, bounds or sink error. `begin` is called on the sink before
/// the first coordinate is read; `end` only after the input is exhausted cleanly.
pub fn render_frames<R: BufRead>(
    source: R,
    cfg: &RenderConfig,
    sink: &mut dyn FrameSink,
) -> DlavidResult<RenderStats> {
    cfg.validate()?;

    let mut canvas = Canvas::new(cfg.size, cfg.size)?;
    let mut emitter = FrameEmitter::new(cfg.skip, cfg.rescale)?;
    sink.begin(emitter.sink_config(&canvas)?)?;

    let mut coordinates = 0u64;
    for coord in CoordinateReader::new(source) {
        canvas.plot(coord?)?;
        coordinates += 1;
        emitter.observe(&canvas, sink)?;
    }
    sink.end()?;

    Ok(RenderStats {
        coordinates,
        frames: emitter.frames_emitted(),
        fps: cfg.frame_rate()?,
    })
}

/// Render the coordinate file at `input` into the next free `videoN.mp4`.
///
/// Frames go to a temporary directory that is removed before this returns, on success
/// and on every error path. An input that yields no frames fails with
/// [`DlavidError::EmptyFrameSet`] without running the encoder.
#[tracing::instrument(skip(cfg), fields(size = cfg.size, skip = cfg.skip, rescale = cfg.rescale))]
pub fn render_to_video(input: &Path, cfg: &RenderConfig) -> DlavidResult<VideoOutput> {
    cfg.validate()?;

    let file = File::open(input)
        .with_context(|| format!("open coordinate file '{}'", input.display()))?;

    let mut sink = match &cfg.frames_parent {
        Some(parent) => ImageSequenceSink::new_in(parent)?,
        None => ImageSequenceSink::new()?,
    };
    let stats = render_frames(BufReader::new(file), cfg, &mut sink)?;
    tracing::info!(
        coordinates = stats.coordinates,
        frames = stats.frames,
        "frames rendered"
    );

    if stats.frames == 0 {
        return Err(DlavidError::EmptyFrameSet);
    }

    let path = next_available_output(&cfg.output_dir)?;
    tracing::info!(out = %path.display(), fps = %stats.fps, "assembling video");

    FfmpegAssembler::new(cfg.encoder.clone()).assemble(&sink.pattern(), stats.fps, &path)?;

    Ok(VideoOutput { path, stats })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
