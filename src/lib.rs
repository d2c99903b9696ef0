//! dlavid renders a diffusion-limited aggregation coordinate stream into a growth video.
//!
//! # Pipeline overview
//!
//! 1. **Read**: [`CoordinateReader`] turns `"<int>, <int>"` lines into [`Coordinate`]s.
//! 2. **Plot**: each coordinate is set on a center-origin monochrome [`Canvas`].
//! 3. **Emit**: [`FrameEmitter`] snapshots the canvas every `skip` coordinates and pushes
//!    the [`Frame`] into a [`FrameSink`].
//! 4. **Assemble**: [`FfmpegAssembler`] runs the system `ffmpeg` over the numbered PNG
//!    sequence written by [`ImageSequenceSink`].
//!
//! [`render_to_video`] drives all four from a [`RenderConfig`]. The run is single
//! threaded and fails fast: the first bad line, out-of-bounds point or encoder failure
//! ends it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Skip-based frame sampling.
pub mod emit;
/// Frame sinks and `ffmpeg` video assembly.
pub mod encode;
/// Coordinate input parsing.
pub mod input;
/// End-to-end render entry points.
pub mod pipeline;
/// Canvas and frame rasters.
pub mod raster;

pub use crate::foundation::core::{Coordinate, FRAME_INDEX_DIGITS, Fps, FrameIndex};
pub use crate::foundation::error::{DlavidError, DlavidResult};

pub use crate::emit::emitter::FrameEmitter;
pub use crate::encode::ffmpeg::{
    FfmpegAssembler, FfmpegOpts, is_encoder_available, next_available_output,
};
pub use crate::encode::sequence::ImageSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::input::reader::{CoordinateReader, parse_coordinate};
pub use crate::pipeline::{RenderConfig, RenderStats, VideoOutput, render_frames, render_to_video};
pub use crate::raster::canvas::Canvas;
pub use crate::raster::frame::Frame;
