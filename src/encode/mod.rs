//! Frame sinks and video assembly.
//!
//! Sinks consume emitted frames in index order. The assembler turns a finished image
//! sequence into a video by running an external encoder.

/// `ffmpeg`-based video assembly.
pub mod ffmpeg;
/// PNG image-sequence sink backed by a scoped temporary directory.
pub mod sequence;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
