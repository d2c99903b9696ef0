use std::fmt;

use crate::foundation::error::{DlavidError, DlavidResult};

/// Width of the zero-padded frame index used in frame file names.
pub const FRAME_INDEX_DIGITS: usize = 5;

/// A plotted point, relative to the canvas center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Horizontal offset from the center column.
    pub x: i64,
    /// Vertical offset from the center row.
    pub y: i64,
}

impl Coordinate {
    /// Create a coordinate from its two components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Playback position of a frame. Indices start at 0 and are contiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// File stem for this frame, zero-padded to [`FRAME_INDEX_DIGITS`] (`00042`).
    pub fn file_stem(self) -> String {
        format!("{:0width$}", self.0, width = FRAME_INDEX_DIGITS)
    }

    /// The index that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Whole-number frames per second, always > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps(u32);

impl Fps {
    /// Create a frame rate. Zero is rejected.
    pub fn new(fps: u32) -> DlavidResult<Self> {
        if fps == 0 {
            return Err(DlavidError::validation("fps must be > 0"));
        }
        Ok(Self(fps))
    }

    /// Playback duration of `frames` frames.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        frames as f64 / f64::from(self.0)
    }
}

impl fmt::Display for Fps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
