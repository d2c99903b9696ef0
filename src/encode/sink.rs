use crate::foundation::core::FrameIndex;
use crate::foundation::error::{DlavidError, DlavidResult};
use crate::raster::frame::Frame;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels, after rescaling.
    pub width: u32,
    /// Frame height in pixels, after rescaling.
    pub height: u32,
}

/// Sink contract for consuming emitted frames.
///
/// Ordering contract: `push_frame` is called with contiguous, strictly increasing
/// [`FrameIndex`] values starting at 0.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> DlavidResult<()>;
    /// Persist one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> DlavidResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> DlavidResult<()>;
}

/// Checks shared by the built-in sinks: frame size and index continuity.
#[derive(Debug, Default)]
pub(crate) struct SequenceGuard {
    cfg: Option<SinkConfig>,
    expected: FrameIndex,
}

impl SequenceGuard {
    pub(crate) fn begin(&mut self, cfg: SinkConfig) -> DlavidResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(DlavidError::validation(
                "sink width/height must be non-zero",
            ));
        }
        self.cfg = Some(cfg);
        self.expected = FrameIndex::default();
        Ok(())
    }

    pub(crate) fn check(&mut self, idx: FrameIndex, frame: &Frame) -> DlavidResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| DlavidError::validation("frame sink not started"))?;
        if idx != self.expected {
            return Err(DlavidError::validation(format!(
                "frame sink received index {}, expected {}",
                idx.0, self.expected.0
            )));
        }
        if frame.width() != cfg.width || frame.height() != cfg.height {
            return Err(DlavidError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                cfg.width,
                cfg.height
            )));
        }
        self.expected = idx.next();
        Ok(())
    }

    pub(crate) fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub(crate) fn frames_accepted(&self) -> u64 {
        self.expected.0
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    guard: SequenceGuard,
    frames: Vec<(FrameIndex, Frame)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.guard.config()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, Frame)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> DlavidResult<()> {
        self.guard.begin(cfg)?;
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Frame) -> DlavidResult<()> {
        self.guard.check(idx, frame)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> DlavidResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
