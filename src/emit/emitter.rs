use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{DlavidError, DlavidResult};
use crate::raster::canvas::{Canvas, scaled_dims};

/// Decides after each plotted coordinate whether the canvas becomes a frame.
///
/// Every `skip`-th observation snapshots the canvas at `scale` and pushes it to the sink
/// under the next [`FrameIndex`]. Observations left over at the end of the input never
/// become a frame.
#[derive(Clone, Debug)]
pub struct FrameEmitter {
    skip: u32,
    scale: u32,
    since_last: u32,
    next_index: FrameIndex,
}

impl FrameEmitter {
    /// `skip` must be at least 1. `scale <= 1` keeps native resolution.
    pub fn new(skip: u32, scale: u32) -> DlavidResult<Self> {
        if skip == 0 {
            return Err(DlavidError::validation("skip must be >= 1"));
        }
        Ok(Self {
            skip,
            scale,
            since_last: 0,
            next_index: FrameIndex::default(),
        })
    }

    /// Frame dimensions this emitter produces for `canvas`.
    pub fn sink_config(&self, canvas: &Canvas) -> DlavidResult<SinkConfig> {
        let (width, height) = scaled_dims(canvas.width(), canvas.height(), self.scale)?;
        Ok(SinkConfig { width, height })
    }

    /// Record one plotted coordinate, emitting a frame when the stride is reached.
    pub fn observe(
        &mut self,
        canvas: &Canvas,
        sink: &mut dyn FrameSink,
    ) -> DlavidResult<Option<FrameIndex>> {
        self.since_last += 1;
        if self.since_last < self.skip {
            return Ok(None);
        }

        let idx = self.next_index;
        let frame = canvas.snapshot(self.scale)?;
        sink.push_frame(idx, &frame)?;
        tracing::debug!(frame = idx.0, occupied = canvas.occupied_count(), "frame emitted");

        self.next_index = idx.next();
        self.since_last = 0;
        Ok(Some(idx))
    }

    /// Number of frames emitted so far.
    pub fn frames_emitted(&self) -> u64 {
        self.next_index.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/emitter.rs"]
mod tests;
