use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{FlowError, FlowResult};

/// Frame counter that repeats every `total_frames` frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopClock {
    frame: FrameIndex,
    total_frames: u64,
}

impl LoopClock {
    /// Clock starting at frame 0 with a loop of `total_frames` frames.
    pub fn new(total_frames: u64) -> FlowResult<Self> {
        if total_frames == 0 {
            return Err(FlowError::validation("loop must contain at least one frame"));
        }
        Ok(Self {
            frame: FrameIndex(0),
            total_frames,
        })
    }

    /// Clock for a loop lasting `loop_seconds` at `fps`.
    pub fn from_duration(fps: Fps, loop_seconds: f64) -> FlowResult<Self> {
        Self::new(fps.secs_to_frames_round(loop_seconds))
    }

    /// Frames in one loop.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Frames rendered so far.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Position of the current frame inside the loop.
    pub fn frame_in_loop(&self) -> u64 {
        self.frame.0 % self.total_frames
    }

    /// Normalized loop position of the current frame, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        self.progress_at(self.frame)
    }

    /// Normalized loop position of an arbitrary frame.
    pub fn progress_at(&self, frame: FrameIndex) -> f64 {
        (frame.0 % self.total_frames) as f64 / self.total_frames as f64
    }

    /// Number of loops fully completed.
    pub fn loops_completed(&self) -> u64 {
        self.frame.0 / self.total_frames
    }

    /// Move to the next frame.
    pub fn advance(&mut self) {
        self.frame = FrameIndex(self.frame.0.wrapping_add(1));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/clock.rs"]
mod tests;
