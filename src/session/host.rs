//! Headless fixed-rate host: calls [`FrameDriver::tick`] once per frame deadline.

use std::time::{Duration, Instant};

use crate::foundation::error::FlowResult;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::session::driver::FrameDriver;

/// Options for [`RunLoop`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RunLoopOpts {
    /// Stop after this many frames. `None` runs until the process exits.
    pub max_frames: Option<u64>,
    /// Render as fast as possible instead of sleeping until each deadline.
    pub unpaced: bool,
}

/// Counters reported when a [`RunLoop`] stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames rendered.
    pub frames: u64,
    /// Loop boundaries the driver crossed during this run.
    pub loops_completed: u64,
    /// Frames that finished after their deadline.
    pub late_frames: u64,
}

/// Cooperative single-threaded run loop.
///
/// Ticks are never skipped: a late frame is still rendered, and the next deadline is measured
/// from the schedule rather than from the late frame.
pub struct RunLoop {
    opts: RunLoopOpts,
    frame_period: Duration,
    surface: CpuSurface,
    last_frame: Option<FrameRGBA>,
}

impl RunLoop {
    /// Host for `driver`'s canvas and frame rate.
    pub fn new(driver: &FrameDriver, opts: RunLoopOpts) -> FlowResult<Self> {
        let cfg = driver.config();
        Ok(Self {
            opts,
            frame_period: Duration::from_secs_f64(cfg.fps.frame_duration_secs()),
            surface: CpuSurface::new(cfg.canvas)?,
            last_frame: None,
        })
    }

    /// Target time between ticks.
    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Most recently rendered frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    /// Tick `driver` until the frame limit is reached (or forever).
    #[tracing::instrument(skip_all, fields(max_frames = ?self.opts.max_frames))]
    pub fn run(&mut self, driver: &mut FrameDriver) -> RunStats {
        let mut stats = RunStats::default();
        let start = Instant::now();
        let mut deadline = start;

        while self.opts.max_frames.is_none_or(|max| stats.frames < max) {
            let loops_before = driver.clock().loops_completed();
            let frame = driver.render_frame(&mut self.surface);
            self.last_frame = Some(frame);
            stats.frames += 1;

            let loops_after = driver.clock().loops_completed();
            if loops_after > loops_before {
                stats.loops_completed += loops_after - loops_before;
                tracing::info!(
                    loop_index = loops_after,
                    loops = stats.loops_completed,
                    late = stats.late_frames,
                    elapsed_s = start.elapsed().as_secs_f64(),
                    "loop completed"
                );
            }

            deadline += self.frame_period;
            let now = Instant::now();
            if now > deadline {
                stats.late_frames += 1;
                tracing::trace!(frame = stats.frames, "frame missed its deadline");
            } else if !self.opts.unpaced {
                std::thread::sleep(deadline - now);
            }
        }

        tracing::debug!(?stats, "run loop stopped");
        stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/host.rs"]
mod tests;
