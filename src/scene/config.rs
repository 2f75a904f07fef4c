use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::anim::clock::LoopClock;
use crate::anim::logo::LogoParams;
use crate::anim::markers::MarkerParams;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FlowError, FlowResult};
use crate::scene::palette::Palette;

/// Largest canvas edge the CPU rasterizer accepts.
pub const MAX_CANVAS_EDGE: u32 = u16::MAX as u32;

/// Wave line styling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineParams {
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Horizontal distance between sampled columns.
    pub sample_step: u32,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            stroke_width: 3.0,
            sample_step: 2,
        }
    }
}

/// Every tunable constant of the sketch.
///
/// Loaded from JSON; missing fields take their defaults, unknown fields are rejected.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    /// Output canvas size.
    pub canvas: Canvas,
    /// Target frame rate, used for pacing and export timing.
    pub fps: Fps,
    /// Duration of one animation loop.
    pub loop_seconds: f64,
    /// Seed for the marker speeds.
    pub seed: u64,
    /// Named colors.
    pub palette: Palette,
    /// Wave line styling.
    pub line: LineParams,
    /// Marker motion.
    pub markers: MarkerParams,
    /// Logo geometry and pulse.
    pub logo: LogoParams,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1280,
                height: 800,
            },
            fps: Fps { num: 60, den: 1 },
            loop_seconds: 8.0,
            seed: 0,
            palette: Palette::default(),
            line: LineParams::default(),
            markers: MarkerParams::default(),
            logo: LogoParams::default(),
        }
    }
}

impl SketchConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlowResult<Self> {
        serde_json::from_reader(r).map_err(|e| FlowError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlowError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every field; the render path assumes a validated config.
    pub fn validate(&self) -> FlowResult<()> {
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(FlowError::validation("canvas width/height must be non-zero"));
        }
        if width > MAX_CANVAS_EDGE || height > MAX_CANVAS_EDGE {
            return Err(FlowError::validation(format!(
                "canvas {width}x{height} exceeds {MAX_CANVAS_EDGE} pixels per edge"
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if !(self.loop_seconds.is_finite() && self.loop_seconds > 0.0) {
            return Err(FlowError::validation("loop_seconds must be > 0"));
        }
        self.loop_clock()?;
        if !(self.line.stroke_width.is_finite() && self.line.stroke_width > 0.0) {
            return Err(FlowError::validation("line stroke_width must be > 0"));
        }
        if self.line.sample_step == 0 {
            return Err(FlowError::validation("line sample_step must be >= 1"));
        }
        self.markers.validate()?;
        self.logo.validate()?;
        Ok(())
    }

    /// Frames in one loop (`fps * loop_seconds`).
    pub fn total_loop_frames(&self) -> u64 {
        self.fps.secs_to_frames_round(self.loop_seconds)
    }

    /// A fresh clock for this config.
    pub fn loop_clock(&self) -> FlowResult<LoopClock> {
        LoopClock::from_duration(self.fps, self.loop_seconds)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
