use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::anim::clock::LoopClock;
use crate::anim::markers::MarkerSet;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Affine, BezPath, FrameIndex, Point, Rgba8};
use crate::foundation::error::FlowResult;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::render::draw::{DrawSurface, Paint, StrokeStyle};
use crate::render::frame::FrameRenderer;
use crate::scene::config::SketchConfig;

/// Owns everything that changes between frames: the loop clock and the markers.
///
/// Each [`FrameDriver::tick`] draws one frame at the current loop progress and then advances
/// the clock. There is no terminal state.
#[derive(Clone, Debug)]
pub struct FrameDriver {
    config: SketchConfig,
    renderer: FrameRenderer,
    clock: LoopClock,
    markers: MarkerSet,
}

impl FrameDriver {
    /// Validate `config` and seed marker speeds from `config.seed`.
    pub fn new(config: SketchConfig) -> FlowResult<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Validate `config` and draw marker speeds from `rng`.
    pub fn with_rng<R: Rng>(config: SketchConfig, rng: &mut R) -> FlowResult<Self> {
        config.validate()?;
        let clock = config.loop_clock()?;
        let markers = MarkerSet::new(&config.markers, rng);
        tracing::debug!(
            width = config.canvas.width,
            height = config.canvas.height,
            loop_frames = clock.total_frames(),
            seed = config.seed,
            "frame driver ready"
        );
        Ok(Self {
            renderer: FrameRenderer::new(&config),
            config,
            clock,
            markers,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Loop clock (frames rendered so far, loop length).
    pub fn clock(&self) -> &LoopClock {
        &self.clock
    }

    /// Current marker state.
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Frames in one loop.
    pub fn total_loop_frames(&self) -> u64 {
        self.clock.total_frames()
    }

    /// Draw the current frame onto `surface` and advance to the next one.
    ///
    /// Returns the index of the frame that was drawn.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) -> FrameIndex {
        let frame = self.clock.frame();
        let progress = self.clock.progress();
        self.renderer.render(surface, &mut self.markers, progress);
        self.clock.advance();
        frame
    }

    /// Tick onto a CPU surface and read the pixels back.
    pub fn render_frame(&mut self, surface: &mut CpuSurface) -> FrameRGBA {
        self.tick(surface);
        surface.finish_frame()
    }

    /// Tick without keeping the output until the driver reaches `frame`.
    ///
    /// Marker state evolves exactly as in a live run. Does nothing if `frame` is already past.
    pub fn skip_to(&mut self, frame: FrameIndex) {
        let mut discard = NullSurface;
        while self.clock.frame() < frame {
            self.tick(&mut discard);
        }
    }

    /// Render exactly one loop (`total_loop_frames` consecutive frames) into `sink`.
    ///
    /// Frames are pushed with their absolute index; the driver keeps ticking from wherever it
    /// is, so the export starts at the current loop position.
    #[tracing::instrument(skip(self, sink), fields(frames = self.clock.total_frames()))]
    pub fn export_loop(&mut self, sink: &mut dyn FrameSink) -> FlowResult<u64> {
        let total = self.clock.total_frames();
        let mut surface = CpuSurface::new(self.config.canvas)?;

        sink.begin(SinkConfig {
            width: self.config.canvas.width,
            height: self.config.canvas.height,
            fps: self.config.fps,
            frame_count: total,
        })?;
        for _ in 0..total {
            let idx = self.clock.frame();
            let frame = self.render_frame(&mut surface);
            sink.push_frame(idx, &frame)?;
        }
        sink.end()?;
        Ok(total)
    }
}

/// Surface that drops every draw call.
struct NullSurface;

impl DrawSurface for NullSurface {
    fn clear(&mut self, _color: Rgba8) {}

    fn draw_path(&mut self, _path: &BezPath, _style: StrokeStyle, _transform: Affine) {}

    fn draw_circle(&mut self, _center: Point, _diameter: f64, _color: Rgba8, _transform: Affine) {}

    fn draw_gradient_polygon(&mut self, _points: &[Point], _paint: &Paint, _transform: Affine) {}
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;
