//! flowmark renders a looping decorative animation: a sine wave that is tall and tight on the
//! left and calm on the right, six markers sliding along it, and a two-leg gradient logo that
//! pulses twice per loop.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: a [`SketchConfig`] (JSON or defaults) holds every tunable constant.
//! 2. **Drive**: a [`FrameDriver`] owns the [`LoopClock`] and the [`MarkerSet`]; each tick
//!    draws one frame through the [`DrawSurface`] capability and advances the clock.
//! 3. **Rasterize**: [`CpuSurface`] implements [`DrawSurface`] with `vello_cpu` and reads back a
//!    premultiplied [`FrameRGBA`].
//! 4. **Export** (optional): [`FrameDriver::export_loop`] streams one full loop into a
//!    [`FrameSink`], e.g. a [`GifSink`].
//!
//! The drawing path is pure apart from marker advancement: no IO, no hidden graphics state.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Loop clock, wave, markers and logo geometry.
pub mod anim;
/// Output sinks (GIF, PNG, in-memory).
pub mod encode;
/// Drawing capability and CPU rasterizer.
pub mod render;
/// Configuration and palette.
pub mod scene;
/// Frame driver and host run loop.
pub mod session;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rgba8, Vec2};
pub use crate::foundation::error::{FlowError, FlowResult};
pub use crate::foundation::math::map_range;

pub use crate::anim::clock::LoopClock;
pub use crate::anim::logo::LogoParams;
pub use crate::anim::markers::{MARKER_COUNT, Marker, MarkerParams, MarkerSet};
pub use crate::anim::wave::WaveFunction;
pub use crate::encode::gif::{DEFAULT_GIF_NAME, GifSink, GifSinkOpts};
pub use crate::encode::png::write_png;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuSurface;
pub use crate::render::draw::{
    DrawCommand, DrawSurface, GradientStop, LinearGradient, Paint, RecordingSurface, StrokeStyle,
};
pub use crate::render::frame::FrameRenderer;
pub use crate::scene::config::{LineParams, SketchConfig};
pub use crate::scene::palette::Palette;
pub use crate::session::driver::FrameDriver;
pub use crate::session::host::{RunLoop, RunLoopOpts, RunStats};
