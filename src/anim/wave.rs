//! Closed-form wave evaluated once per sampled pixel column.
//!
//! Amplitude shrinks linearly from left to right while the frequency falls off along a
//! square-root warp, so the wave is tall and tight on the left and calm on the right.

use std::f64::consts::TAU;

use crate::foundation::core::Canvas;
use crate::foundation::math::map_range;

/// Amplitude at `x = 0`, as a fraction of the canvas height.
pub const AMPLITUDE_LEFT_FRACTION: f64 = 0.3;
/// Amplitude at `x = width`, in pixels.
pub const AMPLITUDE_RIGHT: f64 = 20.0;
/// Frequency modifier at `x = 0`.
pub const FREQ_MOD_LEFT: f64 = 25.0;
/// Frequency modifier at `x = width`.
pub const FREQ_MOD_RIGHT: f64 = 1.0;
/// Base angular step per pixel.
pub const BASE_FREQUENCY: f64 = 0.01;

/// Pure wave function `(x, t) -> y` for a given canvas size.
///
/// `y` is relative to the vertical center of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveFunction {
    width: f64,
    height: f64,
}

impl WaveFunction {
    /// Wave for a canvas. The width must be non-zero (enforced by config validation).
    pub fn new(canvas: Canvas) -> Self {
        Self::with_size(canvas.width_f64(), canvas.height_f64())
    }

    /// Wave for an explicit width/height pair.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canvas width the wave spans.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Peak displacement at column `x`.
    pub fn amplitude(&self, x: f64) -> f64 {
        map_range(
            x,
            0.0,
            self.width,
            self.height * AMPLITUDE_LEFT_FRACTION,
            AMPLITUDE_RIGHT,
        )
    }

    /// Frequency multiplier at column `x`.
    pub fn freq_mod(&self, x: f64) -> f64 {
        let warped = (x / self.width).sqrt();
        map_range(warped, 0.0, 1.0, FREQ_MOD_LEFT, FREQ_MOD_RIGHT)
    }

    /// Vertical offset of the wave at column `x` and loop time `t`.
    pub fn y(&self, x: f64, t: f64) -> f64 {
        let phase = x * BASE_FREQUENCY * self.freq_mod(x) + t * TAU;
        phase.sin() * self.amplitude(x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/wave.rs"]
mod tests;
