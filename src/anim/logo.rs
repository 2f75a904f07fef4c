//! Logo geometry: two slanted parallelogram legs that fuse at the base, pulsing twice per loop.
//!
//! All points are in logo-local coordinates with the origin at the bottom-right corner of the
//! left leg and `y` growing downwards.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{Affine, Canvas, Point, Vec2};
use crate::foundation::error::{FlowError, FlowResult};
use crate::foundation::math::map_range;

/// Pulses per animation loop.
pub const PULSES_PER_LOOP: f64 = 2.0;

/// Logo size, placement and pulse range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoParams {
    /// Horizontal width of each leg.
    pub leg_width: f64,
    /// Vertical height of each leg.
    pub leg_height: f64,
    /// Horizontal shift between a leg's bottom and top edge.
    pub tilt_shift: f64,
    /// Scale at the trough of a pulse.
    pub scale_min: f64,
    /// Scale at the crest of a pulse.
    pub scale_max: f64,
    /// Anchor distance from the right canvas edge.
    pub anchor_inset_x: f64,
    /// Anchor distance from the top canvas edge.
    pub anchor_y: f64,
}

impl Default for LogoParams {
    fn default() -> Self {
        Self {
            leg_width: 20.0,
            leg_height: 65.0,
            tilt_shift: 25.0,
            scale_min: 1.0,
            scale_max: 1.15,
            anchor_inset_x: 80.0,
            anchor_y: 85.0,
        }
    }
}

impl LogoParams {
    pub(crate) fn validate(&self) -> FlowResult<()> {
        let finite = [
            self.leg_width,
            self.leg_height,
            self.tilt_shift,
            self.scale_min,
            self.scale_max,
            self.anchor_inset_x,
            self.anchor_y,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(FlowError::validation("logo parameters must be finite"));
        }
        if self.leg_width <= 0.0 || self.leg_height <= 0.0 {
            return Err(FlowError::validation("logo legs must have positive size"));
        }
        if self.scale_min <= 0.0 || self.scale_min > self.scale_max {
            return Err(FlowError::validation(
                "logo scale range must satisfy 0 < scale_min <= scale_max",
            ));
        }
        Ok(())
    }

    /// Half a leg width; the right leg is pulled left by this much to cover the seam.
    pub fn overlap(&self) -> f64 {
        self.leg_width / 2.0
    }

    /// Pulse scale at loop position `progress`.
    ///
    /// The pulse is `sin(progress * 2pi * 2)` shifted back by a quarter period, so the logo
    /// rests at its smallest at the loop seam: troughs at 0 and 0.5, crests at 0.25 and 0.75.
    pub fn pulse_scale(&self, progress: f64) -> f64 {
        let pulse = (progress * TAU * PULSES_PER_LOOP - FRAC_PI_2).sin();
        map_range(pulse, -1.0, 1.0, self.scale_min, self.scale_max)
    }

    /// Logo anchor in canvas coordinates.
    pub fn anchor(&self, canvas: Canvas) -> Point {
        Point::new(canvas.width_f64() - self.anchor_inset_x, self.anchor_y)
    }

    /// Logo-local to canvas transform at loop position `progress`.
    pub fn transform(&self, canvas: Canvas, progress: f64) -> Affine {
        Affine::translate(self.anchor(canvas).to_vec2()) * Affine::scale(self.pulse_scale(progress))
    }

    /// Left leg, leaning left: bottom-right, bottom-left, top-left, top-right.
    pub fn left_leg(&self) -> [Point; 4] {
        let (w, h, tilt) = (self.leg_width, self.leg_height, self.tilt_shift);
        [
            Point::new(0.0, 0.0),
            Point::new(-w, 0.0),
            Point::new(-w - tilt, -h),
            Point::new(-tilt, -h),
        ]
    }

    /// Right leg, leaning right and shifted left by [`Self::overlap`].
    pub fn right_leg(&self) -> [Point; 4] {
        let (w, h, tilt) = (self.leg_width, self.leg_height, self.tilt_shift);
        let shift = Vec2::new(-self.overlap(), 0.0);
        [
            Point::new(0.0, 0.0) + shift,
            Point::new(w, 0.0) + shift,
            Point::new(w + tilt, -h) + shift,
            Point::new(tilt, -h) + shift,
        ]
    }

    /// Gradient axis for the left leg: from the base (offset 0) to the top (offset 1).
    pub fn gradient_axis(&self) -> (Point, Point) {
        (Point::new(0.0, 0.0), Point::new(0.0, -self.leg_height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/logo.rs"]
mod tests;
