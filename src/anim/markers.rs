use rand::Rng;

use crate::foundation::error::{FlowError, FlowResult};

/// Number of markers riding the wave.
pub const MARKER_COUNT: usize = 6;

/// Marker motion and size parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerParams {
    /// Inclusive lower bound of the per-frame progress speed.
    pub speed_min: f64,
    /// Exclusive upper bound of the per-frame progress speed.
    pub speed_max: f64,
    /// Dot diameter in pixels.
    pub diameter: f64,
}

impl Default for MarkerParams {
    fn default() -> Self {
        Self {
            speed_min: 0.0005,
            speed_max: 0.0015,
            diameter: 15.0,
        }
    }
}

impl MarkerParams {
    pub(crate) fn validate(&self) -> FlowResult<()> {
        if !(self.speed_min.is_finite() && self.speed_max.is_finite()) {
            return Err(FlowError::validation("marker speeds must be finite"));
        }
        if self.speed_min < 0.0 || self.speed_min >= self.speed_max {
            return Err(FlowError::validation(
                "marker speed range must satisfy 0 <= speed_min < speed_max",
            ));
        }
        if self.speed_max >= 1.0 {
            return Err(FlowError::validation("marker speed_max must be < 1"));
        }
        if !(self.diameter.is_finite() && self.diameter > 0.0) {
            return Err(FlowError::validation("marker diameter must be > 0"));
        }
        Ok(())
    }
}

/// A dot travelling along the wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Horizontal position as a fraction of the canvas width, in `[0, 1)`.
    pub progress: f64,
    /// Progress added per frame.
    pub speed: f64,
}

impl Marker {
    /// Advance by one frame, wrapping back into `[0, 1)`.
    pub fn advance(&mut self) {
        let next = self.progress + self.speed;
        self.progress = if next >= 1.0 { next - 1.0 } else { next };
    }
}

/// The fixed set of markers, owned by the frame driver.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSet {
    markers: [Marker; MARKER_COUNT],
}

impl MarkerSet {
    /// Evenly spaced markers with speeds drawn uniformly from `[speed_min, speed_max)`.
    pub fn new<R: Rng>(params: &MarkerParams, rng: &mut R) -> Self {
        let markers = std::array::from_fn(|i| Marker {
            progress: i as f64 / MARKER_COUNT as f64,
            speed: rng.gen_range(params.speed_min..params.speed_max),
        });
        Self { markers }
    }

    /// Build from explicit markers. Progress values are wrapped into `[0, 1)`.
    pub fn from_markers(markers: [Marker; MARKER_COUNT]) -> Self {
        let markers = markers.map(|m| Marker {
            progress: wrap_unit(m.progress),
            speed: m.speed,
        });
        Self { markers }
    }

    /// Advance every marker by one frame.
    pub fn advance_all(&mut self) {
        for m in &mut self.markers {
            m.advance();
        }
    }

    /// Borrow the markers.
    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    /// Number of markers (always [`MARKER_COUNT`]).
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

// `rem_euclid` can round tiny negatives up to exactly 1.0.
fn wrap_unit(v: f64) -> f64 {
    let r = v.rem_euclid(1.0);
    if r >= 1.0 { 0.0 } else { r }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/markers.rs"]
mod tests;
