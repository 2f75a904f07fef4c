//! Per-frame drawing: background, wave line, markers, logo.

use crate::anim::logo::LogoParams;
use crate::anim::markers::MarkerSet;
use crate::anim::wave::WaveFunction;
use crate::foundation::core::{Affine, Canvas, Point};
use crate::render::draw::{
    DrawSurface, GradientStop, LinearGradient, Paint, StrokeStyle, polyline,
};
use crate::scene::config::{LineParams, SketchConfig};
use crate::scene::palette::Palette;

/// Draws one frame of the sketch onto any [`DrawSurface`].
///
/// Holds only immutable configuration; marker state is passed in by the caller.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    canvas: Canvas,
    wave: WaveFunction,
    palette: Palette,
    line: LineParams,
    marker_diameter: f64,
    logo: LogoParams,
}

impl FrameRenderer {
    /// Renderer for a validated config.
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            canvas: config.canvas,
            wave: WaveFunction::new(config.canvas),
            palette: config.palette,
            line: config.line,
            marker_diameter: config.markers.diameter,
            logo: config.logo,
        }
    }

    /// The wave this renderer samples.
    pub fn wave(&self) -> &WaveFunction {
        &self.wave
    }

    /// Full frame: clear, wave and markers, logo.
    pub fn render(&self, surface: &mut dyn DrawSurface, markers: &mut MarkerSet, progress: f64) {
        surface.clear(self.palette.background);
        self.draw_wave_and_markers(surface, markers, progress);
        self.draw_logo(surface, progress);
    }

    /// Stroke the wave across the canvas, then advance and draw each marker on it.
    pub fn draw_wave_and_markers(
        &self,
        surface: &mut dyn DrawSurface,
        markers: &mut MarkerSet,
        progress: f64,
    ) {
        let centered = Affine::translate((0.0, self.canvas.height_f64() / 2.0));

        let step = self.line.sample_step.max(1) as usize;
        let path = polyline((0..=self.canvas.width).step_by(step).map(|x| {
            let x = f64::from(x);
            Point::new(x, self.wave.y(x, progress))
        }));
        surface.draw_path(
            &path,
            StrokeStyle {
                color: self.palette.line,
                width: self.line.stroke_width,
            },
            centered,
        );

        markers.advance_all();
        for m in markers.as_slice() {
            let x = m.progress * self.wave.width();
            let center = Point::new(x, self.wave.y(x, progress));
            surface.draw_circle(center, self.marker_diameter, self.palette.primary, centered);
        }
    }

    /// Draw the two-leg logo at its pulse scale for `progress`.
    pub fn draw_logo(&self, surface: &mut dyn DrawSurface, progress: f64) {
        let transform = self.logo.transform(self.canvas, progress);

        let (base, top) = self.logo.gradient_axis();
        let glow = Paint::Linear(LinearGradient {
            start: base,
            end: top,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: self.palette.primary,
                },
                GradientStop {
                    offset: 0.5,
                    color: self.palette.glow_mid,
                },
                GradientStop {
                    offset: 1.0,
                    color: self.palette.glow_light,
                },
            ],
        });
        surface.draw_gradient_polygon(&self.logo.left_leg(), &glow, transform);

        surface.draw_gradient_polygon(
            &self.logo.right_leg(),
            &Paint::Solid(self.palette.primary),
            transform,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
