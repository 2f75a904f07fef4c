//! Immediate-mode drawing capability.
//!
//! Every call carries its own style and transform, so a surface has no drawing state that could
//! leak from one shape to the next.

use crate::foundation::core::{Affine, BezPath, Point, Rgba8};

/// Stroke style for open paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in local units.
    pub width: f64,
}

/// One stop of a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis in `[0, 1]`.
    pub offset: f32,
    /// Color at this offset.
    pub color: Rgba8,
}

/// Linear gradient in the local coordinates of the shape it fills.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Point at offset 0.
    pub start: Point,
    /// Point at offset 1.
    pub end: Point,
    /// Stops in increasing offset order.
    pub stops: Vec<GradientStop>,
}

/// Fill paint for closed shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Single color.
    Solid(Rgba8),
    /// Linear gradient.
    Linear(LinearGradient),
}

/// A drawing target.
pub trait DrawSurface {
    /// Fill the whole surface with `color`, discarding previous content.
    fn clear(&mut self, color: Rgba8);

    /// Stroke an open path (no fill).
    fn draw_path(&mut self, path: &BezPath, style: StrokeStyle, transform: Affine);

    /// Fill a circle of `diameter` centered at `center`.
    fn draw_circle(&mut self, center: Point, diameter: f64, color: Rgba8, transform: Affine);

    /// Fill the closed polygon through `points`.
    fn draw_gradient_polygon(&mut self, points: &[Point], paint: &Paint, transform: Affine);
}

/// Build an open polyline through `points`.
pub fn polyline(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

/// Build a closed polygon through `points`.
pub fn polygon(points: &[Point]) -> BezPath {
    let mut path = polyline(points.iter().copied());
    if !points.is_empty() {
        path.close_path();
    }
    path
}

/// A draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawSurface::clear`].
    Clear(Rgba8),
    /// [`DrawSurface::draw_path`].
    Path {
        /// The stroked path.
        path: BezPath,
        /// Stroke style.
        style: StrokeStyle,
        /// Local-to-canvas transform.
        transform: Affine,
    },
    /// [`DrawSurface::draw_circle`].
    Circle {
        /// Circle center in local coordinates.
        center: Point,
        /// Circle diameter.
        diameter: f64,
        /// Fill color.
        color: Rgba8,
        /// Local-to-canvas transform.
        transform: Affine,
    },
    /// [`DrawSurface::draw_gradient_polygon`].
    Polygon {
        /// Polygon vertices in local coordinates.
        points: Vec<Point>,
        /// Fill paint.
        paint: Paint,
        /// Local-to-canvas transform.
        transform: Affine,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Rgba8) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_path(&mut self, path: &BezPath, style: StrokeStyle, transform: Affine) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            style,
            transform,
        });
    }

    fn draw_circle(&mut self, center: Point, diameter: f64, color: Rgba8, transform: Affine) {
        self.commands.push(DrawCommand::Circle {
            center,
            diameter,
            color,
            transform,
        });
    }

    fn draw_gradient_polygon(&mut self, points: &[Point], paint: &Paint, transform: Affine) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            paint: paint.clone(),
            transform,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
