use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8};
use crate::foundation::error::{FlowError, FlowResult};
use crate::render::backend::FrameRGBA;
use crate::render::draw::{DrawSurface, LinearGradient, Paint, StrokeStyle, polygon};

const CIRCLE_TOLERANCE: f64 = 0.1;
// Canvas 2D default; sharper corners fall back to bevel.
const MITER_LIMIT: f64 = 10.0;

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are recorded into a reusable render context and rasterized by
/// [`CpuSurface::finish_frame`].
pub struct CpuSurface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuSurface {
    /// Allocate a surface. Each edge must fit in `u16`.
    pub fn new(canvas: Canvas) -> FlowResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(FlowError::validation("surface width/height must be non-zero"));
        }
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| FlowError::validation("surface width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| FlowError::validation("surface height exceeds u16"))?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Rasterize everything drawn since the last [`DrawSurface::clear`] and read it back.
    pub fn finish_frame(&mut self) -> FrameRGBA {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn begin_shape(&mut self, transform: Affine) {
        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
    }
}

impl DrawSurface for CpuSurface {
    fn clear(&mut self, color: Rgba8) {
        self.ctx.reset();
        self.begin_shape(Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            self.canvas.width_f64(),
            self.canvas.height_f64(),
        ));
    }

    fn draw_path(&mut self, path: &BezPath, style: StrokeStyle, transform: Affine) {
        self.begin_shape(transform);
        self.ctx.set_paint(color_to_cpu(style.color));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(style.width)
                .with_join(vello_cpu::kurbo::Join::Miter)
                .with_miter_limit(MITER_LIMIT),
        );
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn draw_circle(&mut self, center: Point, diameter: f64, color: Rgba8, transform: Affine) {
        let circle = kurbo::Circle::new(center, diameter / 2.0).to_path(CIRCLE_TOLERANCE);
        self.begin_shape(transform);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&bezpath_to_cpu(&circle));
    }

    fn draw_gradient_polygon(&mut self, points: &[Point], paint: &Paint, transform: Affine) {
        if points.len() < 3 {
            return;
        }
        self.begin_shape(transform);
        match paint {
            Paint::Solid(c) => self.ctx.set_paint(color_to_cpu(*c)),
            Paint::Linear(g) => self.ctx.set_paint(gradient_to_cpu(g)),
        }
        self.ctx.fill_path(&bezpath_to_cpu(&polygon(points)));
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn gradient_to_cpu(g: &LinearGradient) -> vello_cpu::peniko::Gradient {
    let stops: Vec<(f32, vello_cpu::peniko::Color)> = g
        .stops
        .iter()
        .map(|s| (s.offset, color_to_cpu(s.color)))
        .collect();
    vello_cpu::peniko::Gradient::new_linear(
        vello_cpu::kurbo::Point::new(g.start.x, g.start.y),
        vello_cpu::kurbo::Point::new(g.end.x, g.end.y),
    )
    .with_stops(stops.as_slice())
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
