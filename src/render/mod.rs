/// Rendered frame buffers.
pub mod backend;
/// CPU rasterizer.
pub mod cpu;
/// Immediate-mode drawing capability.
pub mod draw;
/// Per-frame scene drawing.
pub mod frame;
