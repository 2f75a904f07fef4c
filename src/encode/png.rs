use std::path::Path;

use anyhow::Context as _;

use crate::encode::gif::ensure_parent_dir;
use crate::foundation::error::FlowResult;
use crate::render::backend::FrameRGBA;

/// Write `frame` as an opaque PNG, flattening transparency over `bg_rgba`.
pub fn write_png(frame: &FrameRGBA, path: &Path, bg_rgba: [u8; 4]) -> FlowResult<()> {
    ensure_parent_dir(path)?;
    let rgba = frame.to_opaque_rgba8(bg_rgba)?;
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
