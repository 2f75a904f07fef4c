use crate::foundation::error::{FlowError, FlowResult};
use crate::foundation::math::mul_div255_u16;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`crate::CpuSurface`] are **premultiplied alpha**. The `premultiplied` flag
/// makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Opaque straight-alpha RGBA8, flattening any transparency over `bg_rgba`.
    pub fn to_opaque_rgba8(&self, bg_rgba: [u8; 4]) -> FlowResult<Vec<u8>> {
        let expected = (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4);
        if self.data.len() != expected {
            return Err(FlowError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
        let mut out = vec![0u8; expected];
        if self.premultiplied {
            flatten_premul_over_bg_to_opaque_rgba8(&mut out, &self.data, bg_rgba);
        } else {
            flatten_straight_over_bg_to_opaque_rgba8(&mut out, &self.data, bg_rgba);
        }
        Ok(out)
    }
}

fn flatten_premul_over_bg_to_opaque_rgba8(dst: &mut [u8], src_premul: &[u8], bg_rgba: [u8; 4]) {
    let bg = [bg_rgba[0] as u16, bg_rgba[1] as u16, bg_rgba[2] as u16];

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = s[3] as u16;
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        for c in 0..3 {
            d[c] = (s[c] as u16 + mul_div255_u16(bg[c], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
}

fn flatten_straight_over_bg_to_opaque_rgba8(dst: &mut [u8], src: &[u8], bg_rgba: [u8; 4]) {
    let bg = [bg_rgba[0] as u16, bg_rgba[1] as u16, bg_rgba[2] as u16];

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = s[3] as u16;
        let inv = 255u16 - a;
        for c in 0..3 {
            d[c] = (mul_div255_u16(s[c] as u16, a) + mul_div255_u16(bg[c], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
