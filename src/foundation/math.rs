/// Linearly remap `v` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`.
///
/// No clamping: values outside the input range extrapolate. A degenerate input range maps
/// everything to `out_lo`.
pub fn map_range(v: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let span = in_hi - in_lo;
    if span == 0.0 {
        return out_lo;
    }
    out_lo + (v - in_lo) / span * (out_hi - out_lo)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
