use crate::foundation::core::Rgba8;

/// The five named colors of the sketch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Canvas background.
    pub background: Rgba8,
    /// Wave line stroke.
    pub line: Rgba8,
    /// Markers, the solid logo leg and the bottom gradient stop.
    pub primary: Rgba8,
    /// Middle gradient stop.
    pub glow_mid: Rgba8,
    /// Top gradient stop.
    pub glow_light: Rgba8,
}

impl Palette {
    /// Warm beige background, black line, red primary, orange/yellow glow.
    pub const DEFAULT: Self = Self {
        background: Rgba8::rgb(0xF6, 0xF0, 0xE2),
        line: Rgba8::rgb(0x00, 0x00, 0x00),
        primary: Rgba8::rgb(0xEE, 0x00, 0x1E),
        glow_mid: Rgba8::rgb(0xFF, 0x9A, 0x3D),
        glow_light: Rgba8::rgb(0xFC, 0xE5, 0x7E),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/palette.rs"]
mod tests;
