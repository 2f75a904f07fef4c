use super::*;

#[test]
fn default_palette_hex_values() {
    let p = Palette::default();
    assert_eq!(p.background.to_hex(), "#F6F0E2");
    assert_eq!(p.line.to_hex(), "#000000");
    assert_eq!(p.primary.to_hex(), "#EE001E");
    assert_eq!(p.glow_mid.to_hex(), "#FF9A3D");
    assert_eq!(p.glow_light.to_hex(), "#FCE57E");
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let p: Palette = serde_json::from_str(r##"{"primary":"#0000FF"}"##).unwrap();
    assert_eq!(p.primary, Rgba8::rgb(0, 0, 255));
    assert_eq!(p.background, Palette::DEFAULT.background);
}

#[test]
fn unknown_color_name_is_rejected() {
    assert!(serde_json::from_str::<Palette>(r##"{"accent":"#FFFFFF"}"##).is_err());
}
