use super::*;

fn one_px(data: [u8; 4], premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: data.to_vec(),
        premultiplied,
    }
}

#[test]
fn flatten_premul_alpha_0_returns_bg() {
    let out = one_px([0, 0, 0, 0], true)
        .to_opaque_rgba8([10, 20, 30, 255])
        .unwrap();
    assert_eq!(out, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_premul_alpha_255_is_identity() {
    let out = one_px([1, 2, 3, 255], true)
        .to_opaque_rgba8([10, 20, 30, 255])
        .unwrap();
    assert_eq!(out, vec![1, 2, 3, 255]);
}

#[test]
fn flatten_straight_half_alpha_blends() {
    let out = one_px([255, 0, 0, 128], false)
        .to_opaque_rgba8([0, 0, 255, 255])
        .unwrap();
    assert_eq!(out, vec![128, 0, 127, 255]);
}

#[test]
fn size_mismatch_is_rejected() {
    let bad = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 4],
        premultiplied: true,
    };
    assert!(bad.to_opaque_rgba8([0, 0, 0, 255]).is_err());
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = one_px([9, 8, 7, 255], true);
    assert_eq!(f.pixel(0, 0), Some([9, 8, 7, 255]));
    assert_eq!(f.pixel(1, 0), None);
}
