use super::*;
use proptest::prelude::*;

#[test]
fn pulse_extremes_land_on_quarter_loops() {
    let logo = LogoParams::default();
    assert!((logo.pulse_scale(0.0) - 1.0).abs() < 1e-12);
    assert!((logo.pulse_scale(0.25) - 1.15).abs() < 1e-12);
    assert!((logo.pulse_scale(0.5) - 1.0).abs() < 1e-12);
    assert!((logo.pulse_scale(0.75) - 1.15).abs() < 1e-12);
}

#[test]
fn crests_are_local_maxima() {
    let logo = LogoParams::default();
    for crest in [0.25, 0.75] {
        let peak = logo.pulse_scale(crest);
        assert!(logo.pulse_scale(crest - 0.01) < peak);
        assert!(logo.pulse_scale(crest + 0.01) < peak);
    }
}

#[test]
fn legs_match_reference_geometry() {
    let logo = LogoParams::default();
    assert_eq!(
        logo.left_leg(),
        [
            Point::new(0.0, 0.0),
            Point::new(-20.0, 0.0),
            Point::new(-45.0, -65.0),
            Point::new(-25.0, -65.0),
        ]
    );
    assert_eq!(
        logo.right_leg(),
        [
            Point::new(-10.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(35.0, -65.0),
            Point::new(15.0, -65.0),
        ]
    );
}

#[test]
fn right_leg_covers_the_seam() {
    let logo = LogoParams::default();
    let left = logo.left_leg();
    let right = logo.right_leg();
    // The left leg's base ends at x=0; the right leg's base straddles it.
    assert!(right[0].x < left[0].x && left[0].x < right[1].x);
}

#[test]
fn transform_anchors_top_right_and_scales() {
    let logo = LogoParams::default();
    let canvas = Canvas {
        width: 1000,
        height: 800,
    };
    let at_rest = logo.transform(canvas, 0.0);
    assert_eq!(at_rest * Point::ORIGIN, Point::new(920.0, 85.0));

    let peak = logo.transform(canvas, 0.25);
    let top = peak * Point::new(0.0, -65.0);
    assert!((top.y - (85.0 - 65.0 * 1.15)).abs() < 1e-9);
}

#[test]
fn validation_rejects_bad_ranges() {
    assert!(LogoParams::default().validate().is_ok());
    let inverted = LogoParams {
        scale_min: 1.2,
        scale_max: 1.0,
        ..LogoParams::default()
    };
    assert!(inverted.validate().is_err());
    let flat = LogoParams {
        leg_height: 0.0,
        ..LogoParams::default()
    };
    assert!(flat.validate().is_err());
}

proptest! {
    #[test]
    fn scale_stays_in_range(progress in 0.0f64..1.0) {
        let s = LogoParams::default().pulse_scale(progress);
        prop_assert!((1.0 - 1e-12..=1.15 + 1e-12).contains(&s));
    }
}
