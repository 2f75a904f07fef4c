use super::*;

#[test]
fn map_range_hits_endpoints_and_midpoint() {
    assert_eq!(map_range(0.0, 0.0, 800.0, 240.0, 20.0), 240.0);
    assert_eq!(map_range(800.0, 0.0, 800.0, 240.0, 20.0), 20.0);
    assert!((map_range(400.0, 0.0, 800.0, 240.0, 20.0) - 130.0).abs() < 1e-12);
}

#[test]
fn map_range_extrapolates_and_handles_degenerate_input() {
    assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
    assert_eq!(map_range(5.0, 3.0, 3.0, 7.0, 9.0), 7.0);
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 0), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(246, 0), 0);
}
