use super::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded(seed: u64) -> MarkerSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    MarkerSet::new(&MarkerParams::default(), &mut rng)
}

#[test]
fn six_markers_evenly_spaced() {
    let set = seeded(0);
    assert_eq!(set.len(), 6);
    for (i, m) in set.as_slice().iter().enumerate() {
        assert_eq!(m.progress, i as f64 / 6.0);
    }
}

#[test]
fn speeds_fall_in_configured_range() {
    let params = MarkerParams::default();
    for seed in 0..32 {
        for m in seeded(seed).as_slice() {
            assert!(m.speed >= params.speed_min && m.speed < params.speed_max);
        }
    }
}

#[test]
fn same_seed_same_trajectory() {
    let mut a = seeded(42);
    let mut b = seeded(42);
    for _ in 0..1000 {
        a.advance_all();
        b.advance_all();
    }
    assert_eq!(a, b);
    assert_ne!(seeded(42), seeded(43));
}

#[test]
fn wraps_past_one() {
    let mut m = Marker {
        progress: 0.9995,
        speed: 0.001,
    };
    m.advance();
    assert_eq!(m.progress, 0.9995 + 0.001 - 1.0);
    assert!(m.progress >= 0.0 && m.progress < 1.0);
}

#[test]
fn landing_exactly_on_one_wraps_to_zero() {
    let mut m = Marker {
        progress: 0.5,
        speed: 0.5,
    };
    m.advance();
    assert_eq!(m.progress, 0.0);
}

#[test]
fn from_markers_normalizes_progress() {
    let set = MarkerSet::from_markers([Marker {
        progress: 1.25,
        speed: 0.001,
    }; MARKER_COUNT]);
    assert!(set.as_slice().iter().all(|m| m.progress == 0.25));
}

#[test]
fn params_validation() {
    assert!(MarkerParams::default().validate().is_ok());
    let inverted = MarkerParams {
        speed_min: 0.002,
        speed_max: 0.001,
        ..MarkerParams::default()
    };
    assert!(inverted.validate().is_err());
    let too_fast = MarkerParams {
        speed_max: 1.0,
        ..MarkerParams::default()
    };
    assert!(too_fast.validate().is_err());
}

proptest! {
    #[test]
    fn progress_stays_in_unit_interval(seed in any::<u64>(), ticks in 0usize..5000) {
        let mut set = seeded(seed);
        for _ in 0..ticks {
            set.advance_all();
        }
        for m in set.as_slice() {
            prop_assert!(m.progress >= 0.0 && m.progress < 1.0);
        }
    }

    #[test]
    fn wrap_law(progress in 0.0f64..1.0, speed in 0.0005f64..0.0015) {
        let mut m = Marker { progress, speed };
        let sum = progress + speed;
        m.advance();
        if sum >= 1.0 {
            prop_assert_eq!(m.progress, sum - 1.0);
        } else {
            prop_assert_eq!(m.progress, sum);
        }
    }
}
