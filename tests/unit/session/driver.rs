use super::*;
use crate::anim::markers::MARKER_COUNT;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{Canvas, Fps};
use crate::render::draw::{DrawCommand, RecordingSurface};

fn small_config() -> SketchConfig {
    SketchConfig {
        canvas: Canvas {
            width: 96,
            height: 64,
        },
        fps: Fps { num: 10, den: 1 },
        loop_seconds: 1.0,
        seed: 3,
        ..SketchConfig::default()
    }
}

#[test]
fn fresh_driver_has_six_evenly_spaced_markers() {
    let d = FrameDriver::new(SketchConfig::default()).unwrap();
    assert_eq!(d.markers().len(), MARKER_COUNT);
    let progress: Vec<f64> = d.markers().as_slice().iter().map(|m| m.progress).collect();
    assert_eq!(
        progress,
        vec![0.0, 1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0, 4.0 / 6.0, 5.0 / 6.0]
    );
    assert_eq!(d.total_loop_frames(), 480);
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = SketchConfig {
        canvas: Canvas {
            width: 0,
            height: 800,
        },
        ..SketchConfig::default()
    };
    assert!(FrameDriver::new(cfg).is_err());
}

#[test]
fn ticks_walk_the_loop_and_wrap() {
    let cfg = small_config();
    let mut d = FrameDriver::new(cfg).unwrap();
    let mut s = RecordingSurface::new();

    for expected in 0..25u64 {
        let progress = d.clock().progress();
        assert_eq!(progress, (expected % 10) as f64 / 10.0);
        assert_eq!(d.tick(&mut s), FrameIndex(expected));

        // The logo is the last command of every frame and carries the loop progress.
        let Some(DrawCommand::Polygon { transform, .. }) = s.take().pop() else {
            panic!("frame must end with the logo");
        };
        assert_eq!(transform, cfg.logo.transform(cfg.canvas, progress));
    }
    assert_eq!(d.clock().loops_completed(), 2);
}

#[test]
fn markers_stay_in_unit_interval_over_many_loops() {
    let mut d = FrameDriver::new(SketchConfig {
        markers: crate::anim::markers::MarkerParams {
            speed_min: 0.05,
            speed_max: 0.3,
            ..Default::default()
        },
        ..small_config()
    })
    .unwrap();
    let mut s = RecordingSurface::new();
    for _ in 0..500 {
        d.tick(&mut s);
        s.take();
        assert!(
            d.markers()
                .as_slice()
                .iter()
                .all(|m| (0.0..1.0).contains(&m.progress))
        );
    }
}

#[test]
fn export_pushes_exactly_one_loop() {
    let mut d = FrameDriver::new(small_config()).unwrap();
    let mut sink = InMemorySink::new();
    let n = d.export_loop(&mut sink).unwrap();

    assert_eq!(n, 10);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.frame_count), (96, 64, 10));
    let indices: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(indices, (0..10).collect::<Vec<_>>());
    assert!(
        sink.frames()
            .iter()
            .all(|(_, f)| f.data.len() == 96 * 64 * 4)
    );
    assert_eq!(d.clock().frame(), FrameIndex(10));
}

#[test]
fn same_seed_renders_identical_frames() {
    let mut a = FrameDriver::new(small_config()).unwrap();
    let mut b = FrameDriver::new(small_config()).unwrap();
    let mut sa = CpuSurface::new(small_config().canvas).unwrap();
    let mut sb = CpuSurface::new(small_config().canvas).unwrap();
    for _ in 0..5 {
        assert_eq!(a.render_frame(&mut sa), b.render_frame(&mut sb));
    }
}

#[test]
fn skip_to_matches_live_run() {
    let mut live = FrameDriver::new(small_config()).unwrap();
    let mut s = RecordingSurface::new();
    for _ in 0..7 {
        live.tick(&mut s);
    }

    let mut skipped = FrameDriver::new(small_config()).unwrap();
    skipped.skip_to(FrameIndex(7));
    assert_eq!(skipped.clock().frame(), FrameIndex(7));
    assert_eq!(skipped.markers(), live.markers());

    skipped.skip_to(FrameIndex(3));
    assert_eq!(skipped.clock().frame(), FrameIndex(7));
}

#[test]
fn injected_rng_controls_speeds() {
    use rand::rngs::mock::StepRng;

    let mut rng = StepRng::new(0, 0);
    let d = FrameDriver::with_rng(SketchConfig::default(), &mut rng).unwrap();
    let speeds: Vec<f64> = d.markers().as_slice().iter().map(|m| m.speed).collect();
    assert!(speeds.iter().all(|&s| s == speeds[0]));
    assert!(speeds[0] >= 0.0005 && speeds[0] < 0.0015);
}
