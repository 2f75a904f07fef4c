use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::scene::config::SketchConfig;

fn tiny_driver() -> FrameDriver {
    FrameDriver::new(SketchConfig {
        canvas: Canvas {
            width: 32,
            height: 24,
        },
        fps: Fps { num: 60, den: 1 },
        loop_seconds: 0.1,
        ..SketchConfig::default()
    })
    .unwrap()
}

#[test]
fn stops_at_frame_limit_and_counts_loops() {
    let mut driver = tiny_driver();
    assert_eq!(driver.total_loop_frames(), 6);
    let mut host = RunLoop::new(
        &driver,
        RunLoopOpts {
            max_frames: Some(13),
            unpaced: true,
        },
    )
    .unwrap();

    let stats = host.run(&mut driver);
    assert_eq!(stats.frames, 13);
    assert_eq!(stats.loops_completed, 2);
    assert_eq!(driver.clock().frame().0, 13);
    let last = host.last_frame().unwrap();
    assert_eq!((last.width, last.height), (32, 24));
}

#[test]
fn paced_run_takes_at_least_the_scheduled_time() {
    let mut driver = tiny_driver();
    let mut host = RunLoop::new(
        &driver,
        RunLoopOpts {
            max_frames: Some(3),
            unpaced: false,
        },
    )
    .unwrap();
    let period = host.frame_period();
    assert!((period.as_secs_f64() - 1.0 / 60.0).abs() < 1e-6);

    let start = Instant::now();
    host.run(&mut driver);
    // The last tick sleeps until the third deadline unless it ran late.
    assert!(start.elapsed() >= period * 2);
}

#[test]
fn zero_frame_limit_renders_nothing() {
    let mut driver = tiny_driver();
    let mut host = RunLoop::new(
        &driver,
        RunLoopOpts {
            max_frames: Some(0),
            unpaced: true,
        },
    )
    .unwrap();
    assert_eq!(host.run(&mut driver), RunStats::default());
    assert!(host.last_frame().is_none());
}

#[test]
fn loops_follow_the_driver_position_not_the_run_length() {
    let mut driver = tiny_driver();
    driver.skip_to(FrameIndex(4));
    let mut host = RunLoop::new(
        &driver,
        RunLoopOpts {
            max_frames: Some(2),
            unpaced: true,
        },
    )
    .unwrap();

    let stats = host.run(&mut driver);
    assert_eq!(stats.frames, 2);
    assert_eq!(driver.clock().loops_completed(), 1);
    assert_eq!(stats.loops_completed, 1);

    let stats = host.run(&mut driver);
    assert_eq!(driver.clock().frame().0, 8);
    assert_eq!(stats.loops_completed, 0);
}
