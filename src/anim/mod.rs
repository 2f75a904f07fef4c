/// Loop timing.
pub mod clock;
/// Logo pulse and leg geometry.
pub mod logo;
/// Markers sliding along the wave.
pub mod markers;
/// Wave evaluator.
pub mod wave;
