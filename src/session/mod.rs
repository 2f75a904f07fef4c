/// Frame driver: owns loop state and produces frames.
pub mod driver;
/// Fixed-rate host loop.
pub mod host;
