//! Output sinks.
//!
//! Sinks consume rendered frames in timeline order and are used by
//! [`crate::FrameDriver::export_loop`].

/// Animated GIF output.
pub mod gif;
/// Single-frame PNG output.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
