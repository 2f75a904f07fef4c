/// Sketch configuration (the constants surface).
pub mod config;
/// Named colors.
pub mod palette;
