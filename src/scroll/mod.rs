//! Scroll-position inputs: offsets and windows, progress tracking, in-view detection, and
//! the per-section animate gate.

/// Per-section animate gate.
pub mod gate;
/// Host layout queries.
pub mod host;
/// Scroll offsets and windows.
pub mod offset;
/// Viewport progress tracking.
pub mod tracker;
/// In-view detection.
pub mod visibility;
