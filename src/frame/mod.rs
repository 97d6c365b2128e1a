//! Per-frame driving: a cancellable callback scheduler, shared motion values, and
//! time-based tweens.

/// Shared animated values.
pub mod motion;
/// Cancellable per-frame tasks.
pub mod scheduler;
/// Time-based tweens.
pub mod tween;
