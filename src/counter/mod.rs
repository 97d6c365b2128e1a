//! Number-reveal counters: label parsing and the in-view count-up animation.

/// Count-up animation.
pub mod animator;
/// Label parsing and formatting.
pub mod label;
