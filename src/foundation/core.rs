use crate::foundation::error::{ScrollFxError, ScrollFxResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Normalized traversal of a tracked region through its scroll window.
///
/// Always within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    /// Progress at the start of the window.
    pub const START: Self = Self(0.0);
    /// Progress at the end of the window.
    pub const END: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`. NaN maps to `0`.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::START;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Raw value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<ScrollProgress> for f64 {
    fn from(p: ScrollProgress) -> Self {
        p.0
    }
}

/// Size of the scroll container's visible area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with finite, non-negative extents.
    pub fn new(width: f64, height: f64) -> ScrollFxResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ScrollFxError::validation(format!(
                "viewport must be finite and non-negative, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Visible document region when the container is scrolled to `scroll_y`.
    pub fn rect_at(self, scroll_y: f64) -> Rect {
        Rect::new(0.0, scroll_y, self.width, scroll_y + self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
