use crate::foundation::core::Rect;

/// Threshold configuration for in-view detection.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InViewOptions {
    /// Fraction of the element's height that must intersect the viewport.
    #[serde(default = "default_amount")]
    pub amount: f64,
}

fn default_amount() -> f64 {
    0.5
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            amount: default_amount(),
        }
    }
}

/// Fraction of `target`'s height currently inside `viewport`, in `[0, 1]`.
///
/// Both rects are in document coordinates. Zero-height targets report `1` when their
/// top lies inside the viewport and `0` otherwise.
pub fn visible_fraction(target: Rect, viewport: Rect) -> f64 {
    let height = target.height();
    if height.is_nan() || height <= 0.0 {
        let inside = target.y0 >= viewport.y0 && target.y0 <= viewport.y1;
        return if inside { 1.0 } else { 0.0 };
    }
    let top = target.y0.max(viewport.y0);
    let bottom = target.y1.min(viewport.y1);
    ((bottom - top).max(0.0) / height).clamp(0.0, 1.0)
}

/// Whether `target` counts as in view under `opts`.
pub fn is_in_view(target: Rect, viewport: Rect, opts: InViewOptions) -> bool {
    let fraction = visible_fraction(target, viewport);
    if opts.amount <= 0.0 {
        return fraction > 0.0;
    }
    fraction >= opts.amount.min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/visibility.rs"]
mod tests;
