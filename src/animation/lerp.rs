use crate::foundation::core::Vec2;

/// Interpolation contract for animated style values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Whether `self` and `other` can share one interpolation table.
    ///
    /// Values carrying a unit (for example [`crate::Length`]) only interpolate within
    /// the same unit.
    fn is_compatible(&self, _other: &Self) -> bool {
        true
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}
