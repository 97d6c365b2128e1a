//! Value interpolation: easing curves, the [`Lerp`](lerp::Lerp) contract, CSS-like style
//! values, and piecewise-linear breakpoint tables.

/// Easing curves.
pub mod ease;
/// The interpolation contract.
pub mod lerp;
/// Breakpoint tables.
pub mod table;
/// `Length` and `Rgba` style values.
pub mod value;
