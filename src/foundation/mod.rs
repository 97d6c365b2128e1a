/// Geometry re-exports, `ScrollProgress` and `Viewport`.
pub mod core;
/// `ScrollFxError` and `ScrollFxResult`.
pub mod error;
