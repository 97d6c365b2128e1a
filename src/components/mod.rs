/// Column fills and text reveal driven by section progress.
pub mod columns;
/// Opacity fade-in on entering view.
pub mod fade;
/// Icons that fly into formation.
pub mod floating_icons;
/// Desktop-only vertical parallax.
pub mod parallax;
/// Layered cards that exit one after another.
pub mod reveal_stack;
