//! scrollfx is a headless scroll-driven animation engine.
//!
//! The host feeds scroll offsets, viewport size, element geometry and frame timestamps;
//! scrollfx answers with concrete style values:
//!
//! - [`ViewportTracker`] turns an element's position into [`ScrollProgress`]
//! - [`InterpolationTable`] maps progress through breakpoint tables
//! - [`CounterAnimator`] counts numeric labels up, gated per section by [`AnimateGate`]
//! - [`RevealStack`] exits layered cards one after another
//! - [`Scene`] wires a whole page together from a JSON [`SceneDef`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod animation;
/// Scroll-linked page components built on the tracker and tables.
pub mod components;
pub mod counter;
/// Errors, geometry and the core newtypes.
pub mod foundation;
pub mod frame;
/// JSON scene documents and the runtime that drives them.
pub mod scene;
pub mod scroll;

pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::Lerp;
pub use crate::animation::table::InterpolationTable;
pub use crate::animation::value::{Length, Rgba};
pub use crate::components::reveal_stack::{LayeredCard, RevealStack, RevealStackConfig};
pub use crate::counter::animator::{CounterAnimator, CounterConfig, CounterState};
pub use crate::counter::label::LabelDescriptor;
pub use crate::foundation::core::{Point, Rect, ScrollProgress, Size, Vec2, Viewport};
pub use crate::foundation::error::{ScrollFxError, ScrollFxResult};
pub use crate::frame::scheduler::{FrameScheduler, TaskHandle, TaskState, TaskStatus};
pub use crate::scene::model::SceneDef;
pub use crate::scene::runtime::{Scene, SceneEvent, SceneFrame};
pub use crate::scroll::gate::{AnimateGate, GateState, GateTransition};
pub use crate::scroll::host::{LayoutHost, StaticLayout};
pub use crate::scroll::offset::{Edge, ScrollOffset, ScrollWindow};
pub use crate::scroll::tracker::ViewportTracker;
