use std::collections::BTreeMap;

use crate::foundation::core::{Rect, Viewport};

/// Geometry queries the host rendering environment answers.
///
/// Rects are in document coordinates (independent of the current scroll offset).
pub trait LayoutHost {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Document rect of a mounted element, or `None` when it is not laid out.
    fn rect_of(&self, element: &str) -> Option<Rect>;
}

/// Map-backed layout, used for scenes loaded from JSON and in tests.
#[derive(Clone, Debug)]
pub struct StaticLayout {
    viewport: Viewport,
    rects: BTreeMap<String, Rect>,
}

impl StaticLayout {
    /// Create an empty layout.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: BTreeMap::new(),
        }
    }

    /// Insert or replace an element's rect.
    pub fn set_rect(&mut self, element: impl Into<String>, rect: Rect) {
        self.rects.insert(element.into(), rect);
    }

    /// Replace the viewport size.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Builder form of [`Self::set_rect`].
    pub fn with_rect(mut self, element: impl Into<String>, rect: Rect) -> Self {
        self.set_rect(element, rect);
        self
    }
}

impl LayoutHost for StaticLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn rect_of(&self, element: &str) -> Option<Rect> {
        self.rects.get(element).copied()
    }
}
