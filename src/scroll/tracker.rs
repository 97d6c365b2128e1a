use crate::{
    foundation::core::{Rect, ScrollProgress, Viewport},
    scroll::offset::ScrollWindow,
};

/// Progress of `target` through `window` at document scroll offset `scroll_y`.
///
/// `target` is in document coordinates. A zero-height target, or a window whose exit
/// does not lie after its entry, yields progress `0`.
pub fn scroll_progress(
    window: ScrollWindow,
    scroll_y: f64,
    target: Rect,
    viewport: Viewport,
) -> ScrollProgress {
    let height = target.height();
    if height.is_nan() || height <= 0.0 {
        return ScrollProgress::START;
    }

    let enter_y = window.enter.scroll_y(target.y0, height, viewport.height);
    let exit_y = window.exit.scroll_y(target.y0, height, viewport.height);
    let distance = exit_y - enter_y;
    if !distance.is_finite() || distance <= 0.0 {
        return ScrollProgress::START;
    }

    ScrollProgress::new((scroll_y - enter_y) / distance)
}

/// Tracks one element's progress through a viewport-relative scroll window.
///
/// The host calls [`ViewportTracker::update`] on every scroll and resize event; readers use
/// [`ViewportTracker::progress`] within the same pass.
#[derive(Clone, Debug)]
pub struct ViewportTracker {
    window: ScrollWindow,
    progress: ScrollProgress,
}

impl ViewportTracker {
    /// Create a tracker at progress `0`.
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            window,
            progress: ScrollProgress::START,
        }
    }

    /// Window this tracker measures against.
    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    /// Recompute progress from the current scroll offset and geometry.
    pub fn update(&mut self, scroll_y: f64, target: Rect, viewport: Viewport) -> ScrollProgress {
        self.progress = scroll_progress(self.window, scroll_y, target, viewport);
        tracing::trace!(scroll_y, progress = self.progress.get(), "tracker update");
        self.progress
    }

    /// Last computed progress.
    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(ScrollWindow::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
