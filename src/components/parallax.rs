use crate::{
    animation::table::InterpolationTable,
    foundation::core::ScrollProgress,
    foundation::error::{ScrollFxError, ScrollFxResult},
};

/// Default viewport width at which parallax switches on (CSS `lg` breakpoint).
pub const DEFAULT_DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Vertical parallax for a column of text blocks moving at different speeds.
///
/// Item `i` with amplitude `a` maps progress `[0, 1]` to `y` in `[a, -a]`. Below the
/// desktop breakpoint every item stays at `0`.
#[derive(Clone, Debug)]
pub struct ParallaxBlock {
    tables: Vec<InterpolationTable<f64>>,
    flat: InterpolationTable<f64>,
    desktop_min_width: f64,
    active: bool,
}

impl ParallaxBlock {
    /// Build one table per amplitude (pixels).
    pub fn new(
        amplitudes: &[f64],
        desktop_min_width: f64,
        viewport_width: f64,
    ) -> ScrollFxResult<Self> {
        if let Some(bad) = amplitudes.iter().find(|a| !a.is_finite()) {
            return Err(ScrollFxError::validation(format!(
                "parallax amplitude {bad} is not finite"
            )));
        }
        let tables = amplitudes
            .iter()
            .map(|&a| InterpolationTable::span(a, -a))
            .collect::<ScrollFxResult<Vec<_>>>()?;
        Ok(Self {
            tables,
            flat: InterpolationTable::span(0.0, 0.0)?,
            desktop_min_width,
            active: viewport_width >= desktop_min_width,
        })
    }

    /// Re-evaluate the breakpoint after a resize.
    pub fn on_resize(&mut self, viewport_width: f64) {
        let active = viewport_width >= self.desktop_min_width;
        if active != self.active {
            tracing::debug!(viewport_width, active, "parallax breakpoint crossed");
        }
        self.active = active;
    }

    /// Whether the desktop tables are in use.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of parallax items.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// `true` when the block has no items.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Vertical offset in pixels for every item.
    pub fn offsets(&self, progress: ScrollProgress) -> Vec<f64> {
        self.tables
            .iter()
            .map(|t| {
                if self.active {
                    t.map(progress)
                } else {
                    self.flat.map(progress)
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/parallax.rs"]
mod tests;
