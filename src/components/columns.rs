use crate::{
    animation::table::InterpolationTable,
    animation::value::Length,
    foundation::core::ScrollProgress,
    foundation::error::{ScrollFxError, ScrollFxResult},
};

/// Default number of columns.
pub const DEFAULT_COLUMN_COUNT: usize = 8;

/// One column's fills.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ColumnFrame {
    /// Width of the fill growing from the left edge.
    pub left_fill: Length,
    /// Width of the fill growing from the right edge.
    pub right_fill: Length,
    /// Whether a separator line is drawn on the right edge.
    pub separator: bool,
}

/// Output of [`ProgressiveColumns::frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ColumnsFrame {
    /// Columns from left to right.
    pub columns: Vec<ColumnFrame>,
    /// Clip width of the text layer revealed during the first phase.
    pub text_reveal: Length,
    /// Clip width of the text layer that wipes away during the second phase.
    pub text_disappear: Length,
}

/// Two-phase column wipe: left fills sweep in over the first half of the scroll window,
/// right fills over the second half, with a centered word revealed then wiped away.
#[derive(Clone, Debug)]
pub struct ProgressiveColumns {
    count: usize,
    left_fill: InterpolationTable<Length>,
    right_fill: InterpolationTable<Length>,
    text_reveal: InterpolationTable<Length>,
    text_disappear: InterpolationTable<Length>,
}

impl ProgressiveColumns {
    /// Build `count` columns sharing one set of fill tables.
    pub fn new(count: usize) -> ScrollFxResult<Self> {
        if count == 0 {
            return Err(ScrollFxError::validation(
                "progressive columns need at least one column",
            ));
        }
        let empty = Length::Percent(0.0);
        let full = Length::Percent(100.0);
        Ok(Self {
            count,
            left_fill: InterpolationTable::new(vec![0.0, 0.5], vec![empty, full])?,
            right_fill: InterpolationTable::new(vec![0.5, 1.0], vec![empty, full])?,
            text_reveal: InterpolationTable::new(vec![0.0, 0.5], vec![empty, full])?,
            text_disappear: InterpolationTable::new(vec![0.5, 1.0], vec![full, empty])?,
        })
    }

    /// Number of columns.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sample all fills at `progress`.
    pub fn frame(&self, progress: ScrollProgress) -> ColumnsFrame {
        let left_fill = self.left_fill.map(progress);
        let right_fill = self.right_fill.map(progress);
        ColumnsFrame {
            columns: (0..self.count)
                .map(|i| ColumnFrame {
                    left_fill,
                    right_fill,
                    separator: i + 1 < self.count,
                })
                .collect(),
            text_reveal: self.text_reveal.map(progress),
            text_disappear: self.text_disappear.map(progress),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/columns.rs"]
mod tests;
