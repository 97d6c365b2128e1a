use crate::{
    animation::table::InterpolationTable,
    animation::value::Length,
    foundation::core::ScrollProgress,
    foundation::error::{ScrollFxError, ScrollFxResult},
};

/// Tolerance when checking that caller partitions are contiguous.
const PARTITION_EPS: f64 = 1e-9;

/// One card/image in a reveal stack.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayeredCard {
    /// Stable identity reported back in frames.
    pub id: String,
    /// Opaque content reference (image URL, markup key, ...).
    #[serde(default)]
    pub content: String,
}

/// Configuration of a [`RevealStack`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealStackConfig {
    /// Distance a layer travels upward to fully exit.
    #[serde(default = "default_exit_offset")]
    pub exit_offset: Length,
    /// Per-layer exit sub-ranges for all but the last layer. Equal split when absent.
    #[serde(default)]
    pub partition: Option<Vec<[f64; 2]>>,
    /// Entry-progress window over which the overlay goes from covering to revealed.
    #[serde(default = "default_overlay_window")]
    pub overlay_window: [f64; 2],
}

fn default_exit_offset() -> Length {
    Length::Percent(100.0)
}

fn default_overlay_window() -> [f64; 2] {
    [0.0, 1.0]
}

impl Default for RevealStackConfig {
    fn default() -> Self {
        Self {
            exit_offset: default_exit_offset(),
            partition: None,
            overlay_window: default_overlay_window(),
        }
    }
}

/// Per-layer output of [`RevealStack::frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerFrame {
    /// Card identity.
    pub id: String,
    /// Vertical translation; `0` at rest, `-exit_offset` when fully exited.
    pub offset_y: Length,
    /// Progress through this layer's own exit sub-range.
    pub exit_progress: f64,
    /// Stacking order; higher renders on top.
    pub z_index: i32,
}

/// Occluding overlay state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayFrame {
    /// `1` fully covering, `0` fully revealed.
    pub coverage: f64,
    /// Overlay height as a share of the stack.
    pub height: Length,
    /// Overlay opacity.
    pub opacity: f64,
}

/// Output of [`RevealStack::frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealFrame {
    /// Layers in stack order, first layer first.
    pub layers: Vec<LayerFrame>,
    /// Overlay covering the stack while it enters view.
    pub overlay: OverlayFrame,
}

/// Ordered layers that exit upward one after another as scroll progress advances.
///
/// Layer `i` of `N` exits linearly over its own sub-range, resting before it and fully
/// exited after it. The last layer never exits and sits at the bottom of the stack; the
/// first layer exits earliest and sits on top.
#[derive(Clone, Debug)]
pub struct RevealStack {
    cards: Vec<LayeredCard>,
    ranges: Vec<[f64; 2]>,
    exits: Vec<InterpolationTable<Length>>,
    rest: Length,
    overlay: InterpolationTable<f64>,
}

impl RevealStack {
    /// Build a stack; rejects empty stacks and malformed partitions.
    pub fn new(cards: Vec<LayeredCard>, config: RevealStackConfig) -> ScrollFxResult<Self> {
        if cards.is_empty() {
            return Err(ScrollFxError::validation(
                "reveal stack needs at least one layer",
            ));
        }
        let exiting = cards.len() - 1;
        let ranges = match config.partition {
            Some(p) => {
                validate_partition(&p, exiting)?;
                p
            }
            None => equal_partition(exiting),
        };

        let rest = match config.exit_offset {
            Length::Px(_) => Length::Px(0.0),
            Length::Percent(_) => Length::Percent(0.0),
        };
        let exited = match config.exit_offset {
            Length::Px(v) => Length::Px(-v),
            Length::Percent(v) => Length::Percent(-v),
        };
        let exits = ranges
            .iter()
            .map(|&[start, end]| InterpolationTable::new(vec![start, end], vec![rest, exited]))
            .collect::<ScrollFxResult<Vec<_>>>()?;

        let [o0, o1] = config.overlay_window;
        let overlay = InterpolationTable::new(vec![o0, o1], vec![1.0, 0.0])
            .map_err(|e| ScrollFxError::validation(format!("overlay window: {e}")))?;

        Ok(Self {
            cards,
            ranges,
            exits,
            rest,
            overlay,
        })
    }

    /// Layers in stack order.
    pub fn cards(&self) -> &[LayeredCard] {
        &self.cards
    }

    /// Exit sub-ranges, one per exiting layer.
    pub fn ranges(&self) -> &[[f64; 2]] {
        &self.ranges
    }

    /// Sample every layer at `progress` and the overlay at `entry`.
    pub fn frame(&self, progress: ScrollProgress, entry: ScrollProgress) -> RevealFrame {
        let p = progress.get();
        let n = self.cards.len();
        let layers = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let (offset_y, exit_progress) = match (self.exits.get(i), self.ranges.get(i)) {
                    (Some(table), Some(&[start, end])) => {
                        (table.map(p), ((p - start) / (end - start)).clamp(0.0, 1.0))
                    }
                    _ => (self.rest, 0.0),
                };
                LayerFrame {
                    id: card.id.clone(),
                    offset_y,
                    exit_progress,
                    z_index: (n - i) as i32,
                }
            })
            .collect();

        let coverage = self.overlay.map(entry);
        RevealFrame {
            layers,
            overlay: OverlayFrame {
                coverage,
                height: Length::Percent(coverage * 100.0),
                opacity: coverage,
            },
        }
    }
}

fn equal_partition(parts: usize) -> Vec<[f64; 2]> {
    let step = 1.0 / parts.max(1) as f64;
    (0..parts)
        .map(|i| {
            let start = i as f64 * step;
            let end = if i + 1 == parts {
                1.0
            } else {
                (i + 1) as f64 * step
            };
            [start, end]
        })
        .collect()
}

fn validate_partition(ranges: &[[f64; 2]], expected: usize) -> ScrollFxResult<()> {
    if ranges.len() != expected {
        return Err(ScrollFxError::table(format!(
            "partition has {} ranges, expected {expected}",
            ranges.len()
        )));
    }
    for (i, &[start, end]) in ranges.iter().enumerate() {
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start >= end {
            return Err(ScrollFxError::table(format!(
                "partition range {i} [{start}, {end}] must be increasing within [0, 1]"
            )));
        }
    }
    for (i, w) in ranges.windows(2).enumerate() {
        if (w[0][1] - w[1][0]).abs() > PARTITION_EPS {
            return Err(ScrollFxError::table(format!(
                "partition ranges {i} and {} are not contiguous",
                i + 1
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/components/reveal_stack.rs"]
mod tests;
