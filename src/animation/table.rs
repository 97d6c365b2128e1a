use crate::{
    animation::ease::Ease,
    animation::lerp::Lerp,
    foundation::error::{ScrollFxError, ScrollFxResult},
};

/// Piecewise-linear map from a progress scalar to a style value.
///
/// Inputs are strictly increasing breakpoints; `outputs[i]` is the value at `inputs[i]`.
/// Lookups below the first or above the last breakpoint clamp to the endpoint value.
/// Tables are immutable once built.
#[derive(Clone, Debug, serde::Serialize)]
pub struct InterpolationTable<T> {
    inputs: Vec<f64>,
    outputs: Vec<T>,
    ease: Ease,
}

impl<T> InterpolationTable<T>
where
    T: Lerp + Clone,
{
    /// Build a validated table.
    ///
    /// Rejects tables with fewer than two entries, mismatched lengths, non-finite or
    /// non-increasing breakpoints, and outputs that cannot interpolate with each other.
    pub fn new(inputs: Vec<f64>, outputs: Vec<T>) -> ScrollFxResult<Self> {
        if inputs.len() != outputs.len() {
            return Err(ScrollFxError::table(format!(
                "table has {} breakpoints but {} outputs",
                inputs.len(),
                outputs.len()
            )));
        }
        if inputs.len() < 2 {
            return Err(ScrollFxError::table(
                "table needs at least two breakpoints",
            ));
        }
        if let Some(bad) = inputs.iter().find(|v| !v.is_finite()) {
            return Err(ScrollFxError::table(format!(
                "table breakpoint {bad} is not finite"
            )));
        }
        if !inputs.windows(2).all(|w| w[0] < w[1]) {
            return Err(ScrollFxError::table(
                "table breakpoints must be strictly increasing",
            ));
        }
        if !outputs.windows(2).all(|w| w[0].is_compatible(&w[1])) {
            return Err(ScrollFxError::table(
                "table outputs must share one unit",
            ));
        }
        Ok(Self {
            inputs,
            outputs,
            ease: Ease::Linear,
        })
    }

    /// Build a table from `(breakpoint, value)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, T)>) -> ScrollFxResult<Self> {
        let (inputs, outputs) = pairs.into_iter().unzip();
        Self::new(inputs, outputs)
    }

    /// Two-point table over `[0, 1]`.
    pub fn span(from: T, to: T) -> ScrollFxResult<Self> {
        Self::new(vec![0.0, 1.0], vec![from, to])
    }

    /// Apply `ease` inside every segment.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Breakpoints in ascending order.
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Output values matching [`Self::inputs`].
    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    /// Map `progress` through the table.
    pub fn map(&self, progress: impl Into<f64>) -> T {
        let p = progress.into();
        let last = self.inputs.len() - 1;
        if p.is_nan() || p <= self.inputs[0] {
            return self.outputs[0].clone();
        }
        if p >= self.inputs[last] {
            return self.outputs[last].clone();
        }

        // First breakpoint strictly greater than `p`; always in 1..=last here.
        let idx = self.inputs.partition_point(|&x| x <= p);
        let (a, b) = (idx - 1, idx);
        let t = (p - self.inputs[a]) / (self.inputs[b] - self.inputs[a]);
        T::lerp(&self.outputs[a], &self.outputs[b], self.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/table.rs"]
mod tests;
