use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MotionCell {
    value: Cell<f64>,
    version: Cell<u64>,
}

/// Shared animated scalar.
///
/// Clones observe the same value. Every write that changes the value bumps a version
/// counter, so readers can skip re-composing output when nothing moved.
#[derive(Clone, Debug, Default)]
pub struct MotionValue {
    inner: Rc<MotionCell>,
}

impl MotionValue {
    /// Create a value holding `initial`.
    pub fn new(initial: f64) -> Self {
        let this = Self::default();
        this.inner.value.set(initial);
        this
    }

    /// Current value.
    pub fn get(&self) -> f64 {
        self.inner.value.get()
    }

    /// Write `v`; bumps the version only when the value changes.
    pub fn set(&self, v: f64) {
        if self.inner.value.get() != v {
            self.inner.value.set(v);
            self.inner.version.set(self.inner.version.get().wrapping_add(1));
        }
    }

    /// Change counter.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }
}
