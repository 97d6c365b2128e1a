use crate::{
    animation::ease::Ease,
    counter::label::LabelDescriptor,
    frame::motion::MotionValue,
    frame::scheduler::{FrameScheduler, TaskHandle},
    frame::tween::animate,
    scroll::gate::GateState,
};

/// Timing of a counter's reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CounterConfig {
    /// Animation length in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Curve from current value to target.
    #[serde(default = "default_ease")]
    pub ease: Ease,
}

fn default_duration() -> f64 {
    2.0
}

fn default_ease() -> Ease {
    Ease::EaseOut
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            ease: default_ease(),
        }
    }
}

/// Observable state of one counter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CounterState {
    /// Currently displayed magnitude, floored to an integer.
    pub current_displayed: i64,
    /// Magnitude the counter animates toward.
    pub target_value: f64,
    /// In view while the section gate is armed.
    pub armed: bool,
    /// Composed display string.
    pub text: String,
}

/// Counts a label's magnitude up from zero when it scrolls into view.
///
/// Driven by [`CounterAnimator::sync`] with the host's in-view flag and the section's
/// [`GateState`]:
///
/// | in view | gate     | effect                                          |
/// |---------|----------|-------------------------------------------------|
/// | yes     | armed    | animate from the current value to the target    |
/// | yes     | disarmed | show the target immediately                     |
/// | no      | armed    | reset to `0` so the next entry animates fully   |
/// | no      | disarmed | keep the current value                          |
///
/// Each change of inputs first cancels any in-flight animation.
#[derive(Debug)]
pub struct CounterAnimator {
    label: LabelDescriptor,
    config: CounterConfig,
    value: MotionValue,
    task: Option<TaskHandle>,
    last_inputs: Option<(bool, GateState)>,
}

impl CounterAnimator {
    /// Create a counter for `label`, displaying `0`.
    pub fn new(label: &str, config: CounterConfig) -> Self {
        Self {
            label: LabelDescriptor::parse(label),
            config,
            value: MotionValue::new(0.0),
            task: None,
            last_inputs: None,
        }
    }

    /// Parsed label.
    pub fn label(&self) -> &LabelDescriptor {
        &self.label
    }

    /// Apply the current visibility and gate state.
    pub fn sync(&mut self, scheduler: &mut FrameScheduler, in_view: bool, gate: GateState) {
        if self.last_inputs == Some((in_view, gate)) {
            return;
        }
        self.last_inputs = Some((in_view, gate));
        self.stop();

        match (in_view, gate) {
            (true, GateState::Armed) => self.start(scheduler),
            (true, GateState::Disarmed) => {
                tracing::debug!(target_value = self.label.target(), "counter shows final value");
                self.value.set(self.label.target());
            }
            (false, GateState::Armed) => {
                tracing::debug!("counter reset");
                self.value.set(0.0);
            }
            (false, GateState::Disarmed) => {}
        }
    }

    /// Swap the label; an in-flight animation retargets from its current value.
    pub fn set_label(&mut self, scheduler: &mut FrameScheduler, label: &str) {
        let next = LabelDescriptor::parse(label);
        if next == self.label {
            return;
        }
        self.label = next;
        match self.last_inputs {
            Some((true, GateState::Armed)) => {
                self.stop();
                self.start(scheduler);
            }
            Some((true, GateState::Disarmed)) => self.value.set(self.label.target()),
            _ => {}
        }
    }

    fn start(&mut self, scheduler: &mut FrameScheduler) {
        let target = self.label.target();
        tracing::debug!(
            from = self.value.get(),
            to = target,
            duration = self.config.duration,
            "counter animation started"
        );
        self.task = Some(animate(
            scheduler,
            &self.value,
            target,
            self.config.duration,
            self.config.ease,
        ));
    }

    /// Cancel the in-flight animation, leaving the last sampled value.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    /// Tear down on unmount.
    pub fn unmount(&mut self) {
        self.stop();
        self.last_inputs = None;
    }

    /// `true` while an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.task.as_ref().is_some_and(TaskHandle::is_running)
    }

    /// Raw animated magnitude.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Displayed magnitude, floored to an integer.
    pub fn displayed(&self) -> i64 {
        self.value.get().floor() as i64
    }

    /// Composed display string for the current value.
    pub fn text(&self) -> String {
        self.label.compose(self.value.get())
    }

    /// Snapshot for reporting.
    pub fn state(&self) -> CounterState {
        CounterState {
            current_displayed: self.displayed(),
            target_value: self.label.target(),
            armed: matches!(self.last_inputs, Some((true, GateState::Armed))),
            text: self.text(),
        }
    }
}

impl Drop for CounterAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/counter/animator.rs"]
mod tests;
