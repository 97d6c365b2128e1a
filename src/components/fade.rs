use crate::{
    animation::ease::Ease,
    frame::motion::MotionValue,
    frame::scheduler::{FrameScheduler, TaskHandle},
    frame::tween::animate,
};

/// Timing and travel of an [`InViewFade`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Transition length in seconds, used for both entry and exit.
    pub duration: f64,
    /// Curve of the transition.
    pub ease: Ease,
    /// Downward offset in pixels while hidden.
    pub offset_y: f64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            duration: 0.8,
            ease: Ease::EaseOut,
            offset_y: 20.0,
        }
    }
}

/// Sampled style of a fading element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FadeFrame {
    /// `0.0` hidden, `1.0` fully shown.
    pub opacity: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

/// Fades an element up into place whenever it enters view and back out when it leaves.
#[derive(Debug)]
pub struct InViewFade {
    config: FadeConfig,
    shown: MotionValue,
    task: Option<TaskHandle>,
    in_view: Option<bool>,
}

impl InViewFade {
    /// Hidden fade that waits for its first [`InViewFade::sync`].
    pub fn new(config: FadeConfig) -> Self {
        Self {
            config,
            shown: MotionValue::new(0.0),
            task: None,
            in_view: None,
        }
    }

    /// Start the entry or exit transition when `in_view` flips.
    pub fn sync(&mut self, scheduler: &mut FrameScheduler, in_view: bool) {
        if self.in_view == Some(in_view) {
            return;
        }
        self.in_view = Some(in_view);
        self.stop();
        let to = if in_view { 1.0 } else { 0.0 };
        if self.shown.get() == to {
            return;
        }
        tracing::trace!(in_view, from = self.shown.get(), "fade transition");
        self.task = Some(animate(
            scheduler,
            &self.shown,
            to,
            self.config.duration,
            self.config.ease,
        ));
    }

    /// Cancel the running transition.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    /// Whether a transition is still running.
    pub fn is_animating(&self) -> bool {
        self.task.as_ref().is_some_and(TaskHandle::is_running)
    }

    /// Current style.
    pub fn frame(&self) -> FadeFrame {
        let t = self.shown.get();
        FadeFrame {
            opacity: t,
            y: self.config.offset_y * (1.0 - t),
        }
    }
}

impl Drop for InViewFade {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/fade.rs"]
mod tests;
