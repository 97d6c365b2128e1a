use crate::{
    animation::ease::Ease,
    frame::motion::MotionValue,
    frame::scheduler::{FrameScheduler, TaskHandle, TaskStatus},
};

/// Time-based interpolation between two scalars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Value at elapsed `0`.
    pub from: f64,
    /// Value once `duration` has elapsed.
    pub to: f64,
    /// Length in seconds.
    pub duration: f64,
    /// Curve applied to normalized time.
    pub ease: Ease,
}

impl Tween {
    /// Value after `elapsed` seconds.
    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.is_done(elapsed) {
            return self.to;
        }
        let t = (elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    /// Whether `elapsed` seconds cover the whole tween.
    pub fn is_done(&self, elapsed: f64) -> bool {
        self.duration.is_nan() || self.duration <= 0.0 || elapsed >= self.duration
    }
}

/// Drive `value` from its current value to `to` over `duration` seconds.
///
/// The first frame after spawning establishes the start time. The task writes `to`
/// exactly on its last frame; cancelling it leaves the last written value in place.
/// A non-positive `duration` writes `to` immediately and returns a finished handle.
pub fn animate(
    scheduler: &mut FrameScheduler,
    value: &MotionValue,
    to: f64,
    duration: f64,
    ease: Ease,
) -> TaskHandle {
    let tween = Tween {
        from: value.get(),
        to,
        duration,
        ease,
    };
    if tween.is_done(0.0) {
        value.set(to);
        return TaskHandle::finished(scheduler.alloc_id());
    }

    let target = value.clone();
    let mut start: Option<f64> = None;
    scheduler.spawn(move |time| {
        let start = *start.get_or_insert(time.now);
        let elapsed = time.now - start;
        target.set(tween.sample(elapsed));
        if tween.is_done(elapsed) {
            TaskStatus::Done
        } else {
            TaskStatus::Continue
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/frame/tween.rs"]
mod tests;
