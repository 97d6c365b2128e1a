/// Default scroll offset below which a disarmed gate re-arms.
pub const DEFAULT_NEAR_TOP_THRESHOLD: f64 = 100.0;

/// Whether counters in a section should play their entry animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    /// Counters animate on their next entry into view.
    Armed,
    /// Counters show their final value without animating.
    Disarmed,
}

impl GateState {
    /// `true` for [`GateState::Armed`].
    pub fn is_armed(self) -> bool {
        matches!(self, Self::Armed)
    }
}

/// Discrete state change emitted by [`AnimateGate::on_scroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GateTransition {
    /// State before the scroll event.
    pub from: GateState,
    /// State after the scroll event.
    pub to: GateState,
}

/// Per-section "should animate" state machine.
///
/// Starts armed, disarms once the scroll offset passes the section's bottom edge, and
/// re-arms once the scroll offset returns above the near-top threshold. The scroll
/// listener is the only writer; the resulting transitions are forwarded explicitly to
/// the section's counters.
#[derive(Clone, Debug)]
pub struct AnimateGate {
    state: GateState,
    near_top_threshold: f64,
}

impl AnimateGate {
    /// Create an armed gate.
    pub fn new(near_top_threshold: f64) -> Self {
        Self {
            state: GateState::Armed,
            near_top_threshold,
        }
    }

    /// Current state.
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Threshold used for re-arming.
    pub fn near_top_threshold(&self) -> f64 {
        self.near_top_threshold
    }

    /// Feed one scroll notification.
    pub fn on_scroll(&mut self, scroll_y: f64, section_bottom: f64) -> Option<GateTransition> {
        let next = match self.state {
            GateState::Armed if scroll_y > section_bottom => GateState::Disarmed,
            GateState::Disarmed if scroll_y < self.near_top_threshold => GateState::Armed,
            _ => return None,
        };
        let transition = GateTransition {
            from: self.state,
            to: next,
        };
        self.state = next;
        tracing::debug!(?transition, scroll_y, section_bottom, "animate gate transition");
        Some(transition)
    }
}

impl Default for AnimateGate {
    fn default() -> Self {
        Self::new(DEFAULT_NEAR_TOP_THRESHOLD)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/gate.rs"]
mod tests;
