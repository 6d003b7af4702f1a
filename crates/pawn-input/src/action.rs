//! Named two-dimensional actions and their per-frame state.
//!
//! [`ActionState`] holds the value every [`Action`] had this frame and the
//! frame before, so handlers can react to the action being held, starting,
//! or ending.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Length below which an action value is considered inactive.
pub const ACTIVATION_THRESHOLD: f32 = 0.001;

/// Logical actions delivered to the pawn.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Locomotion intent: `x` strafes, `y` moves forward/back.
    Move,
    /// Camera intent: `x` turns the body, `y` tilts the camera rig.
    Look,
}

impl Action {
    /// Every action, in dispatch order.
    pub const ALL: [Action; 2] = [Action::Move, Action::Look];

    /// Stable lowercase name used in logs and scripts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Look => "look",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_active(v: Vec2) -> bool {
    v.length() > ACTIVATION_THRESHOLD
}

/// Per-frame action values with edge detection.
#[derive(Debug, Clone, Default)]
pub struct ActionState {
    /// Current frame values.
    values: HashMap<Action, Vec2>,
    /// Previous frame values.
    prev_values: HashMap<Action, Vec2>,
}

impl ActionState {
    /// Create an empty action state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: current values become previous, current is cleared.
    pub fn begin_frame(&mut self) {
        self.prev_values.clone_from(&self.values);
        self.values.clear();
    }

    /// Add a sample to this frame's value for `action`.
    ///
    /// Several samples in one frame (e.g. multiple mouse deltas) are summed.
    pub fn accumulate(&mut self, action: Action, sample: Vec2) {
        *self.values.entry(action).or_insert(Vec2::ZERO) += sample;
    }

    /// This frame's value, or zero when nothing was recorded.
    #[must_use]
    pub fn value(&self, action: Action) -> Vec2 {
        self.values.get(&action).copied().unwrap_or(Vec2::ZERO)
    }

    /// Last frame's value, or zero when nothing was recorded.
    #[must_use]
    pub fn previous_value(&self, action: Action) -> Vec2 {
        self.prev_values.get(&action).copied().unwrap_or(Vec2::ZERO)
    }

    /// Whether the action received any nonzero value this frame.
    #[must_use]
    pub fn is_triggered(&self, action: Action) -> bool {
        self.value(action) != Vec2::ZERO
    }

    /// Whether the action's value is above the activation threshold.
    #[must_use]
    pub fn is_active(&self, action: Action) -> bool {
        is_active(self.value(action))
    }

    /// True only on the frame the action went from inactive to active.
    #[must_use]
    pub fn just_activated(&self, action: Action) -> bool {
        self.is_active(action) && !is_active(self.previous_value(action))
    }

    /// True only on the frame the action went from active to inactive.
    #[must_use]
    pub fn just_deactivated(&self, action: Action) -> bool {
        !self.is_active(action) && is_active(self.previous_value(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecorded_action_is_zero_and_inactive() {
        let state = ActionState::new();
        assert_eq!(state.value(Action::Move), Vec2::ZERO);
        assert!(!state.is_active(Action::Look));
    }

    #[test]
    fn test_samples_accumulate_within_frame() {
        let mut state = ActionState::new();
        state.begin_frame();
        state.accumulate(Action::Look, Vec2::new(2.0, 1.0));
        state.accumulate(Action::Look, Vec2::new(3.0, -4.0));
        assert_eq!(state.value(Action::Look), Vec2::new(5.0, -3.0));
    }

    #[test]
    fn test_begin_frame_clears_current() {
        let mut state = ActionState::new();
        state.accumulate(Action::Move, Vec2::Y);
        state.begin_frame();
        assert_eq!(state.value(Action::Move), Vec2::ZERO);
        assert_eq!(state.previous_value(Action::Move), Vec2::Y);
    }

    #[test]
    fn test_just_activated_edge() {
        let mut state = ActionState::new();

        state.begin_frame();
        state.accumulate(Action::Move, Vec2::Y);
        assert!(state.just_activated(Action::Move));

        state.begin_frame();
        state.accumulate(Action::Move, Vec2::Y);
        assert!(!state.just_activated(Action::Move));
        assert!(state.is_active(Action::Move));
    }

    #[test]
    fn test_just_deactivated_edge() {
        let mut state = ActionState::new();
        state.begin_frame();
        state.accumulate(Action::Look, Vec2::X);

        state.begin_frame();
        assert!(state.just_deactivated(Action::Look));

        state.begin_frame();
        assert!(!state.just_deactivated(Action::Look));
    }

    #[test]
    fn test_tiny_value_below_threshold_is_inactive() {
        let mut state = ActionState::new();
        state.accumulate(Action::Move, Vec2::splat(ACTIVATION_THRESHOLD * 0.1));
        assert!(!state.is_active(Action::Move));
        assert!(state.is_triggered(Action::Move));
    }

    #[test]
    fn test_cancelling_samples_are_not_triggered() {
        let mut state = ActionState::new();
        state.accumulate(Action::Look, Vec2::new(1.0, 0.0));
        state.accumulate(Action::Look, Vec2::new(-1.0, 0.0));
        assert!(!state.is_triggered(Action::Look));
    }

    #[test]
    fn test_action_display_names() {
        assert_eq!(Action::Move.to_string(), "move");
        assert_eq!(Action::Look.to_string(), "look");
    }

    #[test]
    fn test_action_deserializes_from_ron() {
        let action: Action = ron::from_str("Look").unwrap();
        assert_eq!(action, Action::Look);
    }
}
