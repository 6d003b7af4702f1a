//! Reference movement collaborators.
//!
//! [`PendingMovement`] only collects requests for the current tick.
//! [`FloatingMovement`] also integrates them into a velocity with
//! acceleration and braking, with no gravity and no collision.

use crate::collaborators::MovementSink;
use glam::Vec3;
use pawn_config::MovementConfig;
use tracing::trace;

/// Sum of the movement requests received since the last [`consume`](Self::consume).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendingMovement {
    input: Vec3,
}

impl PendingMovement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests accumulated so far this tick.
    #[must_use]
    pub fn pending(&self) -> Vec3 {
        self.input
    }

    /// Take the accumulated input, leaving zero behind.
    pub fn consume(&mut self) -> Vec3 {
        std::mem::take(&mut self.input)
    }
}

impl MovementSink for PendingMovement {
    fn add_movement_input(&mut self, direction: Vec3, magnitude: f32) {
        if magnitude == 0.0 || !magnitude.is_finite() || !direction.is_finite() {
            return;
        }
        if direction.length_squared() == 0.0 {
            return;
        }
        self.input += direction * magnitude;
    }
}

/// Move `current` toward `target` by at most `max_delta`.
fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let dist = delta.length();
    if dist <= max_delta || dist == 0.0 {
        target
    } else {
        current + delta / dist * max_delta
    }
}

/// Kinematic integrator for a floating pawn.
///
/// Input is clamped to unit length and scaled by `max_speed`; velocity
/// approaches that at `acceleration` and decays to rest at `deceleration`
/// when no input arrives.
#[derive(Debug, Clone)]
pub struct FloatingMovement {
    config: MovementConfig,
    pending: PendingMovement,
    velocity: Vec3,
}

impl FloatingMovement {
    #[must_use]
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            pending: PendingMovement::new(),
            velocity: Vec3::ZERO,
        }
    }

    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[must_use]
    pub fn pending(&self) -> Vec3 {
        self.pending.pending()
    }

    /// Drop pending input and stop immediately.
    pub fn stop(&mut self) {
        self.pending.consume();
        self.velocity = Vec3::ZERO;
    }

    /// Consume this tick's input and return the displacement over `dt` seconds.
    ///
    /// A non-positive or non-finite `dt` returns zero and keeps the input
    /// for the next tick.
    pub fn tick(&mut self, dt: f32) -> Vec3 {
        if !dt.is_finite() || dt <= 0.0 {
            return Vec3::ZERO;
        }

        let input = self.pending.consume().clamp_length_max(1.0);
        let (target, rate) = if input.length_squared() > 0.0 {
            (input * self.config.max_speed, self.config.acceleration)
        } else {
            (Vec3::ZERO, self.config.deceleration)
        };
        self.velocity = move_towards(self.velocity, target, rate * dt);

        let displacement = self.velocity * dt;
        trace!(speed = self.velocity.length(), "movement tick");
        displacement
    }
}

impl MovementSink for FloatingMovement {
    fn add_movement_input(&mut self, direction: Vec3, magnitude: f32) {
        self.pending.add_movement_input(direction, magnitude);
    }
}
