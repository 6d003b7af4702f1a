//! The locomotion and camera controller.
//!
//! Look input is split across two transforms: yaw turns the whole body,
//! pitch tilts only the camera rig. Movement directions are derived from
//! body yaw alone, so looking up or down never tilts the strafe basis.

use crate::collaborators::{BodyTransform, MovementSink, RigTransform};
use crate::rotator::{Rotator, normalize_axis};
use glam::{Vec2, Vec3};
use pawn_config::{ConfigError, ControllerConfig};
use pawn_input::{Action, ActionBindings, TriggerEvent};
use tracing::{debug, trace, warn};

/// Orientation state owned by one controller. Angles are in degrees.
///
/// `pitch_min <= rig_pitch <= pitch_max` holds for every reachable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    body_yaw: f32,
    rig_pitch: f32,
    pitch_min: f32,
    pitch_max: f32,
    arm_length: f32,
}

impl ControllerState {
    /// Build the initial state: yaw 0, rig pitch 0 clamped into range.
    pub fn new(config: &ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            body_yaw: 0.0,
            rig_pitch: 0.0_f32.clamp(config.pitch_min, config.pitch_max),
            pitch_min: config.pitch_min,
            pitch_max: config.pitch_max,
            arm_length: config.arm_length,
        })
    }

    /// Body facing, wrapped into `(-180, 180]`.
    #[must_use]
    pub fn body_yaw(&self) -> f32 {
        self.body_yaw
    }

    #[must_use]
    pub fn rig_pitch(&self) -> f32 {
        self.rig_pitch
    }

    #[must_use]
    pub fn pitch_min(&self) -> f32 {
        self.pitch_min
    }

    #[must_use]
    pub fn pitch_max(&self) -> f32 {
        self.pitch_max
    }

    #[must_use]
    pub fn arm_length(&self) -> f32 {
        self.arm_length
    }

    /// Rotation the rig is given relative to the body.
    #[must_use]
    pub fn rig_rotation(&self) -> Rotator {
        Rotator::from_pitch(self.rig_pitch)
    }

    /// Combined world-space view orientation of the rig.
    #[must_use]
    pub fn view_rotation(&self) -> Rotator {
        Rotator::new(self.rig_pitch, self.body_yaw, 0.0)
    }

    /// Horizontal forward direction of the body.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Rotator::from_yaw(self.body_yaw).forward()
    }

    /// Horizontal right direction of the body.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        Rotator::from_yaw(self.body_yaw).right()
    }

    /// Camera position relative to the pawn origin, at the end of the spring arm.
    #[must_use]
    pub fn camera_offset(&self) -> Vec3 {
        -self.view_rotation().forward() * self.arm_length
    }
}

/// Converts move/look samples into movement requests and orientation updates.
///
/// Collaborators are injected at construction: `M` receives movement
/// requests, `B` is the pawn body, `R` the optional camera rig. Without a rig
/// pitch is still tracked and clamped but never written anywhere.
#[derive(Debug)]
pub struct LocomotionController<M, B, R> {
    state: ControllerState,
    movement: M,
    body: B,
    rig: Option<R>,
}

impl<M, B, R> LocomotionController<M, B, R>
where
    M: MovementSink,
    B: BodyTransform,
    R: RigTransform,
{
    /// Create a controller and push the initial rig rotation.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the pitch range or arm length is invalid.
    pub fn new(
        config: &ControllerConfig,
        movement: M,
        body: B,
        mut rig: Option<R>,
    ) -> Result<Self, ConfigError> {
        let state = ControllerState::new(config)?;
        match rig.as_mut() {
            Some(rig) => rig.set_relative_rotation(state.rig_rotation()),
            None => debug!("no camera rig attached; pitch will not be written"),
        }
        debug!(
            pitch_min = state.pitch_min,
            pitch_max = state.pitch_max,
            arm_length = state.arm_length,
            "controller created"
        );
        Ok(Self {
            state,
            movement,
            body,
            rig,
        })
    }

    /// Register [`apply_move`](Self::apply_move) and
    /// [`apply_look`](Self::apply_look) with an input binding table.
    pub fn setup_player_input(bindings: &mut ActionBindings<Self>) {
        bindings.bind_action(Action::Move, TriggerEvent::Triggered, Self::apply_move);
        bindings.bind_action(Action::Look, TriggerEvent::Triggered, Self::apply_look);
    }

    /// Forward a movement request along the body's forward (`input.y`) and
    /// right (`input.x`) directions. State is not touched.
    pub fn apply_move(&mut self, input: Vec2) {
        let forward = self.state.forward();
        let right = self.state.right();
        self.movement.add_movement_input(forward, input.y);
        self.movement.add_movement_input(right, input.x);
        trace!(forward = input.y, strafe = input.x, yaw = self.state.body_yaw, "move");
    }

    /// Turn the body by `input.x` degrees and tilt the rig by `input.y`
    /// degrees, clamping the rig pitch into the configured range.
    pub fn apply_look(&mut self, input: Vec2) {
        if !input.is_finite() {
            warn!(x = input.x, y = input.y, "ignoring non-finite look sample");
            return;
        }

        self.body.add_local_rotation(Rotator::from_yaw(input.x));
        self.state.body_yaw = normalize_axis(self.state.body_yaw + input.x);

        let requested = self.state.rig_pitch + input.y;
        let pitch = requested.clamp(self.state.pitch_min, self.state.pitch_max);
        if pitch != requested {
            debug!(requested, clamped = pitch, "rig pitch clamped");
        }
        self.state.rig_pitch = pitch;

        if let Some(rig) = self.rig.as_mut() {
            rig.set_relative_rotation(self.state.rig_rotation());
        }
        trace!(yaw = self.state.body_yaw, pitch = self.state.rig_pitch, "look");
    }
}

impl<M, B, R> LocomotionController<M, B, R> {
    #[must_use]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    #[must_use]
    pub fn movement(&self) -> &M {
        &self.movement
    }

    pub fn movement_mut(&mut self) -> &mut M {
        &mut self.movement
    }

    #[must_use]
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable body access for the host, e.g. to apply integrated translation.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    #[must_use]
    pub fn rig(&self) -> Option<&R> {
        self.rig.as_ref()
    }

    /// Mutable rig access. Changes made here are overwritten by the next look.
    pub fn rig_mut(&mut self) -> Option<&mut R> {
        self.rig.as_mut()
    }

    #[must_use]
    pub fn has_rig(&self) -> bool {
        self.rig.is_some()
    }
}
