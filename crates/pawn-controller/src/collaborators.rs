//! Seams between the controller and the host's movement and scene systems.

use crate::rotator::Rotator;
use glam::Vec3;

/// Accepts movement requests and integrates them elsewhere.
///
/// Several requests may arrive within one tick; the sink combines them.
pub trait MovementSink {
    /// Request movement of `magnitude` along the world-space unit `direction`.
    fn add_movement_input(&mut self, direction: Vec3, magnitude: f32);
}

/// The pawn body's transform. The controller only ever adds to it.
pub trait BodyTransform {
    /// Compose `delta` onto the current rotation in local space.
    fn add_local_rotation(&mut self, delta: Rotator);
}

/// The camera rig's transform. The controller only ever overwrites it.
pub trait RigTransform {
    /// Replace the rig's rotation relative to its parent.
    fn set_relative_rotation(&mut self, rotation: Rotator);
}

impl<T: MovementSink + ?Sized> MovementSink for &mut T {
    fn add_movement_input(&mut self, direction: Vec3, magnitude: f32) {
        (**self).add_movement_input(direction, magnitude);
    }
}

impl<T: BodyTransform + ?Sized> BodyTransform for &mut T {
    fn add_local_rotation(&mut self, delta: Rotator) {
        (**self).add_local_rotation(delta);
    }
}

impl<T: RigTransform + ?Sized> RigTransform for &mut T {
    fn set_relative_rotation(&mut self, rotation: Rotator) {
        (**self).set_relative_rotation(rotation);
    }
}
