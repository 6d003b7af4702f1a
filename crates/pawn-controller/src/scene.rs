//! Minimal scene-graph node usable as either the pawn body or its camera rig.

use crate::collaborators::{BodyTransform, RigTransform};
use crate::rotator::Rotator;
use glam::{Mat4, Vec3};

/// Translation plus orientation relative to the node's parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneNode {
    pub translation: Vec3,
    pub rotation: Rotator,
}

impl SceneNode {
    #[must_use]
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Rotator::ZERO,
        }
    }

    /// Local-to-parent transform.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation.to_quat(), self.translation)
    }
}

impl BodyTransform for SceneNode {
    fn add_local_rotation(&mut self, delta: Rotator) {
        let q = (self.rotation.to_quat() * delta.to_quat()).normalize();
        self.rotation = Rotator::from_quat(q);
    }
}

impl RigTransform for SceneNode {
    fn set_relative_rotation(&mut self, rotation: Rotator) {
        self.rotation = rotation;
    }
}
