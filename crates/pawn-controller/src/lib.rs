//! Third-person locomotion and camera controller.
//!
//! [`LocomotionController`] turns "move" samples into world-space movement
//! requests and "look" samples into body yaw plus a clamped camera-rig pitch.
//! Movement integration and the scene graph are external collaborators
//! injected at construction through the traits in [`collaborators`].

pub mod collaborators;
pub mod controller;
pub mod movement;
pub mod rotator;
pub mod scene;

pub use collaborators::{BodyTransform, MovementSink, RigTransform};
pub use controller::{ControllerState, LocomotionController};
pub use movement::{FloatingMovement, PendingMovement};
pub use rotator::{Rotator, normalize_axis};
pub use scene::SceneNode;
