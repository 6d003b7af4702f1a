//! Input-source plumbing for the pawn controller.
//!
//! The host normalizes raw devices into two-dimensional samples and feeds
//! them into an [`ActionState`] each frame. Handlers subscribe to named
//! actions through an [`ActionBindings`] table and are dispatched once per
//! frame.

pub mod action;
pub mod bindings;
pub mod modifiers;

pub use action::{ACTIVATION_THRESHOLD, Action, ActionState};
pub use bindings::{ActionBindings, ActionHandler, TriggerEvent};
pub use modifiers::AxisModifiers;
