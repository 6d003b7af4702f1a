//! Subscription table connecting actions to handler functions.
//!
//! A target registers plain method pointers for the actions it cares about;
//! the host calls [`ActionBindings::dispatch`] once per frame after filling
//! the [`ActionState`].

use crate::action::{Action, ActionState};
use glam::Vec2;
use tracing::trace;

/// When a bound handler fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// Every frame the action has a nonzero value.
    Triggered,
    /// Only the first frame the action is active.
    Started,
    /// Only the first frame after the action stops; receives the last active value.
    Completed,
}

/// Handler invoked with the target and the action value.
pub type ActionHandler<T> = fn(&mut T, Vec2);

struct Binding<T> {
    action: Action,
    trigger: TriggerEvent,
    handler: ActionHandler<T>,
}

/// Ordered table of `(action, trigger, handler)` registrations for one target type.
pub struct ActionBindings<T> {
    bindings: Vec<Binding<T>>,
}

impl<T> Default for ActionBindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ActionBindings<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.bindings.iter().map(|b| (b.action, b.trigger)))
            .finish()
    }
}

impl<T> ActionBindings<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Register `handler` for `action`. Handlers run in registration order.
    pub fn bind_action(
        &mut self,
        action: Action,
        trigger: TriggerEvent,
        handler: ActionHandler<T>,
    ) {
        self.bindings.push(Binding {
            action,
            trigger,
            handler,
        });
    }

    /// Drop every registration for `action`.
    pub fn unbind_action(&mut self, action: Action) {
        self.bindings.retain(|b| b.action != action);
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether any handler is registered for `action`.
    #[must_use]
    pub fn is_bound(&self, action: Action) -> bool {
        self.bindings.iter().any(|b| b.action == action)
    }

    /// Fire every handler whose trigger condition holds this frame.
    ///
    /// Returns how many handlers ran.
    pub fn dispatch(&self, state: &ActionState, target: &mut T) -> usize {
        let mut fired = 0;
        for binding in &self.bindings {
            let value = match binding.trigger {
                TriggerEvent::Triggered if state.is_triggered(binding.action) => {
                    state.value(binding.action)
                }
                TriggerEvent::Started if state.just_activated(binding.action) => {
                    state.value(binding.action)
                }
                TriggerEvent::Completed if state.just_deactivated(binding.action) => {
                    state.previous_value(binding.action)
                }
                _ => continue,
            };
            trace!(
                action = %binding.action,
                trigger = ?binding.trigger,
                x = value.x,
                y = value.y,
                "dispatch"
            );
            (binding.handler)(target, value);
            fired += 1;
        }
        fired
    }
}
