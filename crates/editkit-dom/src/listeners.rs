//! Event Listeners
//!
//! Per-element listener bindings with deduplication and bulk unbinding.

use std::collections::HashMap;

use crate::EventType;

/// Event handler identifier, owned by whoever bound it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub u64);

/// Listener bindings by target element id and event type
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    handlers: HashMap<(String, EventType), Vec<HandlerId>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler. Returns false if the same handler is already bound.
    pub fn add_listener(&mut self, target: &str, event_type: EventType, handler: HandlerId) -> bool {
        let bound = self
            .handlers
            .entry((target.to_string(), event_type))
            .or_default();

        if bound.contains(&handler) {
            return false;
        }
        bound.push(handler);
        tracing::trace!("bound {} handler {:?} on #{}", event_type, handler, target);
        true
    }

    /// Unbind every handler on `target`, returns how many were removed
    pub fn remove_all(&mut self, target: &str) -> usize {
        let mut removed = 0;
        self.handlers.retain(|(t, _), bound| {
            if t == target {
                removed += bound.len();
                false
            } else {
                true
            }
        });
        removed
    }

    /// Handlers bound for an event, in binding order
    pub fn handlers(&self, target: &str, event_type: EventType) -> &[HandlerId] {
        self.handlers
            .get(&(target.to_string(), event_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_listener(&self, target: &str, event_type: EventType) -> bool {
        !self.handlers(target, event_type).is_empty()
    }

    /// Number of handlers bound on `target` across event types
    pub fn listener_count(&self, target: &str) -> usize {
        self.handlers
            .iter()
            .filter(|((t, _), _)| t == target)
            .map(|(_, bound)| bound.len())
            .sum()
    }
}
