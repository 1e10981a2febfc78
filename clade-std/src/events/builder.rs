//! Builder for the closed event vocabulary.

use super::{EventSlot, dispatcher::EventDispatcher};
use clade_core::{ConfigurationError, EventKind, STANDARD_EVENTS};
use std::{collections::HashMap, marker::PhantomData};

/// Declares the event names a dispatcher recognizes.
///
/// The vocabulary is fixed once [`build`](Self::build) returns.
pub struct EventDispatcherBuilder<C> {
    events: Vec<(String, EventKind)>,
    _context: PhantomData<fn(&C)>,
}

impl<C: 'static> Default for EventDispatcherBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> EventDispatcherBuilder<C> {
    /// Create a builder with no events declared.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            _context: PhantomData,
        }
    }

    /// Declare an event of the given shape.
    pub fn event(mut self, name: impl Into<String>, kind: EventKind) -> Self {
        self.events.push((name.into(), kind));
        self
    }

    /// Declare a notification event.
    pub fn notification(self, name: impl Into<String>) -> Self {
        self.event(name, EventKind::Notification)
    }

    /// Declare a hook-pair event.
    pub fn hook_pair(self, name: impl Into<String>) -> Self {
        self.event(name, EventKind::HookPair)
    }

    /// Declare `cli:run`, `cli:parse-arguments`, `command:add`,
    /// `command:execute` and `command:not-found`.
    pub fn standard_events(mut self) -> Self {
        let mut standard: Vec<_> = STANDARD_EVENTS
            .entries()
            .map(|(name, kind)| ((*name).to_owned(), *kind))
            .collect();
        standard.sort_by(|a, b| a.0.cmp(&b.0));
        self.events.extend(standard);
        self
    }

    /// Names declared so far, in declaration order.
    pub fn declared(&self) -> impl Iterator<Item = (&str, EventKind)> {
        self.events.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Freeze the vocabulary.
    ///
    /// Declaring the same name twice is a [`ConfigurationError::DuplicateEvent`].
    pub fn build(self) -> Result<EventDispatcher<C>, ConfigurationError> {
        let mut events = HashMap::with_capacity(self.events.len());

        for (name, kind) in self.events {
            if events.contains_key(&name) {
                return Err(ConfigurationError::DuplicateEvent(name));
            }
            events.insert(name, EventSlot::new(kind));
        }

        Ok(EventDispatcher::from_slots(events))
    }
}
