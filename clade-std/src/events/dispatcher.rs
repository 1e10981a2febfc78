//! Binding and firing.

use super::{BoxListener, EventSlot, builder::EventDispatcherBuilder};
use clade_core::{
    ConfigurationError, DispatchError, EventArgs, EventKind, Listener, ListenerResult, Phase,
    STANDARD_EVENTS,
};
use std::{collections::HashMap, fmt};

/// The outcome of a notification fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FireResult {
    /// Whether a listener cancelled the dispatch.
    pub cancelled: bool,
    /// How many listeners ran, the cancelling one included.
    pub invoked: usize,
}

impl FireResult {
    /// Every listener ran.
    pub const fn completed(invoked: usize) -> Self {
        Self {
            cancelled: false,
            invoked,
        }
    }

    /// A listener cancelled after `invoked` listeners ran.
    pub const fn cancelled(invoked: usize) -> Self {
        Self {
            cancelled: true,
            invoked,
        }
    }
}

/// A named-event bus over a fixed vocabulary.
///
/// Listeners receive the application context by shared reference; the main
/// action of a hook-pair event receives it mutably.
pub struct EventDispatcher<C> {
    events: HashMap<String, EventSlot<C>>,
}

impl<C: 'static> EventDispatcher<C> {
    /// Start declaring a vocabulary.
    pub fn builder() -> EventDispatcherBuilder<C> {
        EventDispatcherBuilder::new()
    }

    /// A dispatcher with the standard vocabulary only.
    pub fn standard() -> Self {
        let events = STANDARD_EVENTS
            .entries()
            .map(|(name, kind)| ((*name).to_owned(), EventSlot::new(*kind)))
            .collect();
        Self::from_slots(events)
    }

    pub(super) fn from_slots(events: HashMap<String, EventSlot<C>>) -> Self {
        Self { events }
    }

    /// Check if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// The shape `name` was declared with.
    pub fn kind(&self, name: &str) -> Option<EventKind> {
        self.events.get(name).map(EventSlot::kind)
    }

    /// Every declared name, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    /// Number of listeners bound to `name`, both phases counted.
    pub fn listener_count(&self, name: &str) -> usize {
        self.events.get(name).map_or(0, EventSlot::len)
    }

    /// Bind `listener` to the notification event `name`.
    ///
    /// Returns `false`, binding nothing, when `name` is undeclared or is a
    /// hook-pair event.
    pub fn bind<L: Listener<C>>(&mut self, name: &str, listener: L) -> bool {
        match self.events.get_mut(name) {
            Some(EventSlot::Notification(listeners)) => {
                listeners.push(Box::new(listener));
                true
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(event = %name, "ignoring binding to a non-notification event");
                false
            }
        }
    }

    /// Bind `listener` to one phase of the hook-pair event `name`.
    ///
    /// The phase list is created on first use. Returns `false`, binding
    /// nothing, when `name` is undeclared or is a notification event.
    pub fn bind_phase<L: Listener<C>>(&mut self, phase: Phase, name: &str, listener: L) -> bool {
        match self.events.get_mut(name) {
            Some(EventSlot::HookPair { before, after }) => {
                let list = match phase {
                    Phase::Before => before,
                    Phase::After => after,
                };
                list.get_or_insert_with(Vec::new).push(Box::new(listener));
                true
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(event = %name, %phase, "ignoring binding to a non-hook-pair event");
                false
            }
        }
    }

    fn slot(&self, name: &str) -> Result<&EventSlot<C>, ConfigurationError> {
        self.events
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownEvent(name.to_owned()))
    }

    /// Fire the notification event `name`.
    ///
    /// Listeners run in binding order; the first one to cancel stops the
    /// dispatch. A listener error aborts the fire.
    pub fn fire(
        &self,
        name: &str,
        ctx: &C,
        args: &EventArgs<C>,
    ) -> Result<FireResult, DispatchError> {
        let listeners = match self.slot(name)? {
            EventSlot::Notification(listeners) => listeners,
            other => return Err(mismatch(name, EventKind::Notification, other).into()),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(event = %name, listeners = listeners.len(), "firing notification");

        for (index, listener) in listeners.iter().enumerate() {
            if run_listener(name, listener, ctx, args)?.is_cancel() {
                #[cfg(feature = "tracing")]
                tracing::debug!(event = %name, listener = index, "notification stopped");
                return Ok(FireResult::cancelled(index + 1));
            }
        }

        Ok(FireResult::completed(listeners.len()))
    }

    /// Fire the hook-pair event `name` around `main`.
    ///
    /// Runs the `before` listeners; if none cancels, runs `main` and then the
    /// `after` listeners, whose results are ignored. Returns `Ok(None)` when
    /// the dispatch was cancelled and `main` never ran.
    ///
    /// Errors from a listener or from `main` abort the fire; pending `after`
    /// listeners do not run.
    pub fn fire_hooked<T, E, F>(
        &self,
        name: &str,
        ctx: &mut C,
        args: &EventArgs<C>,
        main: F,
    ) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut C) -> Result<T, E>,
        E: From<DispatchError>,
    {
        let (before, after) = match self.slot(name).map_err(DispatchError::from)? {
            EventSlot::HookPair { before, after } => (before, after),
            other => {
                let err = mismatch(name, EventKind::HookPair, other);
                return Err(DispatchError::from(err).into());
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(event = %name, "firing hook pair");

        for listener in before.iter().flatten() {
            if run_listener(name, listener, ctx, args)?.is_cancel() {
                #[cfg(feature = "tracing")]
                tracing::debug!(event = %name, "cancelled by before listener");
                return Ok(None);
            }
        }

        let output = main(&mut *ctx)?;

        for listener in after.iter().flatten() {
            run_listener(name, listener, ctx, args)?;
        }

        Ok(Some(output))
    }
}

fn mismatch<C: 'static>(
    name: &str,
    expected: EventKind,
    slot: &EventSlot<C>,
) -> ConfigurationError {
    ConfigurationError::ShapeMismatch {
        event: name.to_owned(),
        expected,
        actual: slot.kind(),
    }
}

fn run_listener<C: 'static>(
    name: &str,
    listener: &BoxListener<C>,
    ctx: &C,
    args: &EventArgs<C>,
) -> Result<ListenerResult, DispatchError> {
    listener
        .on_event(ctx, args)
        .map_err(|source| DispatchError::Listener {
            event: name.to_owned(),
            source,
        })
}

impl<C: 'static> fmt::Debug for EventDispatcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, slot) in &self.events {
            map.entry(name, &(slot.kind(), slot.len()));
        }
        map.finish()
    }
}
