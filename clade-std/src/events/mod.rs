//! # Event Dispatcher
//!
//! A named-event bus with a closed vocabulary. Every event name is declared
//! once through [`EventDispatcherBuilder`] with one of two shapes:
//!
//! | Shape | Fire with | Cancel means |
//! |-------|-----------|--------------|
//! | Notification | [`EventDispatcher::fire`] | later listeners are skipped |
//! | Hook pair | [`EventDispatcher::fire_hooked`] | main action and `after` phase are skipped |
//!
//! Binding is lenient: binding to an undeclared event, or with the wrong
//! form for its shape, does nothing. Firing is strict: an undeclared or
//! mis-shaped fire is a [`ConfigurationError`](clade_core::ConfigurationError).
//!
//! # Example
//!
//! ```rust
//! use clade_core::{EventArgs, Phase};
//! use clade_std::events::EventDispatcher;
//!
//! let mut events = EventDispatcher::<Vec<String>>::builder()
//!     .hook_pair("deploy")
//!     .build()
//!     .unwrap();
//!
//! events.bind_phase(Phase::Before, "deploy", |log: &Vec<String>, _: &EventArgs<Vec<String>>| {
//!     log.is_empty()
//! });
//!
//! let mut log = Vec::new();
//! let ran = events
//!     .fire_hooked(
//!         "deploy",
//!         &mut log,
//!         &EventArgs::None,
//!         |log| -> Result<(), clade_core::DispatchError> {
//!             log.push("deployed".into());
//!             Ok(())
//!         },
//!     )
//!     .unwrap();
//! assert_eq!(ran, Some(()));
//! ```

mod builder;
mod dispatcher;

pub use builder::EventDispatcherBuilder;
pub use dispatcher::{EventDispatcher, FireResult};

use clade_core::{EventKind, Listener};

type BoxListener<C> = Box<dyn Listener<C>>;

/// Listeners bound to one event.
enum EventSlot<C> {
    Notification(Vec<BoxListener<C>>),
    HookPair {
        before: Option<Vec<BoxListener<C>>>,
        after: Option<Vec<BoxListener<C>>>,
    },
}

impl<C: 'static> EventSlot<C> {
    fn new(kind: EventKind) -> Self {
        match kind {
            EventKind::Notification => EventSlot::Notification(Vec::new()),
            EventKind::HookPair => EventSlot::HookPair {
                before: None,
                after: None,
            },
        }
    }

    fn kind(&self) -> EventKind {
        match self {
            EventSlot::Notification(_) => EventKind::Notification,
            EventSlot::HookPair { .. } => EventKind::HookPair,
        }
    }

    fn len(&self) -> usize {
        match self {
            EventSlot::Notification(listeners) => listeners.len(),
            EventSlot::HookPair { before, after } => {
                before.as_ref().map_or(0, Vec::len) + after.as_ref().map_or(0, Vec::len)
            }
        }
    }
}
