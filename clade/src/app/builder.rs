//! Builder for [`Application`].

use super::Application;
use clade_core::{CladeError, EventKind, Listener, Phase};
use clade_std::{
    events::{EventDispatcher, EventDispatcherBuilder},
    hooks::LoggingListener,
};

type Binding<C> = Box<dyn FnOnce(&mut EventDispatcher<C>)>;

/// Builder for constructing an [`Application`].
///
/// Starts from the standard events. Extension events are declared here,
/// since the vocabulary is fixed once [`build`](Self::build) returns.
pub struct ApplicationBuilder<C> {
    context: C,
    events: EventDispatcherBuilder<C>,
    bindings: Vec<Binding<C>>,
    logging: bool,
    #[cfg(feature = "inventory")]
    discover: bool,
}

impl<C: 'static> ApplicationBuilder<C> {
    /// Create a builder around `context`.
    pub fn new(context: C) -> Self {
        Self {
            context,
            events: EventDispatcherBuilder::new().standard_events(),
            bindings: Vec::new(),
            logging: false,
            #[cfg(feature = "inventory")]
            discover: false,
        }
    }

    /// Declare a hook-pair extension event.
    pub fn hook_event(mut self, name: impl Into<String>) -> Self {
        self.events = self.events.hook_pair(name);
        self
    }

    /// Declare a notification extension event.
    pub fn notification_event(mut self, name: impl Into<String>) -> Self {
        self.events = self.events.notification(name);
        self
    }

    /// Bind a listener to a notification event once it exists.
    pub fn on<L: Listener<C>>(mut self, name: impl Into<String>, listener: L) -> Self {
        let name = name.into();
        self.bindings.push(Box::new(move |events: &mut EventDispatcher<C>| {
            events.bind(&name, listener);
        }));
        self
    }

    /// Bind a listener to one phase of a hook-pair event once it exists.
    pub fn on_phase<L: Listener<C>>(
        mut self,
        phase: Phase,
        name: impl Into<String>,
        listener: L,
    ) -> Self {
        let name = name.into();
        self.bindings.push(Box::new(move |events: &mut EventDispatcher<C>| {
            events.bind_phase(phase, &name, listener);
        }));
        self
    }

    /// Log every declared event through a [`LoggingListener`].
    pub fn with_logging(mut self) -> Self {
        self.logging = true;
        self
    }

    /// Register every `#[command]` written for this context type.
    #[cfg(feature = "inventory")]
    pub fn discover(mut self) -> Self {
        self.discover = true;
        self
    }

    /// Build the application.
    ///
    /// Logging listeners are bound first, then the listeners given to
    /// [`on`](Self::on) and [`on_phase`](Self::on_phase) in order, so
    /// discovered commands already fire `command:add` through them.
    pub fn build(self) -> Result<Application<C>, CladeError> {
        let declared: Vec<(String, EventKind)> = self
            .events
            .declared()
            .map(|(name, kind)| (name.to_owned(), kind))
            .collect();
        let mut events = self.events.build()?;

        if self.logging {
            bind_logging(&mut events, declared);
        }
        for binding in self.bindings {
            binding(&mut events);
        }

        #[allow(unused_mut)]
        let mut app = Application::from_parts(self.context, events);

        #[cfg(feature = "inventory")]
        if self.discover {
            for registration in clade_std::discovery::registrations::<C>() {
                app.add(registration.input, registration.to_command::<C>())?;
            }
        }

        Ok(app)
    }
}

fn bind_logging<C: 'static>(
    events: &mut EventDispatcher<C>,
    declared: Vec<(String, EventKind)>,
) {
    for (name, kind) in declared {
        match kind {
            EventKind::Notification => {
                events.bind(&name, LoggingListener::named(name.as_str()));
            }
            EventKind::HookPair => {
                for phase in [Phase::Before, Phase::After] {
                    let listener = LoggingListener::named(name.as_str()).in_phase(phase);
                    events.bind_phase(phase, &name, listener);
                }
            }
        }
    }
}
