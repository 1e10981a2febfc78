//! Logging listener for event observation.

use clade_core::{BoxError, EventArgs, Listener, ListenerResult, Phase};

/// A listener that logs every event it sees and never cancels.
///
/// Listeners are not told which event fired them, so the logger carries the
/// event name (and phase, for hook pairs) it was bound under.
///
/// # Example
///
/// ```rust
/// use clade_core::Phase;
/// use clade_std::{events::EventDispatcher, hooks::LoggingListener};
///
/// let mut events = EventDispatcher::<()>::standard();
/// events.bind("command:not-found", LoggingListener::named("command:not-found"));
/// events.bind_phase(
///     Phase::Before,
///     "command:execute",
///     LoggingListener::named("command:execute").in_phase(Phase::Before),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LoggingListener {
    name: String,
    phase: Option<Phase>,
}

impl LoggingListener {
    /// Create a new `LoggingListener` with a default name.
    pub fn new() -> Self {
        Self::named("event")
    }

    /// Create a new `LoggingListener` for the event `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phase: None,
        }
    }

    /// Tag log lines with a hook-pair phase.
    pub fn in_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    /// The event name used in log lines.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for LoggingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Listener<C> for LoggingListener {
    fn on_event(&self, _ctx: &C, args: &EventArgs<C>) -> Result<ListenerResult, BoxError> {
        #[cfg(feature = "tracing")]
        {
            let phase = self.phase.map(Phase::as_str).unwrap_or("-");
            match args {
                EventArgs::None => {
                    tracing::debug!(event = %self.name, phase, "event fired");
                }
                EventArgs::Command(command) => {
                    tracing::debug!(event = %self.name, phase, command = %command.text(), "event fired");
                }
                EventArgs::Input(tokens) => {
                    tracing::debug!(event = %self.name, phase, input = ?tokens, "event fired");
                }
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = args;
        }

        Ok(ListenerResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clade_core::Command;
    use std::rc::Rc;

    #[test]
    fn test_logging_listener_continues() {
        let listener = LoggingListener::new();
        let result = listener.on_event(&(), &EventArgs::None).unwrap();
        assert_eq!(result, ListenerResult::Continue);
        assert_eq!(listener.name(), "event");
    }

    #[test]
    fn test_logging_listener_named() {
        let listener = LoggingListener::named("command:execute").in_phase(Phase::After);
        let args = EventArgs::Command(Rc::new(Command::<()>::new()));

        let result = listener.on_event(&(), &args).unwrap();
        assert_eq!(result, ListenerResult::Continue);
        assert_eq!(listener.name(), "command:execute");
    }
}
