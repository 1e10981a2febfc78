//! Error types for clade.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CladeError`] - Top-level error type for all clade operations
//! - [`DispatchError`] - Errors raised while firing an event
//! - [`ConfigurationError`] - The event vocabulary does not match the call
//! - [`InputError`] - Malformed command input
//!
//! A missing command is not an error: lookups return `None` or an empty map.

use crate::event::EventKind;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all clade operations.
#[derive(Error, Debug)]
pub enum CladeError {
    /// An error occurred while firing an event.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The command input could not be parsed.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// A command action returned an error.
    #[error("command `{command}` failed")]
    Command {
        /// The input that addressed the failing command.
        command: String,
        /// The error returned by the action.
        #[source]
        source: BoxError,
    },

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while firing an event.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The dispatcher does not know how to fire this event.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A listener returned an error; the remaining listeners did not run.
    #[error("listener for `{event}` failed")]
    Listener {
        /// Name of the event being fired.
        event: String,
        /// The error returned by the listener.
        #[source]
        source: BoxError,
    },
}

/// The event vocabulary and the fired event disagree.
///
/// These are wiring mistakes in the application, never runtime conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The event was never declared.
    #[error("event `{0}` is not listed in the event registry")]
    UnknownEvent(String),

    /// The event was fired with the wrong shape.
    #[error("event `{event}` is a {actual} event, not a {expected} event")]
    ShapeMismatch {
        /// Name of the event.
        event: String,
        /// The shape the caller asked for.
        expected: EventKind,
        /// The shape the event was declared with.
        actual: EventKind,
    },

    /// The same event name was declared twice.
    #[error("event `{0}` is declared more than once")]
    DuplicateEvent(String),
}

/// Errors produced by the input parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Tokenization produced no command text.
    #[error("input is empty; expected at least a command name")]
    Empty,
}

// Convenience conversions
impl From<BoxError> for CladeError {
    fn from(err: BoxError) -> Self {
        CladeError::Custom(err)
    }
}

impl From<ConfigurationError> for CladeError {
    fn from(err: ConfigurationError) -> Self {
        CladeError::Dispatch(DispatchError::Configuration(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event_message_names_event() {
        let err = ConfigurationError::UnknownEvent("cli:stop".into());
        assert_eq!(
            err.to_string(),
            "event `cli:stop` is not listed in the event registry"
        );
    }

    #[test]
    fn test_configuration_error_lifts_into_clade_error() {
        let err: CladeError = ConfigurationError::UnknownEvent("x".into()).into();
        assert!(matches!(
            err,
            CladeError::Dispatch(DispatchError::Configuration(
                ConfigurationError::UnknownEvent(_)
            ))
        ));
    }

    #[test]
    fn test_shape_mismatch_message() {
        let err = ConfigurationError::ShapeMismatch {
            event: "command:not-found".into(),
            expected: EventKind::HookPair,
            actual: EventKind::Notification,
        };
        assert_eq!(
            err.to_string(),
            "event `command:not-found` is a notification event, not a hook-pair event"
        );
    }
}
