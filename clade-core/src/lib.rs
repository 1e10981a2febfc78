//! # clade-core
//!
//! Core types for the clade command-line framework.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! extensions that bind listeners or build commands without needing the
//! registry and dispatcher implementations in `clade-std`.
//!
//! # Pieces
//!
//! ## Input Parser ([`parse_input`])
//!
//! Splits a command address such as `"factory example"`, `"factoryExample"`
//! or `["factory", "example"]` into a namespace path and a command text.
//! [`convert_args_to_input`] strips the leading slots of a process argv.
//!
//! ## Command ([`Command`])
//!
//! An action bound to the application context at call time, plus the text,
//! description and declared [`Argument`]s.
//!
//! ## Listener ([`Listener`])
//!
//! The unit bound to an event. Returns [`ListenerResult::Cancel`] (or plain
//! `false`) to veto.
//!
//! ## Event vocabulary ([`EventKind`], [`Phase`], [`EventArgs`])
//!
//! The two event shapes and the standard names in [`names`].
//!
//! # Error Types
//!
//! - [`CladeError`] - Top-level error type
//! - [`DispatchError`] - Errors raised while firing an event
//! - [`ConfigurationError`] - Unknown or mis-shaped events
//! - [`InputError`] - Malformed command input

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod command;
mod error;
mod event;
mod input;
mod listener;

// Re-exports
pub use command::{Action, Argument, Command, IntoActionResult, action};
pub use error::{BoxError, CladeError, ConfigurationError, DispatchError, InputError};
pub use event::{EventArgs, EventKind, Phase, STANDARD_EVENTS, names};
pub use input::{ArgsSource, Input, ParsedInput, convert_args_to_input, parse_input};
pub use listener::{IntoListenerResult, Listener, ListenerResult};
