//! Event vocabulary.
//!
//! Events come in two shapes, fixed per name when the dispatcher is built:
//!
//! - **Notification**: a list of listeners, no main action.
//! - **Hook pair**: `before` and `after` listeners wrapping a main action.
//!   Any `before` listener may cancel.

use crate::command::Command;
use phf::phf_map;
use std::{fmt, rc::Rc};

/// Names of the events every application declares.
pub mod names {
    /// Wraps a whole application run.
    pub const CLI_RUN: &str = "cli:run";
    /// Wraps turning the argument source into lookup tokens.
    pub const CLI_PARSE_ARGUMENTS: &str = "cli:parse-arguments";
    /// Wraps inserting a command into the registry.
    pub const COMMAND_ADD: &str = "command:add";
    /// Wraps running a command's action.
    pub const COMMAND_EXECUTE: &str = "command:execute";
    /// Fired when no command matches the input.
    pub const COMMAND_NOT_FOUND: &str = "command:not-found";
}

/// The standard event vocabulary and the shape of each event.
pub static STANDARD_EVENTS: phf::Map<&'static str, EventKind> = phf_map! {
    "cli:run" => EventKind::HookPair,
    "cli:parse-arguments" => EventKind::HookPair,
    "command:add" => EventKind::HookPair,
    "command:execute" => EventKind::HookPair,
    "command:not-found" => EventKind::Notification,
};

/// Shape of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Ordered listeners, no phases, no main action.
    Notification,
    /// `before`/`after` phases around a main action.
    HookPair,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Notification => "notification",
            EventKind::HookPair => "hook-pair",
        })
    }
}

/// Phase of a hook-pair event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Runs before the main action; may cancel it.
    Before,
    /// Runs after the main action; cannot cancel.
    After,
}

impl Phase {
    /// The phase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::After => "after",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments passed to every listener of a fired event.
pub enum EventArgs<C> {
    /// The event carries nothing.
    None,
    /// The command being added or executed.
    Command(Rc<Command<C>>),
    /// Lookup tokens, e.g. the input that matched no command.
    Input(Vec<String>),
}

impl<C> EventArgs<C> {
    /// The command, if the event carries one.
    pub fn command(&self) -> Option<&Rc<Command<C>>> {
        match self {
            EventArgs::Command(command) => Some(command),
            _ => None,
        }
    }

    /// The input tokens, if the event carries them.
    pub fn input(&self) -> Option<&[String]> {
        match self {
            EventArgs::Input(tokens) => Some(tokens),
            _ => None,
        }
    }
}

impl<C> Clone for EventArgs<C> {
    fn clone(&self) -> Self {
        match self {
            EventArgs::None => EventArgs::None,
            EventArgs::Command(command) => EventArgs::Command(Rc::clone(command)),
            EventArgs::Input(tokens) => EventArgs::Input(tokens.clone()),
        }
    }
}

impl<C> fmt::Debug for EventArgs<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventArgs::None => f.write_str("None"),
            EventArgs::Command(command) => f.debug_tuple("Command").field(command).finish(),
            EventArgs::Input(tokens) => f.debug_tuple("Input").field(tokens).finish(),
        }
    }
}
