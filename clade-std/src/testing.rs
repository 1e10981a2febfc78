//! Testing utilities for clade.
//!
//! This module provides listeners that make dispatch order and cancellation
//! easy to assert on.
//!
//! # Features
//!
//! - [`RecordingListener`]: Records a tag per call into a shared log
//! - [`CountingListener`]: Counts invocations
//! - [`FailingListener`]: Always returns an error

use clade_core::{BoxError, EventArgs, Listener, ListenerResult};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

// ============================================================================
// Recording Listener
// ============================================================================

/// A shared, ordered log of listener calls.
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// A listener that appends its tag to a shared [`CallLog`].
///
/// Several recorders sharing one log make dispatch order visible.
///
/// # Example
///
/// ```rust
/// use clade_core::ListenerResult;
/// use clade_std::testing::RecordingListener;
///
/// let first = RecordingListener::new("first");
/// let veto = first.sibling("veto").with_result(ListenerResult::Cancel);
///
/// // bind both, fire...
/// assert!(first.calls().is_empty());
/// # let _ = veto;
/// ```
pub struct RecordingListener {
    tag: String,
    log: CallLog,
    result: ListenerResult,
}

impl RecordingListener {
    /// Create a recorder with its own log that returns `Continue`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_log(tag, CallLog::default())
    }

    /// Create a recorder appending to an existing log.
    pub fn with_log(tag: impl Into<String>, log: CallLog) -> Self {
        Self {
            tag: tag.into(),
            log,
            result: ListenerResult::Continue,
        }
    }

    /// A recorder sharing this recorder's log.
    pub fn sibling(&self, tag: impl Into<String>) -> Self {
        Self::with_log(tag, Rc::clone(&self.log))
    }

    /// Return `result` from every call.
    pub fn with_result(mut self, result: ListenerResult) -> Self {
        self.result = result;
        self
    }

    /// The shared log.
    pub fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    /// A snapshot of the recorded tags.
    pub fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl<C> Listener<C> for RecordingListener {
    fn on_event(&self, _ctx: &C, args: &EventArgs<C>) -> Result<ListenerResult, BoxError> {
        let entry = match args {
            EventArgs::Command(command) => format!("{}:{}", self.tag, command.text()),
            EventArgs::Input(tokens) => format!("{}:{}", self.tag, tokens.join(" ")),
            EventArgs::None => self.tag.clone(),
        };
        self.log.borrow_mut().push(entry);
        Ok(self.result)
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations.
///
/// Clones share the counter.
#[derive(Clone, Default)]
pub struct CountingListener {
    count: Rc<Cell<usize>>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl<C> Listener<C> for CountingListener {
    fn on_event(&self, _ctx: &C, _args: &EventArgs<C>) -> Result<ListenerResult, BoxError> {
        self.count.set(self.count.get() + 1);
        Ok(ListenerResult::Continue)
    }
}

// ============================================================================
// Failing Listener
// ============================================================================

/// A listener that always fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingListener {
    message: String,
}

impl FailingListener {
    /// Create a listener failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<C> Listener<C> for FailingListener {
    fn on_event(&self, _ctx: &C, _args: &EventArgs<C>) -> Result<ListenerResult, BoxError> {
        Err(self.message.clone().into())
    }
}
