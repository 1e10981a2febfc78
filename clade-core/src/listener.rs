//! # Listeners
//!
//! A listener is the unit bound to an event. It observes the application
//! context and the event arguments, then decides whether the dispatch goes
//! on ([`ListenerResult::Continue`]) or stops ([`ListenerResult::Cancel`]).
//!
//! What `Cancel` means depends on the event shape:
//!
//! - in a notification, later listeners are skipped;
//! - in the `before` phase of a hook pair, the main action and the `after`
//!   phase are skipped;
//! - in the `after` phase it is ignored.
//!
//! Plain closures are listeners. Their return value converts through
//! [`IntoListenerResult`], so `|_, _| false` cancels and `|_, _| ()`
//! continues.

use crate::{error::BoxError, event::EventArgs};

/// Whether a dispatch should go on after a listener ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListenerResult {
    /// Keep dispatching.
    #[default]
    Continue,
    /// Stop dispatching.
    Cancel,
}

impl ListenerResult {
    /// `true` for [`ListenerResult::Cancel`].
    pub const fn is_cancel(self) -> bool {
        matches!(self, ListenerResult::Cancel)
    }
}

/// Something that can be bound to an event.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener` for context `{C}`",
    label = "missing `Listener` implementation",
    note = "Closures of the form `Fn(&C, &EventArgs<C>) -> R` work when `R: IntoListenerResult`."
)]
pub trait Listener<C>: 'static {
    /// Called when the event this listener is bound to fires.
    fn on_event(&self, ctx: &C, args: &EventArgs<C>) -> Result<ListenerResult, BoxError>;
}

impl<C, F, R> Listener<C> for F
where
    F: Fn(&C, &EventArgs<C>) -> R + 'static,
    R: IntoListenerResult,
{
    fn on_event(&self, ctx: &C, args: &EventArgs<C>) -> Result<ListenerResult, BoxError> {
        (self)(ctx, args).into_listener_result()
    }
}

/// Trait for converting a listener's return value into a [`ListenerResult`].
///
/// # Default Implementations
///
/// - `()` → Continue
/// - `bool` → `false` = Cancel, `true` = Continue
/// - `ListenerResult` → As is
/// - `Option<T>` → `None` = Continue, otherwise delegates to `T`
/// - `Result<T, E>` → Delegates to inner `T` or propagates the error
pub trait IntoListenerResult {
    /// Convert the output into dispatch behavior and optional error.
    fn into_listener_result(self) -> Result<ListenerResult, BoxError>;
}

impl IntoListenerResult for () {
    fn into_listener_result(self) -> Result<ListenerResult, BoxError> {
        Ok(ListenerResult::Continue)
    }
}

impl IntoListenerResult for bool {
    fn into_listener_result(self) -> Result<ListenerResult, BoxError> {
        Ok(if self {
            ListenerResult::Continue
        } else {
            ListenerResult::Cancel
        })
    }
}

impl IntoListenerResult for ListenerResult {
    fn into_listener_result(self) -> Result<ListenerResult, BoxError> {
        Ok(self)
    }
}

impl<T: IntoListenerResult> IntoListenerResult for Option<T> {
    fn into_listener_result(self) -> Result<ListenerResult, BoxError> {
        match self {
            Some(t) => t.into_listener_result(),
            None => Ok(ListenerResult::Continue),
        }
    }
}

impl<T, E> IntoListenerResult for Result<T, E>
where
    T: IntoListenerResult,
    E: Into<BoxError>,
{
    fn into_listener_result(self) -> Result<ListenerResult, BoxError> {
        match self {
            Ok(t) => t.into_listener_result(),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<L: Listener<()>>(listener: L) -> Result<ListenerResult, BoxError> {
        listener.on_event(&(), &EventArgs::None)
    }

    #[test]
    fn test_unit_continues() {
        assert_eq!(run(|_: &(), _: &EventArgs<()>| ()).unwrap(), ListenerResult::Continue);
    }

    #[test]
    fn test_false_cancels_true_continues() {
        assert_eq!(run(|_: &(), _: &EventArgs<()>| false).unwrap(), ListenerResult::Cancel);
        assert_eq!(run(|_: &(), _: &EventArgs<()>| true).unwrap(), ListenerResult::Continue);
    }

    #[test]
    fn test_none_continues() {
        let result = run(|_: &(), _: &EventArgs<()>| Option::<bool>::None).unwrap();
        assert_eq!(result, ListenerResult::Continue);
        let result = run(|_: &(), _: &EventArgs<()>| Some(false)).unwrap();
        assert!(result.is_cancel());
    }

    #[test]
    fn test_error_propagates() {
        let result = run(|_: &(), _: &EventArgs<()>| -> Result<(), std::io::Error> {
            Err(std::io::Error::other("veto failed"))
        });
        assert_eq!(result.unwrap_err().to_string(), "veto failed");
    }

    #[test]
    fn test_boxed_listener_delegates() {
        let boxed: Box<dyn Listener<()>> = Box::new(|_: &(), _: &EventArgs<()>| false);
        assert!(boxed.on_event(&(), &EventArgs::None).unwrap().is_cancel());
    }
}
