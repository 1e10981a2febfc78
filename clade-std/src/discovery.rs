//! # Compile-time Command Discovery
//!
//! Commands declared with the `#[command]` attribute are collected through the
//! `inventory` crate at link time, so an application never scans itself for
//! methods by name.
//!
//! # Overview
//!
//! Every registration carries the [`TypeId`] of the application context its
//! action expects. [`registrations`] yields only the ones matching `C`, and
//! the erased action downcasts the context back before calling the user
//! function.
//!
//! # Example
//!
//! ```rust,ignore
//! use clade::command;
//!
//! struct App;
//!
//! #[command(description = "Say hello")]
//! fn hello_world(_app: &mut App) {
//!     println!("hello");
//! }
//!
//! // Registered as namespace ["hello"], command "world".
//! let app = clade::Application::builder(App).discover().build()?;
//! ```

use clade_core::{BoxError, Command};
use std::any::{Any, TypeId, type_name};
use thiserror::Error;

/// An action with its context type erased.
pub type ErasedAction = fn(&mut dyn Any) -> Result<(), BoxError>;

/// Registration entry for a command in the global registry.
///
/// This struct is submitted to `inventory` for automatic collection.
#[derive(Debug)]
pub struct CommandRegistration {
    /// The `TypeId` of the application context the action expects.
    pub context: fn() -> TypeId,
    /// The command address, as accepted by the input parser.
    pub input: &'static str,
    /// Human readable description.
    pub description: &'static str,
    /// The type-erased action.
    pub action: ErasedAction,
}

inventory::collect!(CommandRegistration);

impl CommandRegistration {
    /// Create a registration; usable in `inventory::submit!`.
    pub const fn new(
        context: fn() -> TypeId,
        input: &'static str,
        description: &'static str,
        action: ErasedAction,
    ) -> Self {
        Self {
            context,
            input,
            description,
            action,
        }
    }

    /// Check if this registration targets context `C`.
    pub fn is_for<C: 'static>(&self) -> bool {
        (self.context)() == TypeId::of::<C>()
    }

    /// Build a fresh command running the erased action against `C`.
    pub fn to_command<C: 'static>(&self) -> Command<C> {
        let action = self.action;
        let mut command = Command::new().described(self.description);
        command.set_action(move |ctx: &mut C| action(ctx));
        command
    }
}

/// Errors raised by erased actions.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The action was handed a context of another type.
    #[error("command expects a `{expected}` context")]
    ContextMismatch {
        /// Name of the expected context type.
        expected: &'static str,
    },
}

/// Recover the concrete context inside an erased action.
pub fn downcast_context<C: 'static>(ctx: &mut dyn Any) -> Result<&mut C, DiscoveryError> {
    ctx.downcast_mut::<C>()
        .ok_or(DiscoveryError::ContextMismatch {
            expected: type_name::<C>(),
        })
}

/// Every collected registration for context `C`, ordered by input.
pub fn registrations<C: 'static>() -> Vec<&'static CommandRegistration> {
    let mut found: Vec<_> = inventory::iter::<CommandRegistration>
        .into_iter()
        .filter(|reg| reg.is_for::<C>())
        .collect();
    found.sort_by_key(|reg| reg.input);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);
    struct Other;

    fn bump(ctx: &mut dyn Any) -> Result<(), BoxError> {
        downcast_context::<Counter>(ctx)?.0 += 1;
        Ok(())
    }

    inventory::submit! {
        CommandRegistration::new(TypeId::of::<Counter>, "counter bump", "Add one", bump)
    }

    #[test]
    fn test_registrations_filter_by_context() {
        let found = registrations::<Counter>();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].input, "counter bump");
        assert!(registrations::<Other>().is_empty());
    }

    #[test]
    fn test_to_command_runs_erased_action() {
        let reg = registrations::<Counter>()[0];
        let command = reg.to_command::<Counter>();
        assert_eq!(command.description(), "Add one");

        let mut counter = Counter(0);
        command.execute(&mut counter).unwrap();
        assert_eq!(counter.0, 1);
    }

    #[test]
    fn test_wrong_context_is_an_error() {
        let mut other = Other;
        let err = bump(&mut other).unwrap_err();
        assert!(err.to_string().contains("Counter"));
    }
}
