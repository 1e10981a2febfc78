//! The command entity.
//!
//! A [`Command`] bundles an action with the text that addresses it, a
//! description and the parameters it declares. The action runs against the
//! application context `C`, handed in at call time.

use crate::error::BoxError;
use std::fmt;

/// The executable part of a command.
pub type Action<C> = Box<dyn Fn(&mut C) -> Result<(), BoxError>>;

/// Trait for converting an action's return value into `Result<(), BoxError>`.
///
/// Lets plain `fn(&mut C)` and `fn(&mut C) -> Result<(), E>` both serve as
/// actions.
pub trait IntoActionResult {
    /// Convert the action output.
    fn into_action_result(self) -> Result<(), BoxError>;
}

impl IntoActionResult for () {
    fn into_action_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoActionResult for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_action_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// Box any compatible closure as an [`Action`].
pub fn action<C, F, R>(f: F) -> Action<C>
where
    F: Fn(&mut C) -> R + 'static,
    R: IntoActionResult,
{
    Box::new(move |ctx| f(ctx).into_action_result())
}

/// A declared parameter of a command.
///
/// Descriptive only; clade does not parse flags or positional values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Parameter name.
    pub name: String,
    /// Human readable description.
    pub description: String,
    /// Whether the command expects this parameter.
    pub required: bool,
}

impl Argument {
    /// A required parameter without description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required: true,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the parameter as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// A registered or about-to-be-registered command.
pub struct Command<C> {
    action: Action<C>,
    text: String,
    description: String,
    arguments: Vec<Argument>,
}

impl<C> Default for Command<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Command<C> {
    /// A command whose action does nothing.
    pub fn new() -> Self {
        Self {
            action: Box::new(|_| Ok(())),
            text: String::new(),
            description: String::new(),
            arguments: Vec::new(),
        }
    }

    /// A command running `f`.
    pub fn with_action<F, R>(f: F) -> Self
    where
        F: Fn(&mut C) -> R + 'static,
        R: IntoActionResult,
    {
        let mut command = Self::new();
        command.set_action(f);
        command
    }

    /// Run the action against `ctx`.
    pub fn execute(&self, ctx: &mut C) -> Result<(), BoxError> {
        (self.action)(ctx)
    }

    /// The leaf token addressing this command.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the leaf token. The registry does this on insertion.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Human readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Declared parameters, in declaration order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Declare another parameter.
    pub fn add_argument(&mut self, argument: Argument) {
        self.arguments.push(argument);
    }

    /// Replace the action.
    pub fn set_action<F, R>(&mut self, f: F)
    where
        F: Fn(&mut C) -> R + 'static,
        R: IntoActionResult,
    {
        self.action = action(f);
    }

    /// Replace the action with an already boxed one.
    pub fn set_boxed_action(&mut self, action: Action<C>) {
        self.action = action;
    }

    /// Builder form of [`set_description`](Self::set_description).
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Builder form of [`add_argument`](Self::add_argument).
    pub fn argument(mut self, argument: Argument) -> Self {
        self.add_argument(argument);
        self
    }
}

impl<C> fmt::Debug for Command<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("text", &self.text)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
