//! # Application
//!
//! Ties the command registry and the event dispatcher to an application
//! context `C`.
//!
//! Registration fires `command:add`, and [`Application::run`] fires
//! `cli:run` around `cli:parse-arguments`, the lookup, and either
//! `command:execute` or `command:not-found`.

mod builder;

pub use builder::ApplicationBuilder;

use clade_core::{
    ArgsSource, CladeError, Command, EventArgs, Input, IntoActionResult, Listener, Phase,
    convert_args_to_input, names, parse_input,
};
use clade_std::{events::EventDispatcher, registry::CommandRegistry};
use std::{fmt, rc::Rc};

/// How a [`run`](Application::run) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A command was found and its action ran.
    Executed,
    /// No command matched; `command:not-found` was fired.
    NotFound,
    /// A `before` listener cancelled one of the hook-pair events.
    Cancelled,
}

/// A command-line application over the context `C`.
///
/// # Example
///
/// ```rust
/// use clade::{Application, ArgsSource, RunOutcome};
///
/// let mut app = Application::builder(0u32).build()?;
/// app.add_command("counter bump", |count: &mut u32| *count += 1)?;
///
/// let outcome = app.run(ArgsSource::tokens(["counter", "bump"]))?;
/// assert_eq!(outcome, RunOutcome::Executed);
/// assert_eq!(*app.context(), 1);
/// # Ok::<(), clade::CladeError>(())
/// ```
pub struct Application<C> {
    context: C,
    registry: CommandRegistry<C>,
    events: EventDispatcher<C>,
}

impl<C: 'static> Application<C> {
    /// Start configuring an application.
    pub fn builder(context: C) -> ApplicationBuilder<C> {
        ApplicationBuilder::new(context)
    }

    /// An application with the standard events and no listeners.
    pub fn new(context: C) -> Self {
        Self::from_parts(context, EventDispatcher::standard())
    }

    fn from_parts(context: C, events: EventDispatcher<C>) -> Self {
        Self {
            context,
            registry: CommandRegistry::new(),
            events,
        }
    }

    /// Register a command whose action is `f`.
    pub fn add_command<F, R>(
        &mut self,
        input: impl Into<Input>,
        f: F,
    ) -> Result<Option<Rc<Command<C>>>, CladeError>
    where
        F: Fn(&mut C) -> R + 'static,
        R: IntoActionResult,
    {
        self.add_factory(input, |_| f)
    }

    /// Register a command built by `factory`.
    ///
    /// The factory receives the fresh command, so it can fill in the
    /// description and arguments, and returns the action.
    pub fn add_factory<Fac, F, R>(
        &mut self,
        input: impl Into<Input>,
        factory: Fac,
    ) -> Result<Option<Rc<Command<C>>>, CladeError>
    where
        Fac: FnOnce(&mut Command<C>) -> F,
        F: Fn(&mut C) -> R + 'static,
        R: IntoActionResult,
    {
        let mut command = Command::new();
        let action = factory(&mut command);
        command.set_action(action);
        self.add(input, command)
    }

    /// Register a prebuilt command under `input`.
    ///
    /// Fires `command:add` around the insertion. Returns the registered
    /// command, or `None` when a `before` listener cancelled.
    pub fn add(
        &mut self,
        input: impl Into<Input>,
        mut command: Command<C>,
    ) -> Result<Option<Rc<Command<C>>>, CladeError> {
        let parsed = parse_input(input)?;
        command.set_text(parsed.command.as_str());
        let command = Rc::new(command);

        let registry = &mut self.registry;
        let args = EventArgs::Command(Rc::clone(&command));
        let added = self
            .events
            .fire_hooked(names::COMMAND_ADD, &mut self.context, &args, |_| {
                registry.insert(&parsed.namespace, Rc::clone(&command));
                Ok::<_, CladeError>(())
            })?;

        Ok(added.map(|()| command))
    }

    /// Bind a listener to a notification event.
    ///
    /// Returns `false` when `name` is unknown or not a notification.
    pub fn on<L: Listener<C>>(&mut self, name: &str, listener: L) -> bool {
        self.events.bind(name, listener)
    }

    /// Bind a listener to one phase of a hook-pair event.
    ///
    /// Returns `false` when `name` is unknown or not a hook pair.
    pub fn on_phase<L: Listener<C>>(&mut self, phase: Phase, name: &str, listener: L) -> bool {
        self.events.bind_phase(phase, name, listener)
    }

    /// Resolve the arguments to a command and execute it.
    ///
    /// An empty argument list is an [`InputError::Empty`](clade_core::InputError::Empty).
    pub fn run(&mut self, source: ArgsSource) -> Result<RunOutcome, CladeError> {
        let events = &self.events;
        let registry = &self.registry;

        let run = |ctx: &mut C| -> Result<RunOutcome, CladeError> {
            let raw = EventArgs::Input(source.raw().to_vec());
            let tokens = events.fire_hooked(names::CLI_PARSE_ARGUMENTS, ctx, &raw, |_| {
                Ok::<_, CladeError>(convert_args_to_input(source))
            })?;
            let Some(tokens) = tokens else {
                return Ok(RunOutcome::Cancelled);
            };

            let Some(command) = registry.find_one(tokens.as_slice())? else {
                #[cfg(feature = "tracing")]
                tracing::debug!(input = %tokens.join(" "), "command not found");
                events.fire(names::COMMAND_NOT_FOUND, ctx, &EventArgs::Input(tokens))?;
                return Ok(RunOutcome::NotFound);
            };

            let args = EventArgs::Command(Rc::clone(&command));
            let executed = events.fire_hooked(names::COMMAND_EXECUTE, ctx, &args, |ctx| {
                command
                    .execute(ctx)
                    .map_err(|source| CladeError::Command {
                        command: tokens.join(" "),
                        source,
                    })
            })?;

            Ok(executed.map_or(RunOutcome::Cancelled, |()| RunOutcome::Executed))
        };

        let outcome = events.fire_hooked(names::CLI_RUN, &mut self.context, &EventArgs::None, run)?;

        Ok(outcome.unwrap_or(RunOutcome::Cancelled))
    }

    /// The application context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// The application context, mutably.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the application, returning its context.
    pub fn into_context(self) -> C {
        self.context
    }

    /// The registered commands.
    pub fn registry(&self) -> &CommandRegistry<C> {
        &self.registry
    }

    /// The event dispatcher.
    pub fn events(&self) -> &EventDispatcher<C> {
        &self.events
    }
}

impl<C: fmt::Debug + 'static> fmt::Debug for Application<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("context", &self.context)
            .field("registry", &self.registry)
            .field("events", &self.events)
            .finish()
    }
}
