//! # clade - Namespaced Command-Line Applications
//!
//! `clade` maps command input such as `"factory example"` or
//! `"factoryExample"` onto a tree of namespaces, and fires named events
//! around every stage of a run so listeners can observe or cancel it.
//!
//! ## Quick Start
//!
//! ```rust
//! use clade::prelude::*;
//!
//! #[derive(Default)]
//! struct Shell {
//!     greeted: bool,
//! }
//!
//! let mut app = Application::builder(Shell::default())
//!     .on(names::COMMAND_NOT_FOUND, |_: &Shell, args: &EventArgs<Shell>| {
//!         eprintln!("unknown command: {:?}", args.input());
//!     })
//!     .build()?;
//!
//! app.add_command("helloWorld", |shell: &mut Shell| shell.greeted = true)?;
//! app.run(ArgsSource::tokens(["hello", "world"]))?;
//! assert!(app.context().greeted);
//! # Ok::<(), CladeError>(())
//! ```
//!
//! ## Events
//!
//! | Event                 | Shape        | Arguments          |
//! |-----------------------|--------------|--------------------|
//! | `cli:run`             | hook pair    | none               |
//! | `cli:parse-arguments` | hook pair    | raw argv           |
//! | `command:add`         | hook pair    | the command        |
//! | `command:execute`     | hook pair    | the command        |
//! | `command:not-found`   | notification | the input segments |
//!
//! A `before` listener returning [`ListenerResult::Cancel`] (or `false`)
//! skips the main action and the `after` listeners.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod app;

pub use app::{Application, ApplicationBuilder, RunOutcome};

pub use clade_core::{
    // Command
    Action,
    // Input
    ArgsSource,
    Argument,
    // Error types
    BoxError,
    CladeError,
    Command,
    ConfigurationError,
    DispatchError,
    // Events
    EventArgs,
    EventKind,
    Input,
    InputError,
    IntoActionResult,
    // Listener
    IntoListenerResult,
    Listener,
    ListenerResult,
    ParsedInput,
    Phase,
    STANDARD_EVENTS,
    action,
    convert_args_to_input,
    names,
    parse_input,
};

/// Event declaration, binding and firing.
pub mod events {
    pub use clade_std::events::{EventDispatcher, EventDispatcherBuilder, FireResult};
}

/// The command registry.
pub mod registry {
    pub use clade_std::registry::CommandRegistry;
}

/// The namespace tree backing the registry.
pub mod tree {
    pub use clade_std::tree::{CommandSlot, Fragment, NamespaceTree};
}

/// Standard listener implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use clade_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use clade_std::testing::*;
}

/// Compile-time command discovery.
#[cfg(feature = "inventory")]
pub mod discovery {
    pub use clade_std::discovery::{
        CommandRegistration, DiscoveryError, ErasedAction, downcast_context, registrations,
    };
}

/// Prelude module - common imports for clade.
///
/// # Usage
///
/// ```rust
/// use clade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Application, ArgsSource, BoxError, CladeError, Command, EventArgs, Listener,
        ListenerResult, Phase, RunOutcome, names,
    };
}

#[cfg(feature = "macros")]
pub use clade_macros::command;

#[cfg(feature = "inventory")]
pub use inventory;
