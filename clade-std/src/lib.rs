//! # clade-std
//!
//! Standard implementations for the clade command-line framework.
//!
//! This crate provides:
//! - **Namespace tree**: [`tree::NamespaceTree`], arena storage with deep merge
//! - **Command registry**: [`registry::CommandRegistry`]
//! - **Event dispatcher**: [`events::EventDispatcher`] and its builder
//! - **Standard listeners**: Logging
//! - **Testing utilities**: recording, counting and failing listeners
//! - **Discovery**: `inventory`-collected `#[command]` registrations

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use clade_core;

// Modules
#[cfg(feature = "inventory")]
pub mod discovery;
pub mod events;
pub mod hooks;
pub mod registry;
pub mod testing;
pub mod tree;

#[cfg(feature = "inventory")]
pub use inventory;
