//! Detached tree fragments.

use super::CommandSlot;
use std::collections::HashMap;

/// An owned tree, built away from the arena and merged into it.
///
/// `children` are branches to keep merging into; `commands` holds terminal
/// values that overwrite. The distinction lives in the type, so a command
/// text can never be mistaken for a namespace segment.
#[derive(Debug)]
pub struct Fragment<V> {
    pub(super) children: HashMap<String, Fragment<V>>,
    pub(super) commands: Option<CommandSlot<V>>,
}

impl<V> Default for Fragment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Fragment<V> {
    /// An empty interior node.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            commands: None,
        }
    }

    /// A single branch: one interior node per segment of `path`, ending in a
    /// node whose commands slot holds exactly `{ text: value }`.
    pub fn branch<S: AsRef<str>>(path: &[S], text: impl Into<String>, value: V) -> Self {
        let leaf = Self::new().with_command(text, value);

        path.iter().rev().fold(leaf, |inner, segment| {
            Self::new().with_child(segment.as_ref(), inner)
        })
    }

    /// Add or replace a child branch.
    pub fn with_child(mut self, segment: impl Into<String>, child: Fragment<V>) -> Self {
        self.children.insert(segment.into(), child);
        self
    }

    /// Add or replace a command in this node's slot.
    pub fn with_command(mut self, text: impl Into<String>, value: V) -> Self {
        self.commands
            .get_or_insert_with(HashMap::new)
            .insert(text.into(), value);
        self
    }
}
