//! Command registry.
//!
//! Owns the [`NamespaceTree`] root and is the only way to mutate it. Commands
//! are stored as `Rc<Command<C>>` so a lookup returns the very object that was
//! registered.

use crate::tree::NamespaceTree;
use clade_core::{Command, Input, InputError, parse_input};
use std::{collections::HashMap, fmt, rc::Rc};

/// Hierarchical store of commands keyed by namespace path and command text.
pub struct CommandRegistry<C> {
    tree: NamespaceTree<Rc<Command<C>>>,
}

impl<C> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CommandRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tree: NamespaceTree::new(),
        }
    }

    /// Insert `command` under `namespace`, keyed by its text.
    ///
    /// Any command already at the same address is replaced and returned;
    /// every other branch is left untouched.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        namespace: &[S],
        command: Rc<Command<C>>,
    ) -> Option<Rc<Command<C>>> {
        let text = command.text().to_owned();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            namespace = ?namespace.iter().map(|s| s.as_ref()).collect::<Vec<&str>>(),
            command = %text,
            "inserting command"
        );

        self.tree.insert(namespace, text, command)
    }

    /// Parse `input`, name `command` after its last token and insert it.
    pub fn register(
        &mut self,
        input: impl Into<Input>,
        mut command: Command<C>,
    ) -> Result<Rc<Command<C>>, InputError> {
        let parsed = parse_input(input)?;
        command.set_text(parsed.command);

        let command = Rc::new(command);
        self.insert(&parsed.namespace, Rc::clone(&command));
        Ok(command)
    }

    /// All commands directly under `namespace`, keyed by text.
    ///
    /// Empty when the namespace does not exist or holds no commands.
    pub fn find_all<S: AsRef<str>>(&self, namespace: &[S]) -> HashMap<String, Rc<Command<C>>> {
        self.tree
            .find_all(namespace)
            .map(|slot| {
                slot.iter()
                    .map(|(text, command)| (text.clone(), Rc::clone(command)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The command `text` under `namespace`.
    pub fn find<S: AsRef<str>>(&self, namespace: &[S], text: &str) -> Option<Rc<Command<C>>> {
        self.tree.find(namespace, text).cloned()
    }

    /// Look up a combined address such as `"remote add"` or `["remote", "add"]`.
    ///
    /// A missing command is `Ok(None)`; only empty input is an error.
    pub fn find_one(&self, input: impl Into<Input>) -> Result<Option<Rc<Command<C>>>, InputError> {
        let parsed = parse_input(input)?;
        Ok(self.find(&parsed.namespace, &parsed.command))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if no command is registered.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Every registered command with its full address, in lexical order.
    pub fn commands(&self) -> impl Iterator<Item = (Vec<String>, Rc<Command<C>>)> + '_ {
        self.tree
            .entries()
            .into_iter()
            .map(|(path, _, command)| (path, Rc::clone(command)))
    }
}

impl<C> fmt::Debug for CommandRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(text: &str) -> Rc<Command<()>> {
        let mut command = Command::new();
        command.set_text(text);
        Rc::new(command)
    }

    #[test]
    fn test_register_parses_and_names() {
        let mut registry: CommandRegistry<()> = CommandRegistry::new();
        let command = registry
            .register("factoryExample", Command::new().described("Example"))
            .unwrap();

        assert_eq!(command.text(), "example");
        let found = registry.find_one("factory example").unwrap().unwrap();
        assert!(Rc::ptr_eq(&found, &command));
        assert_eq!(found.description(), "Example");
    }

    #[test]
    fn test_idempotent_insert_keeps_second() {
        let mut registry = CommandRegistry::new();
        let first = named("migrate");
        let second = named("migrate");

        registry.insert(&["db"], Rc::clone(&first));
        let replaced = registry.insert(&["db"], Rc::clone(&second)).unwrap();

        assert!(Rc::ptr_eq(&replaced, &first));
        let all = registry.find_all(&["db"]);
        assert_eq!(all.len(), 1);
        assert!(Rc::ptr_eq(&all["migrate"], &second));
    }

    #[test]
    fn test_siblings_resolve_to_their_own_command() {
        let mut registry = CommandRegistry::new();
        let b = registry.register("a b", Command::<()>::new()).unwrap();
        let c = registry.register("a c", Command::<()>::new()).unwrap();

        let found_b = registry.find_one("a b").unwrap().unwrap();
        let found_c = registry.find_one("a c").unwrap().unwrap();

        assert!(Rc::ptr_eq(&found_b, &b));
        assert!(Rc::ptr_eq(&found_c, &c));
        assert!(!Rc::ptr_eq(&found_b, &found_c));
    }

    #[test]
    fn test_misses_are_not_errors() {
        let registry: CommandRegistry<()> = CommandRegistry::new();
        assert!(registry.find_all(&["x", "y"]).is_empty());
        assert!(registry.find_one("x y").unwrap().is_none());
        assert!(registry.find(&["x"], "y").is_none());
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let mut registry: CommandRegistry<()> = CommandRegistry::new();
        assert_eq!(registry.find_one("").unwrap_err(), InputError::Empty);
        assert_eq!(
            registry.register(" ", Command::new()).unwrap_err(),
            InputError::Empty
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_segments_and_text_agree() {
        let mut registry: CommandRegistry<()> = CommandRegistry::new();
        registry.register(["remote", "add"], Command::new()).unwrap();

        assert!(registry.find_one("remoteAdd").unwrap().is_some());
        assert!(registry.find(&["remote"], "add").is_some());
    }

    #[test]
    fn test_commands_lists_full_addresses() {
        let mut registry: CommandRegistry<()> = CommandRegistry::new();
        registry.register("test", Command::new()).unwrap();
        registry.register("factory example", Command::new()).unwrap();

        let listed: Vec<String> = registry
            .commands()
            .map(|(path, command)| {
                path.into_iter()
                    .chain(std::iter::once(command.text().to_string()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        assert_eq!(listed, vec!["test", "factory example"]);
        assert_eq!(registry.len(), 2);
    }
}
