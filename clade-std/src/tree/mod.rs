//! Namespace tree for hierarchical command storage.
//!
//! Commands are addressed by a namespace path plus a command text. The tree
//! keeps its nodes in an arena (`Vec<Node>` addressed by [`NodeId`]), so a
//! node is reachable only through its path and branches never alias.
//!
//! # Overview
//!
//! Insertion builds a single-branch [`Fragment`] and deep-merges it into the
//! arena:
//!
//! - each fragment child is merged into the existing child with the same
//!   segment, or into a fresh node;
//! - a fragment commands slot is combined key by key with the target slot, so
//!   a same-named command is replaced and every other command survives.
//!
//! Nothing is ever removed: a commands slot, once created, stays.
//!
//! # Example
//!
//! ```rust
//! use clade_std::tree::NamespaceTree;
//!
//! let mut tree = NamespaceTree::new();
//! tree.insert(&["remote"], "add", 1);
//! tree.insert(&["remote"], "remove", 2);
//!
//! assert_eq!(tree.find(&["remote"], "add"), Some(&1));
//! assert_eq!(tree.find_all(&["remote"]).map(|slot| slot.len()), Some(2));
//! assert!(tree.find_all(&["branch"]).is_none());
//! ```

mod fragment;

pub use fragment::Fragment;

use std::collections::HashMap;

/// The commands stored at one node, keyed by command text.
pub type CommandSlot<V> = HashMap<String, V>;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug)]
struct Node<V> {
    children: HashMap<String, NodeId>,
    commands: Option<CommandSlot<V>>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            commands: None,
        }
    }
}

/// An arena-backed tree of commands.
#[derive(Debug)]
pub struct NamespaceTree<V> {
    nodes: Vec<Node<V>>,
    size: usize,
}

impl<V> Default for NamespaceTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> NamespaceTree<V> {
    /// Create a tree holding only an empty root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            size: 0,
        }
    }

    /// Insert `value` as command `text` under `path`.
    ///
    /// Returns the value previously stored at the same address.
    pub fn insert<S: AsRef<str>>(
        &mut self,
        path: &[S],
        text: impl Into<String>,
        value: V,
    ) -> Option<V> {
        self.merge(Fragment::branch(path, text, value)).pop()
    }

    /// Deep-merge a fragment into the root.
    ///
    /// Returns every value that was overwritten.
    pub fn merge(&mut self, fragment: Fragment<V>) -> Vec<V> {
        let mut replaced = Vec::new();
        self.merge_at(ROOT, fragment, &mut replaced);
        replaced
    }

    fn merge_at(&mut self, target: NodeId, fragment: Fragment<V>, replaced: &mut Vec<V>) {
        let Fragment { children, commands } = fragment;

        for (segment, child) in children {
            let child_id = self.child_or_insert(target, segment);
            self.merge_at(child_id, child, replaced);
        }

        if let Some(commands) = commands {
            let slot = self.nodes[target.0]
                .commands
                .get_or_insert_with(HashMap::new);
            for (text, value) in commands {
                match slot.insert(text, value) {
                    Some(old) => replaced.push(old),
                    None => self.size += 1,
                }
            }
        }
    }

    fn child_or_insert(&mut self, parent: NodeId, segment: String) -> NodeId {
        if let Some(&id) = self.nodes[parent.0].children.get(&segment) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[parent.0].children.insert(segment, id);
        id
    }

    fn locate<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId> {
        path.iter().try_fold(ROOT, |node, segment| {
            self.nodes[node.0].children.get(segment.as_ref()).copied()
        })
    }

    /// All commands stored directly under `path`.
    ///
    /// `None` when a segment is missing, or the node has no commands.
    pub fn find_all<S: AsRef<str>>(&self, path: &[S]) -> Option<&CommandSlot<V>> {
        let node = self.locate(path)?;
        self.nodes[node.0]
            .commands
            .as_ref()
            .filter(|slot| !slot.is_empty())
    }

    /// The command `text` under `path`.
    pub fn find<S: AsRef<str>>(&self, path: &[S], text: &str) -> Option<&V> {
        self.find_all(path)?.get(text)
    }

    /// Number of stored commands.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if no command has been stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Every stored command as `(path, text, value)`, depth first with
    /// segments and texts in lexical order.
    pub fn entries(&self) -> Vec<(Vec<String>, &str, &V)> {
        let mut out = Vec::with_capacity(self.size);
        let mut path = Vec::new();
        self.collect(ROOT, &mut path, &mut out);
        out
    }

    fn collect<'a>(
        &'a self,
        node: NodeId,
        path: &mut Vec<String>,
        out: &mut Vec<(Vec<String>, &'a str, &'a V)>,
    ) {
        let node = &self.nodes[node.0];

        if let Some(slot) = &node.commands {
            let mut texts: Vec<_> = slot.iter().collect();
            texts.sort_by(|a, b| a.0.cmp(b.0));
            for (text, value) in texts {
                out.push((path.clone(), text.as_str(), value));
            }
        }

        let mut children: Vec<_> = node.children.iter().collect();
        children.sort_by(|a, b| a.0.cmp(b.0));
        for (segment, &child) in children {
            path.push(segment.clone());
            self.collect(child, path, out);
            path.pop();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_is_empty() {
        let tree: NamespaceTree<i32> = NamespaceTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.find_all::<&str>(&[]).is_none());
    }

    #[test]
    fn test_insert_same_address_twice_keeps_one_entry() {
        let mut tree = NamespaceTree::new();
        assert_eq!(tree.insert(&["db"], "migrate", 1), None);
        assert_eq!(tree.insert(&["db"], "migrate", 2), Some(1));

        let slot = tree.find_all(&["db"]).unwrap();
        assert_eq!(slot.len(), 1);
        assert_eq!(slot["migrate"], 2);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_siblings_survive() {
        let mut tree = NamespaceTree::new();
        tree.insert(&["a"], "b", "first");
        tree.insert(&["a"], "c", "second");

        assert_eq!(tree.find(&["a"], "b"), Some(&"first"));
        assert_eq!(tree.find(&["a"], "c"), Some(&"second"));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_deeper_branch_does_not_clobber_parent_commands() {
        let mut tree = NamespaceTree::new();
        tree.insert(&["remote"], "add", 1);
        tree.insert(&["remote", "add"], "force", 2);
        tree.insert::<&str>(&[], "remote", 3);

        assert_eq!(tree.find(&["remote"], "add"), Some(&1));
        assert_eq!(tree.find(&["remote", "add"], "force"), Some(&2));
        assert_eq!(tree.find::<&str>(&[], "remote"), Some(&3));
    }

    #[test]
    fn test_path_miss() {
        let mut tree = NamespaceTree::new();
        tree.insert(&["x"], "z", 0);

        assert!(tree.find_all(&["x", "y"]).is_none());
        assert!(tree.find_all(&["q"]).is_none());
        assert_eq!(tree.find(&["x"], "y"), None);
    }

    #[test]
    fn test_interior_node_without_commands() {
        let mut tree = NamespaceTree::new();
        tree.insert(&["a", "b"], "c", 0);

        assert!(tree.find_all(&["a"]).is_none());
        assert!(tree.find_all(&["a", "b"]).is_some());
    }

    #[test]
    fn test_merge_multi_branch_fragment() {
        let mut tree = NamespaceTree::new();
        tree.insert(&["a"], "keep", 0);

        let fragment = Fragment::new()
            .with_child(
                "a",
                Fragment::new()
                    .with_command("x", 1)
                    .with_command("keep", 10),
            )
            .with_child("b", Fragment::new().with_command("y", 2))
            .with_command("top", 3);

        let replaced = tree.merge(fragment);

        assert_eq!(replaced, vec![0]);
        assert_eq!(tree.find(&["a"], "keep"), Some(&10));
        assert_eq!(tree.find(&["a"], "x"), Some(&1));
        assert_eq!(tree.find(&["b"], "y"), Some(&2));
        assert_eq!(tree.find::<&str>(&[], "top"), Some(&3));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_merging_empty_fragment_changes_nothing() {
        let mut tree = NamespaceTree::new();
        tree.insert(&["a"], "b", 1);

        assert!(tree.merge(Fragment::new()).is_empty());
        assert_eq!(tree.entries().len(), 1);
    }

    #[test]
    fn test_entries_are_ordered() {
        let mut tree = NamespaceTree::new();
        tree.insert(&["z"], "last", 3);
        tree.insert(&["a"], "second", 2);
        tree.insert(&["a"], "first", 1);
        tree.insert::<&str>(&[], "root", 0);

        let entries: Vec<_> = tree
            .entries()
            .into_iter()
            .map(|(path, text, value)| (path.join(" "), text.to_string(), *value))
            .collect();

        assert_eq!(
            entries,
            vec![
                (String::new(), "root".to_string(), 0),
                ("a".to_string(), "first".to_string(), 1),
                ("a".to_string(), "second".to_string(), 2),
                ("z".to_string(), "last".to_string(), 3),
            ]
        );
    }
}
