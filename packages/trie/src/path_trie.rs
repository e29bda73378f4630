//! A generic prefix trie keyed by path components.
//!
//! `PathTrie<T>` provides O(k) point operations where k is the path depth,
//! and prefix-scoped enumeration and clearing that only touch the subtree
//! under the prefix. Every path argument is normalized first, so
//! `"hello/world"` and `"/hello/there/../world"` address the same entry.
//! A path whose `..` climbs above the root is rejected with
//! [`TrieError::Path`] before anything is read or written.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use pathmap_path::{components, Path};
use tracing::trace;

use crate::error::{Result, TrieError};
use crate::iter::{Items, Keys, Names, Values};

/// One level of the trie.
///
/// A node with no value exists only as a route to deeper values. Outside
/// the root, a node with neither a value nor children is never left behind
/// by any operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) children: BTreeMap<String, Node<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            value: None,
            children: BTreeMap::new(),
        }
    }
}

impl<T> Node<T> {
    /// No value and no children.
    pub(crate) fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Holds a value or more than one child, so removing a single child
    /// still leaves it non-vacant.
    fn is_shared(&self) -> bool {
        self.value.is_some() || self.children.len() > 1
    }
}

/// Absolute path string for normalized components.
pub(crate) fn render(parts: &[&str]) -> String {
    format!("/{}", parts.join("/"))
}

/// A prefix trie keyed by path components.
///
/// Each node can optionally hold a value of type T, and has children
/// indexed by path component strings.
///
/// # Example
///
/// ```rust
/// use pathmap_trie::PathTrie;
///
/// let mut trie: PathTrie<i32> = PathTrie::new();
/// trie.set("hello/world", 42)?;
/// assert_eq!(trie.get("/hello/there/../world"), Ok(&42));
///
/// trie.set("/a/b", 1)?;
/// trie.set("/a/c", 2)?;
/// let mut keys: Vec<String> = trie.keys("/a")?.collect();
/// keys.sort();
/// assert_eq!(keys, vec!["/a/b", "/a/c"]);
///
/// trie.clear("/a")?;
/// assert!(!trie.contains("/a/b")?);
/// assert_eq!(trie.len(), 1);
///
/// assert!(trie.get("/../hello/world").is_err());
/// # Ok::<(), pathmap_trie::TrieError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTrie<T> {
    root: Node<T>,
}

impl<T> Default for PathTrie<T> {
    fn default() -> Self {
        Self {
            root: Node::default(),
        }
    }
}

impl<T> PathTrie<T> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to node, creating intermediate nodes as needed.
    fn get_or_create_node(&mut self, parts: &[&str]) -> &mut Node<T> {
        let mut created = 0usize;
        let mut current = &mut self.root;
        for component in parts {
            current = match current.children.entry(component.to_string()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    created += 1;
                    entry.insert(Node::default())
                }
            };
        }
        if created > 0 {
            trace!(path = %render(parts), created, "created trie nodes");
        }
        current
    }

    /// Navigate to node if it exists.
    fn get_node(&self, parts: &[&str]) -> Option<&Node<T>> {
        let mut current = &self.root;
        for component in parts {
            current = current.children.get(*component)?;
        }
        Some(current)
    }

    /// Navigate to node if it exists (mutable).
    fn get_node_mut(&mut self, parts: &[&str]) -> Option<&mut Node<T>> {
        let mut current = &mut self.root;
        for component in parts {
            current = current.children.get_mut(*component)?;
        }
        Some(current)
    }

    /// Get reference to value at exact path.
    pub fn get(&self, path: &str) -> Result<&T> {
        let parts = components(path)?;
        self.get_node(&parts)
            .and_then(|node| node.value.as_ref())
            .ok_or_else(|| TrieError::not_found(&parts))
    }

    /// Get mutable reference to value at exact path.
    pub fn get_mut(&mut self, path: &str) -> Result<&mut T> {
        let parts = components(path)?;
        match self.get_node_mut(&parts).and_then(|node| node.value.as_mut()) {
            Some(value) => Ok(value),
            None => Err(TrieError::not_found(&parts)),
        }
    }

    /// Value at exact path, or `default` when nothing is stored there.
    ///
    /// Fails only if `path` cannot be normalized.
    pub fn get_or<'a>(&'a self, path: &str, default: &'a T) -> Result<&'a T> {
        let parts = components(path)?;
        Ok(self
            .get_node(&parts)
            .and_then(|node| node.value.as_ref())
            .unwrap_or(default))
    }

    /// Check if exact path has a value.
    pub fn contains(&self, path: &str) -> Result<bool> {
        let parts = components(path)?;
        Ok(self
            .get_node(&parts)
            .is_some_and(|node| node.value.is_some()))
    }

    /// Store a value at path. Returns previous value if any.
    pub fn set(&mut self, path: &str, value: T) -> Result<Option<T>> {
        let parts = components(path)?;
        Ok(self.insert_at(&parts, value))
    }

    /// Store a value at an already-normalized path. Returns previous value if any.
    pub fn insert(&mut self, path: &Path, value: T) -> Option<T> {
        let parts: Vec<&str> = path.iter().collect();
        self.insert_at(&parts, value)
    }

    fn insert_at(&mut self, parts: &[&str], value: T) -> Option<T> {
        self.get_or_create_node(parts).value.replace(value)
    }

    /// Return the value at path, storing `value` there first if empty.
    pub fn set_default(&mut self, path: &str, value: T) -> Result<&mut T> {
        let parts = components(path)?;
        Ok(self.get_or_create_node(&parts).value.get_or_insert(value))
    }

    /// Remove and return the value at exact path, `Ok(None)` if absent.
    ///
    /// Ancestors left without a value or children are pruned, up to but not
    /// including the root.
    pub fn remove(&mut self, path: &str) -> Result<Option<T>> {
        let parts = components(path)?;
        Ok(self.remove_at(&parts))
    }

    fn remove_at(&mut self, parts: &[&str]) -> Option<T> {
        // history[d] records whether the node at depth d keeps something
        // besides the branch followed out of it.
        let mut history = Vec::with_capacity(parts.len());
        let mut current = &mut self.root;
        for component in parts {
            history.push(current.is_shared());
            current = current.children.get_mut(*component)?;
        }

        let value = current.value.take()?;
        let vacant = current.children.is_empty();
        if vacant {
            self.prune(parts, &history);
        }
        Some(value)
    }

    /// Remove the value at exact path, failing with `NotFound` if absent.
    pub fn delete(&mut self, path: &str) -> Result<T> {
        let parts = components(path)?;
        self.remove_at(&parts)
            .ok_or_else(|| TrieError::not_found(&parts))
    }

    /// Remove and return the value at path, or `default` if absent.
    ///
    /// Fails only if `path` cannot be normalized.
    pub fn pop(&mut self, path: &str, default: T) -> Result<T> {
        Ok(self.remove(path)?.unwrap_or(default))
    }

    /// Excise the vacant node at the end of `parts` together with every
    /// ancestor that only existed to reach it.
    ///
    /// Walks `history` from the deepest step upward to the first node that
    /// must survive (the root always does) and detaches the dead chain
    /// below it in one edit.
    fn prune(&mut self, parts: &[&str], history: &[bool]) {
        let Some(anchor) = (0..parts.len())
            .rev()
            .find(|&depth| depth == 0 || history[depth])
        else {
            return;
        };

        if let Some(survivor) = self.get_node_mut(&parts[..anchor]) {
            survivor.children.remove(parts[anchor]);
            trace!(
                path = %render(parts),
                pruned = parts.len() - anchor,
                "pruned empty trie nodes"
            );
        }
    }

    /// Detach and return the entire subtree at prefix, re-rooted at `/`.
    ///
    /// Returns `Ok(None)` if nothing is stored at or below prefix. Ancestors
    /// left empty by the detach are pruned. Taking `/` empties the trie but
    /// keeps its root.
    pub fn take_subtree(&mut self, prefix: &str) -> Result<Option<PathTrie<T>>> {
        let parts = components(prefix)?;
        Ok(self.take_subtree_at(&parts))
    }

    fn take_subtree_at(&mut self, parts: &[&str]) -> Option<PathTrie<T>> {
        let Some((name, parents)) = parts.split_last() else {
            let root = std::mem::take(&mut self.root);
            if root.is_vacant() {
                return None;
            }
            trace!("detached entire trie");
            return Some(PathTrie { root });
        };

        let mut history = Vec::with_capacity(parents.len());
        let mut current = &mut self.root;
        for component in parents {
            history.push(current.is_shared());
            current = current.children.get_mut(*component)?;
        }

        let root = current.children.remove(*name)?;
        let vacant = current.is_vacant();
        if vacant {
            self.prune(parents, &history);
        }
        trace!(prefix = %render(parts), "detached trie subtree");
        Some(PathTrie { root })
    }

    /// Remove every value at or below prefix. A no-op if prefix is absent.
    pub fn clear(&mut self, prefix: &str) -> Result<()> {
        drop(self.take_subtree(prefix)?);
        Ok(())
    }

    /// Count of values in trie (not nodes).
    pub fn len(&self) -> usize {
        Values::new(Some(&self.root)).count()
    }

    /// True if no values anywhere in trie.
    pub fn is_empty(&self) -> bool {
        self.root.is_vacant()
    }

    /// Find deepest ancestor with a value.
    /// Returns (value_ref, remaining_suffix).
    pub fn find_ancestor(&self, path: &str) -> Result<Option<(&T, Path)>> {
        let parts = components(path)?;
        let mut current = &self.root;
        let mut last_value: Option<&T> = self.root.value.as_ref();
        let mut last_depth: usize = 0;

        for (depth, component) in parts.iter().enumerate() {
            match current.children.get(*component) {
                Some(child) => {
                    current = child;
                    if let Some(value) = &child.value {
                        last_value = Some(value);
                        last_depth = depth + 1;
                    }
                }
                None => break,
            }
        }

        Ok(last_value.map(|value| {
            let suffix = Path {
                components: parts[last_depth..].iter().map(|c| c.to_string()).collect(),
            };
            (value, suffix)
        }))
    }

    /// Iterate over `(path, value)` pairs at or below prefix.
    pub fn items(&self, prefix: &str) -> Result<Items<'_, T>> {
        let parts = components(prefix)?;
        let start = self.get_node(&parts).map(|node| (render(&parts), node));
        Ok(Items::new(start))
    }

    /// Iterate over value-bearing paths at or below prefix.
    pub fn keys(&self, prefix: &str) -> Result<Keys<'_, T>> {
        Ok(Keys::new(self.items(prefix)?))
    }

    /// Iterate over values at or below prefix.
    pub fn values(&self, prefix: &str) -> Result<Values<'_, T>> {
        let parts = components(prefix)?;
        Ok(Values::new(self.get_node(&parts)))
    }

    /// Iterate over the names of the non-empty children directly beneath
    /// prefix, like a directory listing.
    pub fn names(&self, prefix: &str) -> Result<Names<'_, T>> {
        let parts = components(prefix)?;
        Ok(Names::new(self.get_node(&parts)))
    }

    /// Iterate over all (path, value) pairs.
    pub fn iter(&self) -> Items<'_, T> {
        Items::new(Some((render(&[]), &self.root)))
    }
}

impl<'a, T> IntoIterator for &'a PathTrie<T> {
    type Item = (String, &'a T);
    type IntoIter = Items<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<(Path, T)> for PathTrie<T> {
    fn extend<I: IntoIterator<Item = (Path, T)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.insert(&path, value);
        }
    }
}

impl<T> FromIterator<(Path, T)> for PathTrie<T> {
    fn from_iter<I: IntoIterator<Item = (Path, T)>>(iter: I) -> Self {
        let mut trie = PathTrie::new();
        trie.extend(iter);
        trie
    }
}
