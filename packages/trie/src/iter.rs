//! Lazy traversals over a [`PathTrie`](crate::PathTrie).
//!
//! Each iterator keeps its own explicit stack, borrows the trie immutably,
//! and visits nodes depth-first with siblings in component order. Cloning
//! an iterator forks the traversal at its current position.

use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::path_trie::Node;

/// Absolute path of `name` beneath an already-normalized `parent`.
fn child_path(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{parent}{name}")
    } else {
        format!("{parent}/{name}")
    }
}

/// Iterator over `(path, &value)` pairs, created by
/// [`PathTrie::items`](crate::PathTrie::items).
pub struct Items<'a, T> {
    stack: Vec<(String, &'a Node<T>)>,
}

impl<'a, T> Items<'a, T> {
    pub(crate) fn new(start: Option<(String, &'a Node<T>)>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = (String, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            // Reverse so that siblings come off the stack in order.
            for (name, child) in node.children.iter().rev() {
                self.stack.push((child_path(&path, name), child));
            }

            if let Some(value) = &node.value {
                return Some((path, value));
            }
        }
        None
    }
}

impl<T> FusedIterator for Items<'_, T> {}

impl<T> Clone for Items<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// Iterator over value-bearing paths, created by
/// [`PathTrie::keys`](crate::PathTrie::keys).
pub struct Keys<'a, T> {
    items: Items<'a, T>,
}

impl<'a, T> Keys<'a, T> {
    pub(crate) fn new(items: Items<'a, T>) -> Self {
        Self { items }
    }
}

impl<T> Iterator for Keys<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(path, _)| path)
    }
}

impl<T> FusedIterator for Keys<'_, T> {}

impl<T> Clone for Keys<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

/// Iterator over stored values, created by
/// [`PathTrie::values`](crate::PathTrie::values).
///
/// Visits values in the same order as [`Items`] without building paths.
pub struct Values<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values().rev());
            if let Some(value) = &node.value {
                return Some(value);
            }
        }
        None
    }
}

impl<T> FusedIterator for Values<'_, T> {}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// Iterator over the immediate child names of a node, created by
/// [`PathTrie::names`](crate::PathTrie::names).
pub struct Names<'a, T> {
    children: Option<btree_map::Iter<'a, String, Node<T>>>,
}

impl<'a, T> Names<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            children: start.map(|node| node.children.iter()),
        }
    }
}

impl<'a, T> Iterator for Names<'a, T> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.children
            .as_mut()?
            .find(|(_, child)| !child.is_vacant())
            .map(|(name, _)| name.as_str())
    }
}

impl<T> FusedIterator for Names<'_, T> {}

impl<T> Clone for Names<'_, T> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
        }
    }
}
