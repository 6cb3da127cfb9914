//! Hierarchical grouping of brush definitions.
//!
//! [`build_tree`] folds the flat catalogue into a rooted tree keyed by the
//! dot-segments of each definition's container path. The tree is an
//! inspection structure: emission consumes the flat sorted sequence, not
//! the tree.
//!
//! Children are created lazily while walking the input, so sibling order is
//! first-seen order, not alphabetical. The tree owns its nodes outright
//! (plain child vectors, no parent back-references) and is read-only after
//! construction.

use crate::brush::BrushDefinition;

/// A node in a container tree.
///
/// `name` is one path segment (empty for the synthetic root), `values` holds
/// the items whose container path terminates exactly here, and `children`
/// holds one node per distinct next segment, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem<T> {
    name: String,
    values: Vec<T>,
    children: Vec<TreeItem<T>>,
}

impl<T> TreeItem<T> {
    /// Creates an empty node with the given segment name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The path segment this node represents.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items attached directly at this node, in insertion order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Child nodes, in first-seen order. Names are unique among siblings.
    pub fn children(&self) -> &[TreeItem<T>] {
        &self.children
    }

    /// Returns the child with the given name, creating and appending it if
    /// absent.
    fn child_mut(&mut self, name: &str) -> &mut TreeItem<T> {
        let idx = match self.children.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.children.push(TreeItem::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    /// Appends an item at this node.
    fn push_value(&mut self, value: T) {
        self.values.push(value);
    }

    /// Iterates all values in the subtree in pre-order: this node's values
    /// first, then each child's subtree in child order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Vec::new();
        for child in self.children.iter().rev() {
            stack.push(child);
        }
        Iter {
            values: self.values.iter(),
            stack,
        }
    }
}

/// Pre-order iterator over all values of a [`TreeItem`] subtree.
pub struct Iter<'a, T> {
    values: std::slice::Iter<'a, T>,
    stack: Vec<&'a TreeItem<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.values.next() {
                return Some(value);
            }
            let node = self.stack.pop()?;
            // Children go on the stack reversed so the first child is
            // visited before its siblings.
            for child in node.children.iter().rev() {
                self.stack.push(child);
            }
            self.values = node.values.iter();
        }
    }
}

impl<'a, T> IntoIterator for &'a TreeItem<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Groups a flat sequence of brush definitions into a container tree.
///
/// For each definition, walks from the root along
/// [`container_parts`](BrushDefinition::container_parts), creating missing
/// children as it goes, and attaches the definition at the final node. A
/// definition with no container parts lands directly at the root. Insertion
/// is order-preserving and never fails; an empty input yields a bare root.
pub fn build_tree(definitions: &[BrushDefinition]) -> TreeItem<&BrushDefinition> {
    let mut root = TreeItem::new("");

    for definition in definitions {
        let mut current = &mut root;
        for part in definition.container_parts() {
            current = current.child_mut(part);
        }
        current.push_value(definition);
    }

    root
}
