// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary tree model: integer-labelled nodes that exclusively own their children.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// A binary tree node holding an integer label.
///
/// Each node owns its left and right children outright; dropping a node drops
/// its whole subtree. Trees are built top-down with [`Node::add_children`] and
/// are not mutated while a diagram is being drawn.
///
/// ## Example
///
/// ```rust
/// use understory_tree_diagram::Node;
///
/// let mut root = Node::new(1);
/// root.add_children(2, -1);
///
/// assert_eq!(root.left().map(Node::value), Some(2));
/// assert!(root.right().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    value: i32,
    left: Option<Box<Self>>,
    right: Option<Box<Self>>,
}

impl Node {
    /// Create a leaf node.
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Attach new children.
    ///
    /// A left child is constructed iff `left > 0`, and a right child iff
    /// `right > 0`. Non-positive values mean "no child here" and leave that
    /// side untouched; they are ordinary input, not an error. A positive value
    /// on a side that already has a child replaces it (and its subtree).
    pub fn add_children(&mut self, left: i32, right: i32) {
        if left > 0 {
            self.left = Some(Box::new(Self::new(left)));
        }
        if right > 0 {
            self.right = Some(Box::new(Self::new(right)));
        }
    }

    /// The node's label.
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Mutable access to the left child, for building deeper levels.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child, for building deeper levels.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.left().map_or(0, Self::node_count)
            + self.right().map_or(0, Self::node_count)
    }

    /// Number of levels in this subtree; a lone node has height 1.
    pub fn height(&self) -> usize {
        1 + self
            .left()
            .map_or(0, Self::height)
            .max(self.right().map_or(0, Self::height))
    }

    /// Labels in pre-order (node, left subtree, right subtree).
    pub fn values_pre_order(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack = alloc::vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.value);
            // Right first so the left subtree is popped next.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        out
    }

    /// The twelve-value sample tree.
    ///
    /// ```text
    ///              1
    ///         2         3
    ///       4   5     6   7
    ///      9 10 11 12    8
    /// ```
    pub fn sample() -> Self {
        let mut root = Self::new(1);
        root.add_children(2, 3);
        if let Some(two) = root.left_mut() {
            two.add_children(4, 5);
            if let Some(four) = two.left_mut() {
                four.add_children(9, 10);
            }
            if let Some(five) = two.right_mut() {
                five.add_children(11, 12);
            }
        }
        if let Some(three) = root.right_mut() {
            three.add_children(6, 7);
            if let Some(seven) = three.right_mut() {
                seven.add_children(8, -1);
            }
        }
        root
    }
}
