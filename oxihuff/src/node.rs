//! Huffman tree nodes.
//!
//! A node carries a byte value, an aggregate weight, and two optional owned
//! children. Leaves have no children; internal nodes always have both, with
//! `weight == left.weight + right.weight` and `value` set to the smaller child
//! value. The propagated value only breaks ties while building the tree.

use std::cmp::Ordering;

/// A node in a Huffman tree.
///
/// Equality is structural: two nodes are equal when their values, weights and
/// entire subtrees match. Ordering ranks nodes by `(weight, value)` and ignores
/// the subtrees, so `cmp` returning `Equal` does not imply `==`.
#[derive(Debug, Clone)]
pub struct HuffmanNode {
    value: u8,
    weight: u64,
    left: Option<Box<HuffmanNode>>,
    right: Option<Box<HuffmanNode>>,
}

impl HuffmanNode {
    /// Create a leaf for `value` occurring `weight` times.
    pub fn leaf(value: u8, weight: u64) -> Self {
        Self {
            value,
            weight,
            left: None,
            right: None,
        }
    }

    /// Create an internal node from explicit children.
    ///
    /// `value` and `weight` are taken as given; use [`HuffmanNode::merge`] to
    /// derive them from the children.
    pub fn internal(value: u8, weight: u64, left: HuffmanNode, right: HuffmanNode) -> Self {
        Self {
            value,
            weight,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Merge two nodes into a parent. `lower` becomes the left child.
    pub fn merge(lower: HuffmanNode, higher: HuffmanNode) -> Self {
        let value = lower.value.min(higher.value);
        let weight = lower.weight.saturating_add(higher.weight);
        Self::internal(value, weight, lower, higher)
    }

    /// Byte value (the minimum leaf value for internal nodes).
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Aggregate frequency of this subtree.
    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Left child, reached by a `0` bit.
    #[inline]
    pub fn left(&self) -> Option<&HuffmanNode> {
        self.left.as_deref()
    }

    /// Right child, reached by a `1` bit.
    #[inline]
    pub fn right(&self) -> Option<&HuffmanNode> {
        self.right.as_deref()
    }

    /// Check whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.walk().filter(|node| node.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left().map(|child| (child, depth + 1)));
            pending.extend(node.right().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Pre-order walk over every node of the subtree.
    fn walk(&self) -> impl Iterator<Item = &HuffmanNode> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.right());
            pending.extend(node.left());
            Some(node)
        })
    }
}

impl PartialEq for HuffmanNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value || a.weight != b.weight {
                return false;
            }
            for (x, y) in [(a.left(), b.left()), (a.right(), b.right())] {
                match (x, y) {
                    (Some(x), Some(y)) => pending.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for HuffmanNode {}

impl PartialOrd for HuffmanNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HuffmanNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.value.cmp(&other.value))
    }
}
