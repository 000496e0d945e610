//! Code table generation.
//!
//! Codes are the root-to-leaf paths of the tree, written as ASCII `'0'` (left)
//! and `'1'` (right). [`CodeIter`] yields them lazily, left to right, using an
//! explicit stack; [`CodeTable`] materializes them into 256 slots.

use crate::frequency::{ALPHABET_SIZE, FrequencyTable};
use crate::node::HuffmanNode;

/// Depth-first iterator over `(code, byte)` pairs in left-to-right leaf order.
///
/// The iterator is finite and single-use; call [`HuffmanNode::codes`] again
/// for a fresh traversal.
#[derive(Debug)]
pub struct CodeIter<'a> {
    stack: Vec<(&'a HuffmanNode, String)>,
}

impl<'a> CodeIter<'a> {
    /// Traverse `tree`, or nothing when the tree is absent.
    pub fn new(tree: Option<&'a HuffmanNode>) -> Self {
        Self {
            stack: tree.map(|root| (root, String::new())).into_iter().collect(),
        }
    }
}

impl Iterator for CodeIter<'_> {
    type Item = (String, u8);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, path) = self.stack.pop()?;
            if node.is_leaf() {
                return Some((path, node.value()));
            }
            // Right first so the left subtree is popped next.
            if let Some(right) = node.right() {
                self.stack.push((right, format!("{path}1")));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, format!("{path}0")));
            }
        }
    }
}

impl HuffmanNode {
    /// Lazily enumerate the `(code, byte)` pairs of this tree.
    pub fn codes(&self) -> CodeIter<'_> {
        CodeIter::new(Some(self))
    }
}

/// Code for every byte value; an empty string means "no code".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [String; ALPHABET_SIZE],
}

impl CodeTable {
    /// Build the table from a tree.
    ///
    /// An absent tree gives an all-empty table. A single-leaf tree also gives
    /// its byte the empty code; callers must handle that alphabet separately.
    pub fn from_tree(tree: Option<&HuffmanNode>) -> Self {
        let mut codes: [String; ALPHABET_SIZE] = std::array::from_fn(|_| String::new());
        for (code, byte) in CodeIter::new(tree) {
            codes[byte as usize] = code;
        }
        Self { codes }
    }

    /// Code for `byte` (empty if unassigned).
    #[inline]
    pub fn get(&self, byte: u8) -> &str {
        &self.codes[byte as usize]
    }

    /// `(byte, code)` for every assigned code, ascending by byte.
    pub fn iter_assigned(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        (0..=u8::MAX)
            .map(|byte| (byte, self.get(byte)))
            .filter(|(_, code)| !code.is_empty())
    }

    /// Longest assigned code length.
    pub fn max_len(&self) -> usize {
        self.codes.iter().map(String::len).max().unwrap_or(0)
    }

    /// Number of body bits needed to encode data with these frequencies.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter_nonzero()
            .map(|(byte, count)| count.saturating_mul(self.get(byte).len() as u64))
            .fold(0u64, u64::saturating_add)
    }
}

/// Build the code table for a tree.
pub fn create_codes(tree: Option<&HuffmanNode>) -> CodeTable {
    CodeTable::from_tree(tree)
}
