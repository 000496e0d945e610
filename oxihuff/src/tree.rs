//! Huffman tree construction.
//!
//! Leaves are queued in an [`OrderedList`] ranked by `(weight, value)`; the two
//! lowest-ranked nodes are merged until a single root remains. Because the list
//! is stable and the propagated minimum value breaks weight ties, the same
//! frequency table always yields the same tree. The decoder rebuilds the tree
//! from the header alone, so this determinism is what makes decoding possible.

use crate::frequency::FrequencyTable;
use crate::node::HuffmanNode;
use oxihuff_core::OrderedList;
use tracing::{debug, trace};

/// Build the Huffman tree for a frequency table.
///
/// Returns `None` when every count is zero and a single leaf when exactly one
/// byte is present. Otherwise every present byte becomes a leaf of a full
/// binary tree.
pub fn build_tree(frequencies: &FrequencyTable) -> Option<HuffmanNode> {
    let mut queue: OrderedList<HuffmanNode> = frequencies
        .iter_nonzero()
        .map(|(byte, count)| HuffmanNode::leaf(byte, count))
        .collect();
    let leaves = queue.len();

    loop {
        let lower = queue.pop_first()?;
        let Some(higher) = queue.pop_first() else {
            debug!(leaves, depth = lower.depth(), "built huffman tree");
            return Some(lower);
        };
        trace!(
            left = lower.value(),
            left_weight = lower.weight(),
            right = higher.value(),
            right_weight = higher.weight(),
            "merge"
        );
        queue.insert(HuffmanNode::merge(lower, higher));
    }
}
