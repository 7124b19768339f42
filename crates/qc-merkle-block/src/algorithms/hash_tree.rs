//! # Partial Merkle Tree Construction
//!
//! Builds the pruned hash list and flag bitstream of a merkle block.
//!
//! The tree is never materialized: nodes are addressed purely by
//! `(height, position)` over the leaf slice, with height 0 at the leaves.
//! When a level has an odd width, the last node is paired with itself.

use bitvec::prelude::*;

use super::hashing::hash_pair;
use crate::domain::{Hash, MerkleBlockError, PartialTree};

/// Number of nodes at `height` for a tree over `leaf_count` leaves.
pub fn tree_width(leaf_count: usize, height: u32) -> usize {
    (leaf_count + (1usize << height) - 1) >> height
}

/// Height of the root for a tree over `leaf_count` leaves.
///
/// `ceil(log2(leaf_count))`, so a single leaf is its own root at height 0.
pub fn tree_height(leaf_count: usize) -> u32 {
    let mut height = 0;
    while tree_width(leaf_count, height) > 1 {
        height += 1;
    }
    height
}

/// Hash of the node at `(height, pos)`, computed from the leaves up.
pub fn node_hash(leaves: &[Hash], height: u32, pos: usize) -> Hash {
    if height == 0 {
        return leaves[pos];
    }
    let left = node_hash(leaves, height - 1, pos * 2);
    let right = if pos * 2 + 1 < tree_width(leaves.len(), height - 1) {
        node_hash(leaves, height - 1, pos * 2 + 1)
    } else {
        left
    };
    hash_pair(&left, &right)
}

/// Canonical Merkle root of a block's transaction hashes.
///
/// Returns `None` for an empty list.
pub fn compute_merkle_root(leaves: &[Hash]) -> Option<Hash> {
    if leaves.is_empty() {
        return None;
    }
    Some(node_hash(leaves, tree_height(leaves.len()), 0))
}

/// Pruned view of a block's Merkle tree under a match bitmap.
pub struct HashTree<'a> {
    leaves: &'a [Hash],
    height: u32,
    /// `descendant_matched[h][p]`: some leaf under `(h, p)` matched.
    descendant_matched: Vec<Vec<bool>>,
}

impl<'a> HashTree<'a> {
    /// Create a tree over `leaves`, with one bitmap entry per leaf.
    pub fn new(leaves: &'a [Hash], bitmap: &[bool]) -> Result<Self, MerkleBlockError> {
        if leaves.is_empty() {
            return Err(MerkleBlockError::EmptyBlock);
        }
        if bitmap.len() != leaves.len() {
            return Err(MerkleBlockError::BitmapLengthMismatch {
                expected: leaves.len(),
                got: bitmap.len(),
            });
        }

        let height = tree_height(leaves.len());
        let mut descendant_matched = Vec::with_capacity(height as usize + 1);
        descendant_matched.push(bitmap.to_vec());

        for _ in 0..height {
            let below = descendant_matched
                .last()
                .map(Vec::as_slice)
                .unwrap_or_default();
            // A missing right child stands in as a copy of the left one,
            // which cannot change the OR.
            let level: Vec<bool> = below
                .chunks(2)
                .map(|pair| pair.iter().any(|&matched| matched))
                .collect();
            descendant_matched.push(level);
        }

        Ok(Self {
            leaves,
            height,
            descendant_matched,
        })
    }

    /// Height of the root.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Merkle root of the full, unpruned tree.
    pub fn root(&self) -> Hash {
        node_hash(self.leaves, self.height, 0)
    }

    /// Walk the tree depth-first and emit the pruned proof.
    pub fn build(&self) -> PartialTree {
        let mut partial = PartialTree {
            hashes: Vec::new(),
            flags: BitVec::new(),
            matched_positions: Vec::new(),
        };
        self.traverse(self.height, 0, &mut partial);
        partial
    }

    fn traverse(&self, height: u32, pos: usize, out: &mut PartialTree) {
        let parent_of_match = self.descendant_matched[height as usize][pos];
        out.flags.push(parent_of_match);

        if height == 0 || !parent_of_match {
            out.hashes.push(node_hash(self.leaves, height, pos));
            if height == 0 && parent_of_match {
                out.matched_positions.push(pos);
            }
            return;
        }

        self.traverse(height - 1, pos * 2, out);
        if pos * 2 + 1 < tree_width(self.leaves.len(), height - 1) {
            self.traverse(height - 1, pos * 2 + 1, out);
        }
    }
}

/// Build the pruned hash list and flag bits for `leaves` under `bitmap`.
pub fn build_partial_tree(leaves: &[Hash], bitmap: &[bool]) -> Result<PartialTree, MerkleBlockError> {
    Ok(HashTree::new(leaves, bitmap)?.build())
}
