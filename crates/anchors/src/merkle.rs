//! The binary Merkle tree Blobstream commits data root tuples under.
//!
//! Tendermint-style construction with RFC 6962 domain separation: leaves
//! hash as `sha256(0x00 || leaf)`, inner nodes as `sha256(0x01 || l || r)`,
//! and a tree of `n > 1` leaves splits at the largest power of two strictly
//! smaller than `n`. Side nodes are ordered leaf level first, so the
//! topmost aunt sits at the end of the path.

use alloy_primitives::B256;
use sha2::{Digest, Sha256};

const LEAF_PREFIX: u8 = 0x00;
const INNER_PREFIX: u8 = 0x01;

/// The Merkle path cannot prove the claimed position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MerkleError {
    /// The leaf key does not index into the claimed tree.
    #[error("leaf key {key} out of range for a tree of {num_leaves} leaves")]
    KeyOutOfRange {
        /// Claimed leaf index.
        key: u64,
        /// Claimed leaf count.
        num_leaves: u64,
    },
    /// The number of side nodes does not match the path the claimed key
    /// and leaf count dictate.
    #[error("side node count does not match the claimed tree shape")]
    WrongSideNodeCount,
    /// A tree with no leaves proves nothing.
    #[error("cannot prove inclusion in an empty tree")]
    EmptyTree,
}

/// Hashes a raw leaf into its tree node.
pub fn leaf_digest(leaf: &[u8]) -> B256 {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(leaf);
    B256::from_slice(&hasher.finalize())
}

/// Hashes two child nodes into their parent.
pub fn inner_digest(left: &B256, right: &B256) -> B256 {
    let mut hasher = Sha256::new();
    hasher.update([INNER_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    B256::from_slice(&hasher.finalize())
}

/// Largest power of two strictly smaller than `n`. Callers guarantee
/// `n >= 2`.
fn split_point(n: u64) -> u64 {
    debug_assert!(n >= 2);
    1 << (63 - (n - 1).leading_zeros())
}

/// Recomputes the root committed by an inclusion path.
///
/// `leaf` is the already-hashed leaf node at `key`. The recursion consumes
/// every side node exactly once; a path that is too short or too long for
/// the claimed tree shape is rejected rather than silently truncated.
pub fn compute_root(
    key: u64,
    num_leaves: u64,
    leaf: B256,
    side_nodes: &[B256],
) -> Result<B256, MerkleError> {
    if num_leaves == 0 {
        return Err(MerkleError::EmptyTree);
    }
    if key >= num_leaves {
        return Err(MerkleError::KeyOutOfRange { key, num_leaves });
    }
    subtree_root(key, num_leaves, leaf, side_nodes)
}

fn subtree_root(
    key: u64,
    num_leaves: u64,
    leaf: B256,
    side_nodes: &[B256],
) -> Result<B256, MerkleError> {
    if num_leaves == 1 {
        return if side_nodes.is_empty() {
            Ok(leaf)
        } else {
            Err(MerkleError::WrongSideNodeCount)
        };
    }

    let (aunt, rest) = side_nodes
        .split_last()
        .ok_or(MerkleError::WrongSideNodeCount)?;
    let split = split_point(num_leaves);

    if key < split {
        let left = subtree_root(key, split, leaf, rest)?;
        Ok(inner_digest(&left, aunt))
    } else {
        let right = subtree_root(key - split, num_leaves - split, leaf, rest)?;
        Ok(inner_digest(aunt, &right))
    }
}

/// Builds the tree over already-hashed leaves and returns the root together
/// with one inclusion path per leaf.
///
/// Fixture construction only; on a real deployment paths come from the DA
/// layer's RPC.
pub fn tree_with_proofs(leaves: &[B256]) -> Result<(B256, Vec<Vec<B256>>), MerkleError> {
    if leaves.is_empty() {
        return Err(MerkleError::EmptyTree);
    }

    let mut paths = vec![Vec::new(); leaves.len()];
    let root = build(leaves, 0, &mut paths);
    Ok((root, paths))
}

fn build(leaves: &[B256], offset: usize, paths: &mut [Vec<B256>]) -> B256 {
    if leaves.len() == 1 {
        return leaves[0];
    }

    let split = split_point(leaves.len() as u64) as usize;
    let left = build(&leaves[..split], offset, paths);
    let right = build(&leaves[split..], offset + split, paths);

    // Deeper aunts were pushed by the recursion above, so appending here
    // keeps paths ordered leaf level first.
    for path in &mut paths[offset..offset + split] {
        path.push(right);
    }
    for path in &mut paths[offset + split..offset + leaves.len()] {
        path.push(left);
    }

    inner_digest(&left, &right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(n: u8) -> Vec<B256> {
        (0..n).map(|i| leaf_digest(&[i])).collect()
    }

    #[test]
    fn test_single_leaf_tree_root_is_the_leaf() {
        let leaf = leaf_digest(b"only");
        assert_eq!(compute_root(0, 1, leaf, &[]).unwrap(), leaf);
    }

    #[test]
    fn test_two_leaf_tree() {
        let l = leaves(2);
        let root = inner_digest(&l[0], &l[1]);

        assert_eq!(compute_root(0, 2, l[0], &[l[1]]).unwrap(), root);
        assert_eq!(compute_root(1, 2, l[1], &[l[0]]).unwrap(), root);
    }

    #[test]
    fn test_three_leaf_tree_splits_below_the_midpoint() {
        // split_point(3) = 2, so the tree is ((l0, l1), l2).
        let l = leaves(3);
        let left = inner_digest(&l[0], &l[1]);
        let root = inner_digest(&left, &l[2]);

        assert_eq!(compute_root(0, 3, l[0], &[l[1], l[2]]).unwrap(), root);
        assert_eq!(compute_root(2, 3, l[2], &[left]).unwrap(), root);
    }

    #[test]
    fn test_tree_with_proofs_paths_verify() {
        for n in 1..=8u8 {
            let l = leaves(n);
            let (root, paths) = tree_with_proofs(&l).unwrap();

            for (key, path) in paths.iter().enumerate() {
                let recomputed =
                    compute_root(key as u64, n as u64, l[key], path).unwrap();
                assert_eq!(recomputed, root, "n = {n}, key = {key}");
            }
        }
    }

    #[test]
    fn test_key_out_of_range() {
        let l = leaves(2);
        assert_eq!(
            compute_root(2, 2, l[0], &[l[1]]).unwrap_err(),
            MerkleError::KeyOutOfRange {
                key: 2,
                num_leaves: 2
            }
        );
    }

    #[test]
    fn test_path_length_must_match_tree_shape() {
        let l = leaves(4);
        let (_root, paths) = tree_with_proofs(&l).unwrap();

        // Too short.
        assert_eq!(
            compute_root(0, 4, l[0], &paths[0][..1]).unwrap_err(),
            MerkleError::WrongSideNodeCount
        );
        // Too long.
        let mut padded = paths[0].clone();
        padded.push(l[3]);
        assert_eq!(
            compute_root(0, 4, l[0], &padded).unwrap_err(),
            MerkleError::WrongSideNodeCount
        );
    }

    #[test]
    fn test_empty_tree_is_rejected() {
        assert_eq!(
            compute_root(0, 0, leaf_digest(b"x"), &[]).unwrap_err(),
            MerkleError::EmptyTree
        );
        assert_eq!(tree_with_proofs(&[]).unwrap_err(), MerkleError::EmptyTree);
    }
}
