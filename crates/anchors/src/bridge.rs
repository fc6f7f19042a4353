//! Reference attestation bridge.
//!
//! Holds the tuple roots the DA validator set attested, keyed by
//! commitment nonce, and checks inclusion proofs against them by
//! recomputing the binary Merkle root of the ABI-encoded data root tuple.
//! A production bridge additionally verifies validator signatures over
//! each tuple root before storing it; that aggregation happens upstream of
//! this interface.

use crate::merkle;
use alloy_primitives::{B256, U256};
use alloy_sol_types::SolValue;
use kanoa_bindings::{BlobstreamProof, DataRootTuple};
use kanoa_verifier::AttestationBridge;
use std::collections::HashMap;
use tracing::debug;

/// In-memory store of attested tuple roots.
#[derive(Debug, Clone, Default)]
pub struct MerkleAttestationBridge {
    tuple_roots: HashMap<u64, B256>,
}

impl MerkleAttestationBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the tuple root attested at `tuple_root_nonce`. Later
    /// attestations for the same nonce overwrite, mirroring the bridge
    /// contract's relay behavior.
    pub fn attest(&mut self, tuple_root_nonce: u64, tuple_root: B256) {
        debug!(tuple_root_nonce, %tuple_root, "recording attested tuple root");
        self.tuple_roots.insert(tuple_root_nonce, tuple_root);
    }

    /// The tuple root attested at a nonce, if any.
    pub fn tuple_root(&self, tuple_root_nonce: u64) -> Option<B256> {
        self.tuple_roots.get(&tuple_root_nonce).copied()
    }

    fn recompute_root(proof: &BlobstreamProof) -> Result<B256, merkle::MerkleError> {
        let leaf = proof.data_root_tuple().abi_encode();
        merkle::compute_root(
            proof.key,
            proof.num_leaves,
            merkle::leaf_digest(&leaf),
            &proof.side_nodes,
        )
    }
}

impl AttestationBridge for MerkleAttestationBridge {
    fn verify_attestation(&self, tuple_root_nonce: u64, proof: &BlobstreamProof) -> bool {
        let Some(attested) = self.tuple_roots.get(&tuple_root_nonce) else {
            debug!(tuple_root_nonce, "no tuple root attested at nonce");
            return false;
        };

        match Self::recompute_root(proof) {
            Ok(root) => root == *attested,
            Err(e) => {
                debug!(error = %e, "malformed inclusion proof");
                false
            }
        }
    }

    fn verify_data_root_tuple(&self, proof: &BlobstreamProof) -> bool {
        Self::recompute_root(proof).is_ok()
    }
}

/// Builds a bridge attesting a root over the given `(height, data root)`
/// tuples at `tuple_root_nonce`, plus one inclusion proof per tuple.
///
/// Fixture construction for tests; real deployments relay attested roots
/// from the validator set.
pub fn attested_bridge(
    tuple_root_nonce: u64,
    tuples: &[(u64, B256)],
) -> (MerkleAttestationBridge, Vec<BlobstreamProof>) {
    let leaves: Vec<B256> = tuples
        .iter()
        .map(|&(height, data_root)| {
            let tuple = DataRootTuple {
                height: U256::from(height),
                dataRoot: data_root,
            };
            merkle::leaf_digest(&tuple.abi_encode())
        })
        .collect();
    let (root, paths) = merkle::tree_with_proofs(&leaves).expect("at least one tuple");

    let proofs = tuples
        .iter()
        .zip(paths)
        .enumerate()
        .map(|(key, (&(height, data_root), side_nodes))| BlobstreamProof {
            height,
            data_root,
            side_nodes,
            key: key as u64,
            num_leaves: tuples.len() as u64,
        })
        .collect();

    let mut bridge = MerkleAttestationBridge::new();
    bridge.attest(tuple_root_nonce, root);
    (bridge, proofs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tuples() -> Vec<(u64, B256)> {
        (0..5)
            .map(|i| (100 + i, B256::repeat_byte(0xd0 + i as u8)))
            .collect()
    }

    #[test]
    fn test_valid_attestations_verify() {
        let (bridge, proofs) = attested_bridge(0, &sample_tuples());
        for proof in &proofs {
            assert!(bridge.verify_attestation(0, proof));
            assert!(bridge.verify_data_root_tuple(proof));
        }
    }

    #[test]
    fn test_unknown_nonce_is_rejected() {
        let (bridge, proofs) = attested_bridge(0, &sample_tuples());
        assert!(!bridge.verify_attestation(1, &proofs[0]));
    }

    #[test]
    fn test_tampered_data_root_is_rejected() {
        let (bridge, mut proofs) = attested_bridge(0, &sample_tuples());
        proofs[0].data_root = B256::repeat_byte(0xff);
        assert!(!bridge.verify_attestation(0, &proofs[0]));
    }

    #[test]
    fn test_tampered_height_is_rejected() {
        // The height is part of the leaf encoding, not just metadata.
        let (bridge, mut proofs) = attested_bridge(0, &sample_tuples());
        proofs[0].height += 1;
        assert!(!bridge.verify_attestation(0, &proofs[0]));
    }

    #[test]
    fn test_proof_replayed_at_wrong_key_is_rejected() {
        let (bridge, mut proofs) = attested_bridge(0, &sample_tuples());
        proofs[0].key = 1;
        assert!(!bridge.verify_attestation(0, &proofs[0]));
    }

    #[test]
    fn test_malformed_path_fails_closed() {
        let (bridge, mut proofs) = attested_bridge(0, &sample_tuples());
        proofs[0].side_nodes.pop();
        assert!(!bridge.verify_attestation(0, &proofs[0]));
        assert!(!bridge.verify_data_root_tuple(&proofs[0]));
    }
}
