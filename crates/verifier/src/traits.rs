//! Traits for the external collaborators the verifier reads from.
//!
//! Both anchors are injected rather than reached through globals so the
//! core can be exercised against substitutable fakes.

use alloy_primitives::B256;
use kanoa_bindings::{BatchHeader, BlobstreamProof};

/// Read-only view of the settlement-chain batch registry.
///
/// The verification path only needs [BatchRegistry::height_of]; the other
/// accessors mirror the registry's full read surface.
pub trait BatchRegistry {
    /// Returns the settlement height the index blob was registered at, or
    /// `None` when the registry holds no entry for it. Presence is explicit
    /// so a genesis height of zero cannot collide with "unregistered".
    fn height_of(&self, index_blob_hash: B256) -> Option<u64>;

    /// Whether the batch is part of the canonical chain.
    fn is_canonical(&self, batch_hash: B256) -> bool;

    /// Header metadata recorded for a batch.
    fn header_of(&self, batch_hash: B256) -> Option<BatchHeader>;
}

/// Bridge over the DA validator set's signed tuple-root commitments.
pub trait AttestationBridge {
    /// Checks that `proof.data_root` is the leaf at `proof.key` under the
    /// tuple root attested at `tuple_root_nonce`.
    fn verify_attestation(&self, tuple_root_nonce: u64, proof: &BlobstreamProof) -> bool;

    /// Checks that the proof's Merkle path is well formed for its claimed
    /// key and leaf count, without consulting an attested root.
    fn verify_data_root_tuple(&self, proof: &BlobstreamProof) -> bool;
}
