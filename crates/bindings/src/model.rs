//! Rust-native data model for DA challenges and conversions to the ABI
//! mirror types consumed on-chain.

use crate::{
    journal::journal_digest, DataRootTuple, SolBlobCommitment, SolBlobstreamProof,
    SolChallengeProof, SolIndexBlob, SolNamespace,
};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use alloy_primitives::{Bytes, FixedBytes, B256, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

/// The Celestia-app namespace a blob was submitted under: one version byte
/// plus a 28-byte ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Namespace {
    /// The namespace version.
    pub version: u8,
    /// The namespace ID.
    pub id: [u8; 28],
}

impl Namespace {
    pub fn to_sol(&self) -> SolNamespace {
        SolNamespace {
            version: FixedBytes::from([self.version]),
            id: FixedBytes::from(self.id),
        }
    }
}

/// One entry inside an [IndexBlob], identifying a referenced blob by its
/// commitment and the Celestia block height it was submitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobCommitment {
    /// Commitment to the blob data.
    pub commitment: B256,
    /// Celestia block height the blob was included in.
    pub height: u64,
}

impl BlobCommitment {
    pub fn to_sol(&self) -> SolBlobCommitment {
        SolBlobCommitment {
            commitment: self.commitment,
            height: self.height,
        }
    }

    /// Hash digest of this commitment entry, the identifier a
    /// blob-commitment challenge is filed against.
    pub fn digest(&self) -> B256 {
        journal_digest(&self.to_sol().abi_encode())
    }
}

/// The blob index is a structure that points to other blobs. Its purpose is
/// to commit to multiple blobs with a single blob, enabling to push only one
/// commitment on-chain instead of many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexBlob {
    /// Namespace the index blob was submitted under.
    pub namespace: Namespace,
    /// Ordered commitments to the blobs the index points at.
    pub blobs: Vec<BlobCommitment>,
}

impl IndexBlob {
    pub fn new(namespace: Namespace, blobs: Vec<BlobCommitment>) -> Self {
        Self { namespace, blobs }
    }

    pub fn to_sol(&self) -> SolIndexBlob {
        SolIndexBlob {
            namespace: self.namespace.to_sol(),
            blobs: self.blobs.iter().map(BlobCommitment::to_sol).collect(),
        }
    }

    /// Hash digest of the canonical ABI encoding of the index, the
    /// identifier challenges are filed against.
    pub fn digest(&self) -> B256 {
        journal_digest(&self.to_sol().abi_encode())
    }
}

/// Identifies one settlement batch. Written once by the batch registry,
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchHeader {
    /// Hash of the previous batch in the canonical chain.
    pub previous_batch_hash: B256,
    /// Hash of the index blob describing this batch's data.
    pub index_blob_hash: B256,
    /// Celestia height the index blob was registered at.
    pub index_blob_height: u64,
}

/// Registry-side materialized view of whether a blob commitment has been
/// recorded. The zeroed, `exists = false` value is the canonical "absent"
/// sentinel, distinct from a deleted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitmentRecord {
    /// The recorded commitment value.
    pub commitment: B256,
    /// Celestia block height of the recorded blob.
    pub block_height: u64,
    /// Namespace of the recorded blob.
    pub namespace: Namespace,
    /// Whether the registry holds a record for this commitment.
    pub exists: bool,
}

impl CommitmentRecord {
    /// The canonical absent sentinel.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn is_absent(&self) -> bool {
        !self.exists
    }
}

/// A Merkle inclusion proof that `data_root` is the leaf at `key` in an
/// attested tuple-root tree of `num_leaves` leaves for Celestia block
/// `height`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobstreamProof {
    /// Celestia block height the proven data root belongs to.
    pub height: u64,
    /// The proven data root.
    pub data_root: B256,
    /// Merkle siblings, leaf level first.
    pub side_nodes: Vec<B256>,
    /// Index of the leaf under proof.
    pub key: u64,
    /// Number of leaves in the attested tree.
    pub num_leaves: u64,
}

impl BlobstreamProof {
    /// The data root tuple leaf this proof commits to.
    pub fn data_root_tuple(&self) -> DataRootTuple {
        DataRootTuple {
            height: U256::from(self.height),
            dataRoot: self.data_root,
        }
    }

    pub fn to_sol(&self) -> SolBlobstreamProof {
        SolBlobstreamProof {
            height: self.height,
            dataRoot: self.data_root,
            sideNodes: self.side_nodes.clone(),
            key: U256::from(self.key),
            numLeaves: U256::from(self.num_leaves),
        }
    }
}

/// The proof bundle failed to decode from its ABI form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid challenge proof bundle: {0}")]
pub struct ProofBundleDecodeError(String);

/// The complete bundle submitted by a challenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeProof {
    /// Opaque succinct-proof bytes.
    pub seal: Bytes,
    /// Identifier of the exact program whose execution is proved.
    pub program_id: B256,
    /// Inclusion proof binding the claim to an attested data root.
    pub blobstream_proof: BlobstreamProof,
    /// The tuple root the inclusion proof was generated against.
    pub data_root_tuple_root: B256,
}

impl ChallengeProof {
    /// ABI-encodes the bundle for submission.
    pub fn to_abi_bytes(&self) -> Vec<u8> {
        SolChallengeProof {
            seal: self.seal.clone(),
            programId: self.program_id,
            blobstreamProof: self.blobstream_proof.to_sol(),
            dataRootTupleRoot: self.data_root_tuple_root,
        }
        .abi_encode()
    }

    /// Decodes a bundle from its ABI encoding.
    pub fn from_abi_bytes(bytes: &[u8]) -> Result<Self, ProofBundleDecodeError> {
        let sol = SolChallengeProof::abi_decode(bytes)
            .map_err(|e| ProofBundleDecodeError(e.to_string()))?;

        let key: u64 = sol
            .blobstreamProof
            .key
            .try_into()
            .map_err(|_| ProofBundleDecodeError("leaf key exceeds u64".to_string()))?;
        let num_leaves: u64 = sol
            .blobstreamProof
            .numLeaves
            .try_into()
            .map_err(|_| ProofBundleDecodeError("leaf count exceeds u64".to_string()))?;

        Ok(Self {
            seal: sol.seal,
            program_id: sol.programId,
            blobstream_proof: BlobstreamProof {
                height: sol.blobstreamProof.height,
                data_root: sol.blobstreamProof.dataRoot,
                side_nodes: sol.blobstreamProof.sideNodes,
                key,
                num_leaves,
            },
            data_root_tuple_root: sol.dataRootTupleRoot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloy_primitives::b256;

    fn sample_proof() -> ChallengeProof {
        ChallengeProof {
            seal: vec![0xAA; 48].into(),
            program_id: b256!(
                "0x0101010101010101010101010101010101010101010101010101010101010101"
            ),
            blobstream_proof: BlobstreamProof {
                height: 100,
                data_root: b256!(
                    "0xd0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0"
                ),
                side_nodes: vec![b256!(
                    "0xabababababababababababababababababababababababababababababababab"
                )],
                key: 1,
                num_leaves: 2,
            },
            data_root_tuple_root: b256!(
                "0xe0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0"
            ),
        }
    }

    #[test]
    fn test_proof_bundle_abi_codec() {
        let proof = sample_proof();
        let bytes = proof.to_abi_bytes();
        let decoded = ChallengeProof::from_abi_bytes(&bytes).unwrap();
        assert_eq!(proof, decoded);
    }

    #[test]
    fn test_proof_bundle_rejects_garbage() {
        assert!(ChallengeProof::from_abi_bytes(&[0u8; 7]).is_err());
    }

    #[test]
    fn test_index_blob_digest_depends_on_order() {
        let ns = Namespace {
            version: 0,
            id: [7u8; 28],
        };
        let a = BlobCommitment {
            commitment: b256!(
                "0x1111111111111111111111111111111111111111111111111111111111111111"
            ),
            height: 10,
        };
        let b = BlobCommitment {
            commitment: b256!(
                "0x2222222222222222222222222222222222222222222222222222222222222222"
            ),
            height: 11,
        };

        let forward = IndexBlob::new(ns, vec![a, b]);
        let reversed = IndexBlob::new(ns, vec![b, a]);
        assert_ne!(forward.digest(), reversed.digest());
    }

    #[test]
    fn test_absent_commitment_record_sentinel() {
        let absent = CommitmentRecord::absent();
        assert!(absent.is_absent());
        assert_eq!(absent.commitment, B256::ZERO);
        assert_eq!(absent.block_height, 0);

        let present = CommitmentRecord {
            exists: true,
            ..CommitmentRecord::absent()
        };
        assert!(!present.is_absent());
    }
}
