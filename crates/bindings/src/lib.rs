#![no_std]

extern crate alloc;

use alloy_sol_types::sol;

pub mod journal;

pub mod model;

pub use model::{
    BatchHeader, BlobCommitment, BlobstreamProof, ChallengeProof, CommitmentRecord, IndexBlob,
    Namespace, ProofBundleDecodeError,
};

sol! {
    /// A representation of the Celestia-app namespace ID and its version.
    /// See: https://celestiaorg.github.io/celestia-app/specs/namespace.html
    struct SolNamespace {
        // The namespace version.
        bytes1 version;
        // The namespace ID.
        bytes28 id;
    }

    /// A tuple of data root with metadata. Each data root is associated
    /// with a Celestia block height.
    struct DataRootTuple {
        // Celestia block height the data root was included in.
        // Genesis block is height = 0.
        // First queryable block is height = 1.
        uint256 height;
        // Data root.
        bytes32 dataRoot;
    }

    /// Binary Merkle tree proof that a data root tuple is included in an
    /// attested tuple root.
    struct SolBlobstreamProof {
        // Celestia block height the proven data root belongs to.
        uint64 height;
        // The proven data root.
        bytes32 dataRoot;
        // List of side nodes to verify and calculate tree.
        bytes32[] sideNodes;
        // The key of the leaf to verify.
        uint256 key;
        // The number of leaves in the tree.
        uint256 numLeaves;
    }

    /// The complete proof bundle submitted by a challenger.
    struct SolChallengeProof {
        // Opaque succinct-proof bytes.
        bytes seal;
        // Identifier of the exact program whose execution is proved.
        bytes32 programId;
        // Inclusion proof of the data root against the attested tuple root.
        SolBlobstreamProof blobstreamProof;
        // The tuple root the inclusion proof is checked against.
        bytes32 dataRootTupleRoot;
    }

    /// One entry of an index blob.
    struct SolBlobCommitment {
        bytes32 commitment;
        uint64 height;
    }

    /// The pointer structure a challenger claims is absent or incomplete.
    struct SolIndexBlob {
        SolNamespace namespace;
        SolBlobCommitment[] blobs;
    }
}
