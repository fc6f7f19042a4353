//! Journal encoding and hashing.
//!
//! The journal is the exact byte sequence a succinct-proof program commits as
//! its output. Its digest is the binding nonce between a seal and the claim
//! it was generated for: the verifier only accepts a seal whose committed
//! output hashes to the digest expected for the submitted claim.

use alloc::vec::Vec;
use alloy_primitives::B256;
use alloy_sol_types::{sol, SolValue};
use sha2::{Digest, Sha256};

sol! {
    /// Journal committed by the blob-commitment-exclusion program.
    ///
    /// For this claim kind the verifier reconstructs the journal itself from
    /// the claim identifiers, so a challenger cannot choose the bytes a seal
    /// is checked against. A seal generated for one
    /// (indexBlobHash, blobCommitmentHash) pair is unusable for any other.
    struct BlobExclusionJournal {
        // Hash of the index blob naming the challenged commitment.
        bytes32 indexBlobHash;
        // Hash of the blob commitment claimed to be missing.
        bytes32 blobCommitmentHash;
    }
}

/// Computes the 256-bit digest binding a seal to its journal bytes.
///
/// This must match the digest the proving system commits for the program
/// output, byte for byte, or every proof will be rejected.
pub fn journal_digest(journal: &[u8]) -> B256 {
    B256::from_slice(&Sha256::digest(journal))
}

/// ABI-encodes the expected journal for a blob-commitment-exclusion claim.
pub fn blob_exclusion_journal(index_blob_hash: B256, blob_commitment_hash: B256) -> Vec<u8> {
    let journal = BlobExclusionJournal {
        indexBlobHash: index_blob_hash,
        blobCommitmentHash: blob_commitment_hash,
    };
    journal.abi_encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn test_blob_exclusion_journal_is_order_sensitive() {
        let a = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");
        let b = b256!("0x2222222222222222222222222222222222222222222222222222222222222222");

        let forward = blob_exclusion_journal(a, b);
        let swapped = blob_exclusion_journal(b, a);

        assert_ne!(forward, swapped);
        assert_ne!(journal_digest(&forward), journal_digest(&swapped));
    }

    #[test]
    fn test_blob_exclusion_journal_layout() {
        let a = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");
        let b = b256!("0x2222222222222222222222222222222222222222222222222222222222222222");

        // Two static bytes32 fields ABI-encode to their fixed-order
        // concatenation, which is the wire contract for this journal.
        let encoded = blob_exclusion_journal(a, b);
        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[..32], a.as_slice());
        assert_eq!(&encoded[32..], b.as_slice());
    }

    #[test]
    fn test_journal_digest_matches_sha256() {
        // SHA-256 of the empty string, a fixed reference vector.
        let expected =
            b256!("0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
        assert_eq!(journal_digest(&[]), expected);
    }
}
