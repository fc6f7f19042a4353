//! Audit events emitted on accepted challenges.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// One accepted challenge, appended to the verifier's event log.
///
/// The log is the durable, queryable audit trail of accepted challenges;
/// acceptance has no other observable effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeEvent {
    /// An index blob was shown to be missing from the DA layer.
    IndexBlobChallenged {
        /// Hash of the challenged index blob.
        index_blob_hash: B256,
    },
    /// A blob referenced by an otherwise-present index was shown missing.
    BlobCommitmentChallenged {
        /// Hash of the index blob naming the commitment.
        index_blob_hash: B256,
        /// Hash of the missing blob commitment.
        blob_commitment_hash: B256,
    },
}
