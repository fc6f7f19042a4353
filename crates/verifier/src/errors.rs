//! Error taxonomy for challenge verification.

use alloy_primitives::B256;

/// Terminal failure of a single challenge submission.
///
/// Checks run in a fixed order and short-circuit, so a caller sees exactly
/// one failure kind per call and the kind is deterministic for a given
/// input. None of these are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeError {
    /// The bundle's program id does not match the id registered for the
    /// claim kind being invoked. A proof valid for one program must never
    /// be accepted for another.
    #[error("program id {submitted} does not match the id registered for this claim kind")]
    WrongProgram {
        /// Program id carried by the submitted bundle.
        submitted: B256,
    },
    /// The registry holds no height for the index blob under challenge.
    #[error("no registered height for index blob {0}")]
    UnknownBatch(B256),
    /// The registry height and the height in the attached Blobstream proof
    /// disagree. Equality is strict, not a range check.
    #[error("registered height {registered} does not equal proven height {proven}")]
    HeightMismatch {
        /// Height the registry recorded for the index blob.
        registered: u64,
        /// Height carried by the Blobstream proof.
        proven: u64,
    },
    /// The attestation bridge rejected the data-root inclusion proof.
    #[error("data root attestation could not be verified")]
    BadAttestation,
    /// Succinct-proof verification failed. Every seal-verifier failure
    /// collapses here with no cause detail, so rejection responses cannot
    /// be used as an oracle to iteratively forge a seal.
    #[error("succinct proof verification failed")]
    BadProof,
}
