use alloc::string::String;

/// List of failures a [crate::SealVerifier] can report.
///
/// The challenge verifier collapses every variant into a single rejection
/// kind before it reaches a caller; the detail below exists for logs and
/// for direct users of a seal verifier only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SealVerificationError {
    /// No seal bytes were supplied.
    #[error("proof is missing")]
    MissingSeal,
    /// The seal bytes did not decode to a receipt. To avoid taking a dep on
    /// a specific zkVM error type, the cause is carried as a string.
    #[error("unable to deserialize receipt: {0}")]
    UnableToDeserializeReceipt(String),
    /// The journal committed by the proof is not the journal expected for
    /// the claim.
    #[error("proof journal does not match the expected journal digest")]
    InconsistentJournal,
    /// The seal failed cryptographic verification against the program id.
    #[error("seal cannot be verified against the program id: {0}")]
    InvalidSeal(String),
}
