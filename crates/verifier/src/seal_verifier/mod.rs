//! Verification of the succinct-proof seal attached to a challenge.

pub mod errors;
pub mod noop;
#[cfg(feature = "risc0")]
pub mod risc0;

use alloy_primitives::B256;
use errors::SealVerificationError;

/// Opaque trust oracle over succinct proofs.
///
/// For a given `(seal, program_id, journal_digest)` an implementation must
/// deterministically accept or reject: accept only if `seal` proves that
/// the program identified by `program_id` executed and committed output
/// whose digest is `journal_digest`. The caller never inspects a proof
/// payload beyond this yes/no answer.
pub trait SealVerifier: Clone + Send + 'static {
    /// Verifies the seal, or reports why it could not be accepted.
    fn verify(
        &self,
        seal: &[u8],
        program_id: B256,
        journal_digest: B256,
    ) -> Result<(), SealVerificationError>;
}
