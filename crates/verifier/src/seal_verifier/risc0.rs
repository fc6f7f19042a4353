use crate::seal_verifier::{errors::SealVerificationError, SealVerifier};
use alloc::string::ToString;
use alloy_primitives::B256;
use kanoa_bindings::journal::journal_digest;
use risc0_zkvm::{sha::Digest, Receipt};

/// Verifies seals produced by the RISC Zero proving pipeline.
///
/// The seal bytes are expected to carry a JSON-serialized [Receipt], the
/// envelope the publisher emits. The receipt's committed journal must hash
/// to the digest expected for the claim before the receipt itself is
/// verified against the program id.
#[derive(Debug, Clone, Copy, Default)]
pub struct Risc0SealVerifier {}

impl SealVerifier for Risc0SealVerifier {
    fn verify(
        &self,
        seal: &[u8],
        program_id: B256,
        expected_journal_digest: B256,
    ) -> Result<(), SealVerificationError> {
        info!("using Risc0SealVerifier");

        if seal.is_empty() {
            return Err(SealVerificationError::MissingSeal);
        }

        let receipt: Receipt = serde_json::from_slice(seal)
            .map_err(|e| SealVerificationError::UnableToDeserializeReceipt(e.to_string()))?;

        // The journal binding comes first: a receipt valid for some other
        // output must not pass for this claim.
        if journal_digest(&receipt.journal.bytes) != expected_journal_digest {
            return Err(SealVerificationError::InconsistentJournal);
        }

        receipt
            .verify(Digest::from(program_id.0))
            .map_err(|e| SealVerificationError::InvalidSeal(e.to_string()))
    }
}
