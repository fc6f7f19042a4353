//! Digest-bound mock seal verifier.
//!
//! Stands in for the succinct-proof system in tests: a seal is valid for
//! exactly one `(program id, journal digest)` pair, so the claim-binding
//! and anti-replay behavior of the challenge verifier can be exercised
//! without running a prover. Offers no soundness whatsoever, anyone can
//! mint a seal with [DigestSealVerifier::seal_for].

use alloy_primitives::{Bytes, B256};
use kanoa_verifier::seal_verifier::{errors::SealVerificationError, SealVerifier};
use sha2::{Digest, Sha256};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct DigestSealVerifier {}

impl DigestSealVerifier {
    /// Mints the one seal this verifier accepts for a claim.
    pub fn seal_for(program_id: B256, journal_digest: B256) -> Bytes {
        let mut hasher = Sha256::new();
        hasher.update(program_id);
        hasher.update(journal_digest);
        Bytes::copy_from_slice(&hasher.finalize())
    }
}

impl SealVerifier for DigestSealVerifier {
    fn verify(
        &self,
        seal: &[u8],
        program_id: B256,
        journal_digest: B256,
    ) -> Result<(), SealVerificationError> {
        info!("using DigestSealVerifier");

        if seal.is_empty() {
            return Err(SealVerificationError::MissingSeal);
        }
        if seal != Self::seal_for(program_id, journal_digest).as_ref() {
            return Err(SealVerificationError::InvalidSeal(
                "seal does not bind this program id and journal".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: B256 = B256::repeat_byte(0x10);
    const JOURNAL: B256 = B256::repeat_byte(0x20);

    #[test]
    fn test_minted_seal_verifies() {
        let seal = DigestSealVerifier::seal_for(PROGRAM, JOURNAL);
        DigestSealVerifier::default()
            .verify(&seal, PROGRAM, JOURNAL)
            .unwrap();
    }

    #[test]
    fn test_seal_is_bound_to_both_parameters() {
        let seal = DigestSealVerifier::seal_for(PROGRAM, JOURNAL);
        let verifier = DigestSealVerifier::default();

        assert_eq!(
            verifier
                .verify(&seal, B256::repeat_byte(0x11), JOURNAL)
                .unwrap_err(),
            SealVerificationError::InvalidSeal(
                "seal does not bind this program id and journal".into()
            )
        );
        assert!(verifier
            .verify(&seal, PROGRAM, B256::repeat_byte(0x21))
            .is_err());
    }

    #[test]
    fn test_empty_seal_is_missing() {
        assert_eq!(
            DigestSealVerifier::default()
                .verify(&[], PROGRAM, JOURNAL)
                .unwrap_err(),
            SealVerificationError::MissingSeal
        );
    }
}
