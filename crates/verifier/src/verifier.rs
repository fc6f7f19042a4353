//! The challenge verification core.
//!
//! Cross-references three independent trust anchors into one atomic
//! accept/reject decision per challenge: the batch registry binds the index
//! blob to a settlement height, the attestation bridge binds that height's
//! data root to the DA validator set, and the seal verifier binds the
//! succinct proof to the exact claim being made.

use crate::errors::ChallengeError;
use crate::events::ChallengeEvent;
use crate::seal_verifier::SealVerifier;
use crate::traits::{AttestationBridge, BatchRegistry};
use alloc::vec::Vec;
use alloy_primitives::B256;
use kanoa_bindings::journal::{blob_exclusion_journal, journal_digest};
use kanoa_bindings::ChallengeProof;

/// Nonce of the tuple-root commitment challenges are proved against. The
/// current deployment pins the genesis commitment.
const TUPLE_ROOT_NONCE: u64 = 0;

/// The two program identifiers a deployment accepts proofs for. Fixed at
/// construction and immutable for the life of the verifier instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramIds {
    /// Program proving an index blob is missing from the DA layer.
    pub index_blob_exclusion: B256,
    /// Program proving a single referenced blob is missing.
    pub blob_commitment_exclusion: B256,
}

/// Verifies DA challenges against a batch registry, an attestation bridge
/// and a succinct-proof verifier.
///
/// Each entry point is a stateless request/response gate: either every
/// check passes and exactly one event is appended to the log, or the call
/// fails with the first check's error and nothing is recorded. The event
/// log and success counter are the only state the verifier owns.
#[derive(Debug)]
pub struct ChallengeVerifier<R, A, S> {
    registry: R,
    bridge: A,
    seal_verifier: S,
    program_ids: ProgramIds,
    events: Vec<ChallengeEvent>,
    accepted: u64,
}

impl<R, A, S> ChallengeVerifier<R, A, S>
where
    R: BatchRegistry,
    A: AttestationBridge,
    S: SealVerifier,
{
    /// Instantiates a verifier over the given anchors and program ids.
    pub const fn new(registry: R, bridge: A, seal_verifier: S, program_ids: ProgramIds) -> Self {
        Self {
            registry,
            bridge,
            seal_verifier,
            program_ids,
            events: Vec::new(),
            accepted: 0,
        }
    }

    /// Verifies a claim that the index blob itself is missing from the DA
    /// layer.
    ///
    /// The journal is the real output of the exclusion program and is
    /// opaque to the verifier; only its digest binds the seal to the claim.
    /// On acceptance appends [ChallengeEvent::IndexBlobChallenged].
    pub fn challenge_index_blob(
        &mut self,
        index_blob_hash: B256,
        journal: &[u8],
        proof: &ChallengeProof,
    ) -> Result<(), ChallengeError> {
        if proof.program_id != self.program_ids.index_blob_exclusion {
            return Err(ChallengeError::WrongProgram {
                submitted: proof.program_id,
            });
        }

        self.validate_anchors(index_blob_hash, proof)?;
        self.verify_seal(proof, journal_digest(journal))?;

        info!(%index_blob_hash, "index blob challenge accepted");
        self.record(ChallengeEvent::IndexBlobChallenged { index_blob_hash });
        Ok(())
    }

    /// Verifies a claim that one blob referenced by an otherwise-present
    /// index is missing.
    ///
    /// The expected journal is computed here from the claim identifiers
    /// rather than supplied, so a seal generated for one index/commitment
    /// pair cannot be replayed against another. On acceptance appends
    /// [ChallengeEvent::BlobCommitmentChallenged].
    pub fn challenge_blob_commitment(
        &mut self,
        index_blob_hash: B256,
        blob_commitment_hash: B256,
        proof: &ChallengeProof,
    ) -> Result<(), ChallengeError> {
        if proof.program_id != self.program_ids.blob_commitment_exclusion {
            return Err(ChallengeError::WrongProgram {
                submitted: proof.program_id,
            });
        }

        self.validate_anchors(index_blob_hash, proof)?;

        let journal = blob_exclusion_journal(index_blob_hash, blob_commitment_hash);
        self.verify_seal(proof, journal_digest(&journal))?;

        info!(%index_blob_hash, %blob_commitment_hash, "blob commitment challenge accepted");
        self.record(ChallengeEvent::BlobCommitmentChallenged {
            index_blob_hash,
            blob_commitment_hash,
        });
        Ok(())
    }

    /// Steps shared by both claim kinds: registry height lookup, strict
    /// height equality against the Blobstream proof, then the attestation
    /// check. Ordering is part of the contract, the first failing step
    /// determines the error a caller sees.
    fn validate_anchors(
        &self,
        index_blob_hash: B256,
        proof: &ChallengeProof,
    ) -> Result<(), ChallengeError> {
        let registered = self
            .registry
            .height_of(index_blob_hash)
            .ok_or(ChallengeError::UnknownBatch(index_blob_hash))?;

        let proven = proof.blobstream_proof.height;
        if registered != proven {
            return Err(ChallengeError::HeightMismatch { registered, proven });
        }

        if !self
            .bridge
            .verify_attestation(TUPLE_ROOT_NONCE, &proof.blobstream_proof)
        {
            return Err(ChallengeError::BadAttestation);
        }

        Ok(())
    }

    /// Delegates to the seal verifier and collapses any failure, including
    /// an unexpected abort inside it, uniformly into
    /// [ChallengeError::BadProof]. No cause detail may leak past this point.
    fn verify_seal(
        &self,
        proof: &ChallengeProof,
        expected_journal_digest: B256,
    ) -> Result<(), ChallengeError> {
        self.seal_verifier
            .verify(&proof.seal, proof.program_id, expected_journal_digest)
            .map_err(|e| {
                debug!(error = %e, "seal verification rejected");
                ChallengeError::BadProof
            })
    }

    fn record(&mut self, event: ChallengeEvent) {
        self.events.push(event);
        self.accepted += 1;
    }

    /// The append-only audit trail of accepted challenges.
    pub fn events(&self) -> &[ChallengeEvent] {
        &self.events
    }

    /// Number of challenges accepted since construction.
    pub const fn accepted_challenges(&self) -> u64 {
        self.accepted
    }
}
