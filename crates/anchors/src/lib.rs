//! Reference implementations of the external anchors a
//! [kanoa_verifier::ChallengeVerifier] reads from: an in-memory batch
//! registry, an attestation bridge backed by the Celestia binary Merkle
//! tree, and a digest-bound mock seal verifier.
//!
//! A production deployment replaces these with clients of the settlement
//! chain's registry contract and the Blobstream bridge; the verification
//! core is generic over both.

#![warn(missing_debug_implementations, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]

pub mod bridge;

pub mod merkle;

pub mod registry;

pub mod seal;

pub use bridge::{attested_bridge, MerkleAttestationBridge};
pub use registry::{InMemoryBatchRegistry, RegistryError};
pub use seal::DigestSealVerifier;
