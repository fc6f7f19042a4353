#![warn(missing_debug_implementations, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![no_std]

extern crate alloc;

#[macro_use]
extern crate tracing;

pub mod errors;

pub mod events;

pub mod seal_verifier;

pub mod traits;

pub mod verifier;

pub use errors::ChallengeError;
pub use events::ChallengeEvent;
pub use seal_verifier::SealVerifier;
pub use traits::{AttestationBridge, BatchRegistry};
pub use verifier::{ChallengeVerifier, ProgramIds};
