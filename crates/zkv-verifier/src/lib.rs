// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # zkv-verifier
//!
//! Groth16 verification over BN254 for a fixed verifying key.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`groth16`] | single-proof pairing check |
//! | [`batch`] | randomized aggregated check, parallel individual mode |
//! | [`transcript`] | `merlin` challenge derivation bound to the key and batch |
//! | [`verifier`] | [`Verifier`] handle with batch limits and calldata entry points |
//! | [`global`] | process-wide verifier |
//!
//! A proof that is well formed but does not satisfy the pairing equation
//! is `Ok(false)`. Every `Err` means the input could not be checked at all.

pub mod batch;
pub mod config;
mod error;
pub mod global;
pub mod groth16;
mod prepared;
pub mod transcript;
pub mod verifier;

pub use batch::{BatchReport, Challenges};
pub use config::{BatchMode, VerifierConfig, DEFAULT_MAX_BATCH_SIZE};
pub use error::{VerifierError, VerifierResult};
pub use prepared::PreparedVerifyingKey;
pub use verifier::Verifier;
