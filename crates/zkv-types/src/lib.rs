// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkv-types: data model shared by the codec and the verifier.

pub mod batch;
pub mod inputs;
pub mod proof;
pub mod vk;

pub use batch::BatchItem;
pub use inputs::PublicInputs;
pub use proof::Proof;
pub use vk::VerifyingKey;

/// Re-exported so downstream crates name one curve.
pub use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
