// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifying key with its pairing-side precomputation.

use std::fmt;

use sha2::{Digest, Sha256};
use zkv_codec::vk::encode_verifying_key;
use zkv_curve::point::{neg, validate_g1, validate_g2};
use zkv_curve::G2Prepared;
use zkv_types::{G1Affine, VerifyingKey};

use crate::{VerifierError, VerifierResult};

/// A validated key, ready for repeated verification.
///
/// Holds `-α` and the Miller-loop line coefficients of `β`, `γ` and `δ`,
/// which every check pairs against. The SHA-256 digest of the versioned
/// key encoding identifies the key in batch transcripts and logs.
pub struct PreparedVerifyingKey {
    vk: VerifyingKey,
    pub(crate) alpha_g1_neg: G1Affine,
    pub(crate) beta_g2: G2Prepared,
    pub(crate) gamma_g2: G2Prepared,
    pub(crate) delta_g2: G2Prepared,
    digest: [u8; 32],
}

impl PreparedVerifyingKey {
    pub fn new(vk: VerifyingKey) -> VerifierResult<Self> {
        if vk.gamma_abc_g1.is_empty() {
            return Err(VerifierError::InvalidKey("gamma_abc has no constant term"));
        }
        validate_g1(&vk.alpha_g1)?;
        validate_g2(&vk.beta_g2)?;
        validate_g2(&vk.gamma_g2)?;
        validate_g2(&vk.delta_g2)?;
        for point in &vk.gamma_abc_g1 {
            validate_g1(point)?;
        }

        let digest = Sha256::digest(encode_verifying_key(&vk)?).into();
        Ok(Self {
            alpha_g1_neg: neg(&vk.alpha_g1),
            beta_g2: vk.beta_g2.into(),
            gamma_g2: vk.gamma_g2.into(),
            delta_g2: vk.delta_g2.into(),
            vk,
            digest,
        })
    }

    pub fn vk(&self) -> &VerifyingKey {
        &self.vk
    }

    pub fn num_public_inputs(&self) -> usize {
        self.vk.num_public_inputs()
    }

    /// SHA-256 of the versioned key encoding.
    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }
}

impl fmt::Debug for PreparedVerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedVerifyingKey")
            .field("digest", &hex::encode(self.digest))
            .field("public_inputs", &self.num_public_inputs())
            .finish()
    }
}
