// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared verifier handle.

use std::sync::Arc;

use tracing::{debug, warn};
use zkv_codec::abi::{decode_proofs, decode_public_inputs, peek_array_len};
use zkv_codec::vk::load_verifying_key;
use zkv_codec::SolidityProof;
use zkv_types::{BatchItem, Fr, Proof, VerifyingKey};

use crate::batch::{self, BatchReport, Challenges};
use crate::config::{BatchMode, VerifierConfig};
use crate::groth16::verify_proof;
use crate::{PreparedVerifyingKey, VerifierError, VerifierResult};

/// Verifier bound to one key.
///
/// Cloning shares the prepared key. All methods take `&self` and may run
/// concurrently from any number of threads.
#[derive(Clone, Debug)]
pub struct Verifier {
    key: Arc<PreparedVerifyingKey>,
    config: VerifierConfig,
}

impl Verifier {
    pub fn new(vk: VerifyingKey) -> VerifierResult<Self> {
        Self::with_config(vk, VerifierConfig::default())
    }

    pub fn with_config(vk: VerifyingKey, config: VerifierConfig) -> VerifierResult<Self> {
        let key = PreparedVerifyingKey::new(vk)?;
        debug!(
            digest = %hex::encode(key.digest()),
            public_inputs = key.num_public_inputs(),
            "verifying key prepared"
        );
        Ok(Self {
            key: Arc::new(key),
            config,
        })
    }

    /// Build from a key file, versioned or arkworks.
    pub fn from_key_bytes(bytes: &[u8], config: VerifierConfig) -> VerifierResult<Self> {
        Self::with_config(load_verifying_key(bytes)?, config)
    }

    pub fn key(&self) -> &PreparedVerifyingKey {
        &self.key
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn num_public_inputs(&self) -> usize {
        self.key.num_public_inputs()
    }

    /// Verify one proof. Points are re-validated, so hand-built proofs are
    /// safe to pass.
    pub fn verify(&self, proof: &Proof, inputs: &[Fr]) -> VerifierResult<bool> {
        let ok = verify_proof(&self.key, proof, inputs)?;
        debug!(ok, "single proof checked");
        Ok(ok)
    }

    /// Verify the arguments of a Solidity `verifyProof` call.
    pub fn verify_calldata(&self, call: &SolidityProof) -> VerifierResult<bool> {
        let (proof, inputs) = call.decode()?;
        let ok = verify_proof(&self.key, &proof, inputs.as_slice())?;
        debug!(ok, "calldata proof checked");
        Ok(ok)
    }

    fn check_size(&self, n: usize) -> VerifierResult<()> {
        if n == 0 {
            return Err(VerifierError::EmptyBatch);
        }
        if n > self.config.max_batch_size {
            warn!(n, max = self.config.max_batch_size, "batch rejected");
            return Err(VerifierError::BatchTooLarge {
                max: self.config.max_batch_size,
                got: n,
            });
        }
        Ok(())
    }

    /// Verify a batch in the configured mode, with transcript challenges.
    pub fn verify_batch(&self, items: &[BatchItem]) -> VerifierResult<bool> {
        self.check_size(items.len())?;
        self.run_batch(items)
    }

    /// Aggregated check under caller-supplied challenges.
    pub fn verify_batch_with(
        &self,
        items: &[BatchItem],
        challenges: &Challenges,
    ) -> VerifierResult<bool> {
        self.check_size(items.len())?;
        batch::verify_batch(&self.key, items, challenges)
    }

    /// Check every item separately and report which ones fail.
    pub fn verify_each(&self, items: &[BatchItem]) -> VerifierResult<BatchReport> {
        self.check_size(items.len())?;
        batch::verify_each(&self.key, items)
    }

    /// Decode a `verify(publics, proofs)` payload pair.
    ///
    /// Row counts are read from the headers and checked against the batch
    /// limit before any point is decoded.
    pub fn decode_multiproof(
        &self,
        publics: &[u8],
        proofs: &[u8],
    ) -> VerifierResult<Vec<BatchItem>> {
        let n_proofs = peek_array_len(proofs)?;
        let n_publics = peek_array_len(publics)?;
        if n_publics != n_proofs {
            return Err(VerifierError::InputLengthMismatch {
                expected: n_proofs,
                got: n_publics,
            });
        }
        self.check_size(n_proofs)?;

        let proofs = decode_proofs(proofs)?;
        let publics = decode_public_inputs(publics, self.num_public_inputs())?;
        Ok(proofs
            .into_iter()
            .zip(publics)
            .map(|(proof, inputs)| BatchItem { proof, inputs })
            .collect())
    }

    /// Verify a `verify(publics, proofs)` payload pair.
    pub fn verify_multiproof(&self, publics: &[u8], proofs: &[u8]) -> VerifierResult<bool> {
        let items = self.decode_multiproof(publics, proofs)?;
        self.run_batch(&items)
    }

    fn run_batch(&self, items: &[BatchItem]) -> VerifierResult<bool> {
        let ok = match self.config.batch_mode {
            BatchMode::Aggregated => {
                let challenges = Challenges::derive(&self.key, items)?;
                batch::verify_batch(&self.key, items, &challenges)?
            }
            BatchMode::Individual => {
                let report = batch::verify_each(&self.key, items)?;
                if let Some(index) = report.first_invalid() {
                    debug!(index, "first failing proof");
                }
                report.all_valid()
            }
        };
        debug!(n = items.len(), mode = ?self.config.batch_mode, ok, "batch checked");
        Ok(ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::AffineRepr;
    use zkv_codec::abi::{encode_proofs, encode_public_inputs};
    use zkv_curve::point::scalar_mul;
    use zkv_types::{Fq, G1Affine, G2Affine, PublicInputs};

    fn toy_verifier(config: VerifierConfig) -> Verifier {
        let vk = VerifyingKey {
            alpha_g1: scalar_mul(&G1Affine::generator(), &Fr::from(3u64)),
            beta_g2: scalar_mul(&G2Affine::generator(), &Fr::from(5u64)),
            gamma_g2: G2Affine::generator(),
            delta_g2: G2Affine::generator(),
            gamma_abc_g1: vec![G1Affine::generator(); 2],
        };
        Verifier::with_config(vk, config).unwrap()
    }

    fn toy_item(x: u64) -> BatchItem {
        let s = Fr::from(16u64) + Fr::from(x) + Fr::from(2u64);
        let proof = Proof {
            a: scalar_mul(&G1Affine::generator(), &s),
            b: G2Affine::generator(),
            c: scalar_mul(&G1Affine::generator(), &Fr::from(2u64)),
        };
        BatchItem::new(proof, [Fr::from(x)])
    }

    fn payload(items: &[BatchItem]) -> (Vec<u8>, Vec<u8>) {
        let proofs: Vec<Proof> = items.iter().map(|i| i.proof).collect();
        let publics: Vec<PublicInputs> = items.iter().map(|i| i.inputs.clone()).collect();
        (encode_public_inputs(&publics).unwrap(), encode_proofs(&proofs))
    }

    #[test]
    fn hand_built_off_curve_proof_is_rejected() {
        let v = toy_verifier(VerifierConfig::default());
        let mut item = toy_item(1);
        item.proof.a = G1Affine::new_unchecked(Fq::from(1u64), Fq::from(1u64));
        assert!(matches!(
            v.verify(&item.proof, item.inputs.as_slice()),
            Err(VerifierError::Curve(_))
        ));
    }

    #[test]
    fn multiproof_in_both_modes() {
        let items = vec![toy_item(1), toy_item(2), toy_item(3)];
        let (publics, proofs) = payload(&items);
        for mode in [BatchMode::Aggregated, BatchMode::Individual] {
            let v = toy_verifier(VerifierConfig {
                batch_mode: mode,
                ..VerifierConfig::default()
            });
            assert!(v.verify_multiproof(&publics, &proofs).unwrap());
        }
    }

    #[test]
    fn oversized_batch_is_rejected_before_decoding() {
        let v = toy_verifier(VerifierConfig {
            max_batch_size: 2,
            ..VerifierConfig::default()
        });
        let items = vec![toy_item(1), toy_item(2), toy_item(3)];
        let (publics, mut proofs) = payload(&items);
        // garbage rows; the header alone must trigger the limit
        for byte in proofs[64..].iter_mut() {
            *byte = 0xff;
        }
        assert!(matches!(
            v.verify_multiproof(&publics, &proofs),
            Err(VerifierError::BatchTooLarge { max: 2, got: 3 })
        ));
        assert!(matches!(
            v.verify_batch(&items),
            Err(VerifierError::BatchTooLarge { max: 2, got: 3 })
        ));
    }

    #[test]
    fn row_count_mismatch_is_reported() {
        let v = toy_verifier(VerifierConfig::default());
        let (publics, _) = payload(&[toy_item(1)]);
        let (_, proofs) = payload(&[toy_item(1), toy_item(2)]);
        assert!(matches!(
            v.verify_multiproof(&publics, &proofs),
            Err(VerifierError::InputLengthMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn empty_payload_is_empty_batch() {
        let v = toy_verifier(VerifierConfig::default());
        let (publics, proofs) = payload(&[]);
        assert!(matches!(
            v.verify_multiproof(&publics, &proofs),
            Err(VerifierError::EmptyBatch)
        ));
    }

    #[test]
    fn out_of_range_public_input_keeps_its_position() {
        let v = toy_verifier(VerifierConfig::default());
        let (mut publics, proofs) = payload(&[toy_item(1), toy_item(2)]);
        let last = publics.len() - 32;
        publics[last..].copy_from_slice(&[0xff; 32]);
        assert!(matches!(
            v.verify_multiproof(&publics, &proofs),
            Err(VerifierError::InvalidPublicInput { proof: 1, index: 0 })
        ));
    }
}
