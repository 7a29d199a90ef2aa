// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Randomized batch verification.
//!
//! N proofs are folded into one equation with non-zero challenges `r_i`:
//!
//! ```text
//! ∏ e(r_i·A_i, B_i) · e(-(Σ r_i)·α, β) · e(-Σ r_i·vk_x_i, γ) · e(-Σ r_i·C_i, δ) == 1
//! ```
//!
//! That is N + 3 Miller loops and a single final exponentiation. The
//! aggregated `vk_x` term is one MSM over the key's `IC` points with
//! coefficients `[Σ r_i, Σ r_i·x_i1, ..., Σ r_i·x_ik]`.
//!
//! A batch containing an invalid proof passes with probability at most
//! about `1/r` over the challenges.

use ark_ec::CurveGroup;
use ark_ff::{UniformRand, Zero};
use ark_std::rand::Rng;
use rayon::prelude::*;
use zkv_curve::pairing::prepared_product_is_one;
use zkv_curve::point::{g1_linear_combination, neg, scalar_mul};
use zkv_curve::G2Prepared;
use zkv_types::{BatchItem, Fr, G1Affine, G1Projective};

use crate::groth16::{pairing_check, validate_proof};
use crate::transcript::derive_challenges;
use crate::{PreparedVerifyingKey, VerifierError, VerifierResult};

/// One non-zero scalar per batch item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenges(Vec<Fr>);

impl Challenges {
    /// Derive from the transcript of the key and the whole batch.
    pub fn derive(pvk: &PreparedVerifyingKey, items: &[BatchItem]) -> VerifierResult<Self> {
        Ok(Self(derive_challenges(pvk.digest(), items)))
    }

    /// Caller-chosen challenges. Zero would drop a proof from the check.
    pub fn from_scalars(scalars: Vec<Fr>) -> VerifierResult<Self> {
        if scalars.iter().any(Zero::is_zero) {
            return Err(VerifierError::InvalidChallenge("challenge must be non-zero"));
        }
        Ok(Self(scalars))
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Self {
        let scalars = (0..n)
            .map(|_| loop {
                let r = Fr::rand(rng);
                if !r.is_zero() {
                    break r;
                }
            })
            .collect();
        Self(scalars)
    }

    pub fn as_slice(&self) -> &[Fr] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Check every item's input count before any curve work.
fn check_arity(pvk: &PreparedVerifyingKey, items: &[BatchItem]) -> VerifierResult<()> {
    let expected = pvk.num_public_inputs();
    match items.iter().find(|item| item.inputs.len() != expected) {
        Some(item) => Err(VerifierError::InputLengthMismatch {
            expected,
            got: item.inputs.len(),
        }),
        None => Ok(()),
    }
}

fn validate_items(items: &[BatchItem]) -> VerifierResult<()> {
    items.iter().try_for_each(|item| validate_proof(&item.proof))
}

/// Aggregated check of a batch under the given challenges. Every proof
/// point is validated before any pairing work.
pub fn verify_batch(
    pvk: &PreparedVerifyingKey,
    items: &[BatchItem],
    challenges: &Challenges,
) -> VerifierResult<bool> {
    if items.is_empty() {
        return Err(VerifierError::EmptyBatch);
    }
    if challenges.len() != items.len() {
        return Err(VerifierError::InvalidChallenge("need exactly one challenge per proof"));
    }
    check_arity(pvk, items)?;
    validate_items(items)?;

    let rs = challenges.as_slice();
    let ic = &pvk.vk().gamma_abc_g1;

    let mut ic_coeffs = vec![Fr::zero(); ic.len()];
    for (item, r) in items.iter().zip(rs) {
        ic_coeffs[0] += r;
        for (coeff, x) in ic_coeffs[1..].iter_mut().zip(item.inputs.as_slice()) {
            *coeff += *r * x;
        }
    }
    let r_sum = ic_coeffs[0];

    let vk_x = g1_linear_combination(ic, &ic_coeffs)?;
    let cs: Vec<G1Affine> = items.iter().map(|item| item.proof.c).collect();
    let c_acc = g1_linear_combination(&cs, rs)?;

    let scaled_a: Vec<G1Projective> = items
        .iter()
        .zip(rs)
        .map(|(item, r)| G1Projective::from(item.proof.a) * r)
        .collect();

    let mut g1 = G1Projective::normalize_batch(&scaled_a);
    g1.push(scalar_mul(&pvk.alpha_g1_neg, &r_sum));
    g1.push(neg(&vk_x.into_affine()));
    g1.push(neg(&c_acc.into_affine()));

    let mut g2: Vec<G2Prepared> = items
        .iter()
        .map(|item| G2Prepared::from(item.proof.b))
        .collect();
    g2.push(pvk.beta_g2.clone());
    g2.push(pvk.gamma_g2.clone());
    g2.push(pvk.delta_g2.clone());

    Ok(prepared_product_is_one(&g1, &g2)?)
}

/// Per-item outcome of individual-mode verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchReport {
    pub results: Vec<bool>,
}

impl BatchReport {
    pub fn all_valid(&self) -> bool {
        self.results.iter().all(|ok| *ok)
    }

    /// Index of the first proof that failed its pairing check.
    pub fn first_invalid(&self) -> Option<usize> {
        self.results.iter().position(|ok| !ok)
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|ok| **ok).count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Verify each item on its own, in parallel.
pub fn verify_each(pvk: &PreparedVerifyingKey, items: &[BatchItem]) -> VerifierResult<BatchReport> {
    if items.is_empty() {
        return Err(VerifierError::EmptyBatch);
    }
    check_arity(pvk, items)?;
    validate_items(items)?;
    let results = items
        .par_iter()
        .map(|item| pairing_check(pvk, &item.proof, item.inputs.as_slice()))
        .collect::<VerifierResult<Vec<bool>>>()?;
    Ok(BatchReport { results })
}
