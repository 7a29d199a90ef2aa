// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Single-proof Groth16 check.
//!
//! Algorithm:
//! 1. `vk_x = IC[0] + Σ inputs[i] · IC[i + 1]`
//! 2. `e(A, B) · e(-α, β) · e(-vk_x, γ) · e(-C, δ) == 1`
//!
//! Step 2 is a single multi-pairing with one final exponentiation.

use ark_ec::CurveGroup;
use zkv_curve::pairing::prepared_product_is_one;
use zkv_curve::point::{g1_linear_combination, neg, validate_g1, validate_g2};
use zkv_curve::G2Prepared;
use zkv_types::{Fr, G1Projective, Proof};

use crate::{PreparedVerifyingKey, VerifierError, VerifierResult};

/// `vk_x` for one input vector, checking its length against the key.
pub fn prepare_inputs(pvk: &PreparedVerifyingKey, inputs: &[Fr]) -> VerifierResult<G1Projective> {
    let expected = pvk.num_public_inputs();
    if inputs.len() != expected {
        return Err(VerifierError::InputLengthMismatch {
            expected,
            got: inputs.len(),
        });
    }
    let ic = &pvk.vk().gamma_abc_g1;
    Ok(g1_linear_combination(&ic[1..], inputs)? + ic[0])
}

/// Curve and subgroup checks for all three proof points.
pub fn validate_proof(proof: &Proof) -> VerifierResult<()> {
    validate_g1(&proof.a)?;
    validate_g2(&proof.b)?;
    validate_g1(&proof.c)?;
    Ok(())
}

/// Run the pairing check. A well-formed proof that does not satisfy the
/// equation is `Ok(false)`; a point off the curve or outside the
/// subgroup is an error.
pub fn verify_proof(
    pvk: &PreparedVerifyingKey,
    proof: &Proof,
    inputs: &[Fr],
) -> VerifierResult<bool> {
    validate_proof(proof)?;
    pairing_check(pvk, proof, inputs)
}

/// Pairing check for a proof whose points were already validated.
pub(crate) fn pairing_check(
    pvk: &PreparedVerifyingKey,
    proof: &Proof,
    inputs: &[Fr],
) -> VerifierResult<bool> {
    let vk_x = prepare_inputs(pvk, inputs)?.into_affine();

    let g1 = [proof.a, pvk.alpha_g1_neg, neg(&vk_x), neg(&proof.c)];
    let g2 = [
        G2Prepared::from(proof.b),
        pvk.beta_g2.clone(),
        pvk.gamma_g2.clone(),
        pvk.delta_g2.clone(),
    ];
    Ok(prepared_product_is_one(&g1, &g2)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::AffineRepr;
    use zkv_curve::point::scalar_mul;
    use zkv_curve::CurveError;
    use zkv_types::{Fq, G1Affine, G2Affine, VerifyingKey};

    // Toy key with known discrete logs: α = a·G1, β = b·G2, γ = δ = G2,
    // IC = [G1, G1]. For input x, a proof is valid when
    // A·B = a·b + (1 + x) + c, with A = G1·s, B = G2, C = G1·c.
    fn toy() -> (PreparedVerifyingKey, Fr, Fr) {
        let a = Fr::from(3u64);
        let b = Fr::from(5u64);
        let vk = VerifyingKey {
            alpha_g1: scalar_mul(&G1Affine::generator(), &a),
            beta_g2: scalar_mul(&G2Affine::generator(), &b),
            gamma_g2: G2Affine::generator(),
            delta_g2: G2Affine::generator(),
            gamma_abc_g1: vec![G1Affine::generator(); 2],
        };
        (PreparedVerifyingKey::new(vk).unwrap(), a, b)
    }

    fn toy_proof(a: Fr, b: Fr, x: Fr) -> Proof {
        let c = Fr::from(7u64);
        let s = a * b + Fr::from(1u64) + x + c;
        Proof {
            a: scalar_mul(&G1Affine::generator(), &s),
            b: G2Affine::generator(),
            c: scalar_mul(&G1Affine::generator(), &c),
        }
    }

    #[test]
    fn toy_equation_holds() {
        let (pvk, a, b) = toy();
        let x = Fr::from(11u64);
        assert!(verify_proof(&pvk, &toy_proof(a, b, x), &[x]).unwrap());
    }

    #[test]
    fn wrong_input_is_false() {
        let (pvk, a, b) = toy();
        let proof = toy_proof(a, b, Fr::from(11u64));
        assert!(!verify_proof(&pvk, &proof, &[Fr::from(12u64)]).unwrap());
    }

    #[test]
    fn arity_is_checked() {
        let (pvk, a, b) = toy();
        let proof = toy_proof(a, b, Fr::from(1u64));
        assert!(matches!(
            verify_proof(&pvk, &proof, &[]),
            Err(VerifierError::InputLengthMismatch { expected: 1, got: 0 })
        ));
        assert!(matches!(
            verify_proof(&pvk, &proof, &[Fr::from(1u64), Fr::from(1u64)]),
            Err(VerifierError::InputLengthMismatch { expected: 1, got: 2 })
        ));
    }

    #[test]
    fn vk_x_adds_constant_term() {
        let (pvk, _, _) = toy();
        let vk_x = prepare_inputs(&pvk, &[Fr::from(4u64)]).unwrap().into_affine();
        assert_eq!(vk_x, scalar_mul(&G1Affine::generator(), &Fr::from(5u64)));
    }

    #[test]
    fn off_curve_point_is_an_error_not_false() {
        let (pvk, a, b) = toy();
        let x = Fr::from(11u64);
        let mut proof = toy_proof(a, b, x);
        proof.a = G1Affine::new_unchecked(Fq::from(1u64), Fq::from(1u64));
        assert!(matches!(
            verify_proof(&pvk, &proof, &[x]),
            Err(VerifierError::Curve(CurveError::PointNotOnCurve))
        ));
    }
}
