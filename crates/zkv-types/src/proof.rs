// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 proof over BN254

use ark_bn254::{Bn254, G1Affine, G2Affine};

/// Groth16 proof `(A, B, C)`.
///
/// Points built through `zkv-codec` are already checked for curve and
/// subgroup membership. Values assembled by hand are re-checked by
/// `Verifier::verify` before any pairing runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

impl Proof {
    pub fn new(a: G1Affine, b: G2Affine, c: G1Affine) -> Self {
        Self { a, b, c }
    }
}

impl From<ark_groth16::Proof<Bn254>> for Proof {
    fn from(proof: ark_groth16::Proof<Bn254>) -> Self {
        Self {
            a: proof.a,
            b: proof.b,
            c: proof.c,
        }
    }
}

impl From<Proof> for ark_groth16::Proof<Bn254> {
    fn from(proof: Proof) -> Self {
        ark_groth16::Proof {
            a: proof.a,
            b: proof.b,
            c: proof.c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn ark_proof_conversion_preserves_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = (G1Affine::generator() * Fr::rand(&mut rng)).into_affine();
        let b = (G2Affine::generator() * Fr::rand(&mut rng)).into_affine();
        let c = (G1Affine::generator() * Fr::rand(&mut rng)).into_affine();

        let proof = Proof::new(a, b, c);
        let ark: ark_groth16::Proof<Bn254> = proof.into();
        assert_eq!(Proof::from(ark), proof);
    }
}
