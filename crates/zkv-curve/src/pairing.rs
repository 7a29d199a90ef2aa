// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Optimal ate pairing on BN254.
//!
//! Product checks run a single multi-Miller loop over all pairs and one
//! final exponentiation, so `∏ e(Pᵢ, Qᵢ) == 1` costs far less than
//! evaluating each pairing separately.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::One;

use crate::{CurveError, CurveResult};

/// Target group element.
pub type Gt = PairingOutput<Bn254>;

/// G2 point with its Miller-loop line coefficients precomputed.
pub type G2Prepared = <Bn254 as Pairing>::G2Prepared;

/// `e(p, q)`.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    Bn254::pairing(*p, *q)
}

/// True iff `gt` is the identity of the target group.
pub fn is_identity(gt: &Gt) -> bool {
    gt.0.is_one()
}

/// `∏ e(Pᵢ, Qᵢ) == 1` over matched pairs.
pub fn pairing_product_is_one(pairs: &[(G1Affine, G2Affine)]) -> CurveResult<bool> {
    if pairs.is_empty() {
        return Err(CurveError::InvalidInput("pairing product over no pairs"));
    }
    let g1 = pairs.iter().map(|(p, _)| *p);
    let g2 = pairs.iter().map(|(_, q)| G2Prepared::from(*q));
    Ok(product_is_one(g1, g2))
}

/// Same as [`pairing_product_is_one`] with G2 sides already prepared.
pub fn prepared_product_is_one(g1: &[G1Affine], g2: &[G2Prepared]) -> CurveResult<bool> {
    if g1.is_empty() {
        return Err(CurveError::InvalidInput("pairing product over no pairs"));
    }
    if g1.len() != g2.len() {
        return Err(CurveError::InvalidInput(
            "pairing product needs as many G2 points as G1 points",
        ));
    }
    Ok(product_is_one(g1.iter().copied(), g2.iter().cloned()))
}

fn product_is_one(
    g1: impl IntoIterator<Item = G1Affine>,
    g2: impl IntoIterator<Item = G2Prepared>,
) -> bool {
    let miller = Bn254::multi_miller_loop(g1, g2);
    // final_exponentiation only returns None for a zero Miller output
    Bn254::final_exponentiation(miller)
        .map(|gt| is_identity(&gt))
        .unwrap_or(false)
}
