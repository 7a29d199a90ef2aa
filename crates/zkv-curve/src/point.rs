// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Validated G1/G2 points and the group operations the verifier needs.
//!
//! G1 is `y² = x³ + 3` over `Fq` with cofactor 1, so curve membership
//! implies subgroup membership. G2 lives on the sextic twist over `Fq2`
//! and has a large cofactor: an on-curve G2 point must also pass the
//! order-r subgroup check before it may enter a pairing.
//!
//! The all-zero coordinate pair is the point at infinity, matching the
//! EVM precompile convention.

use ark_bn254::{Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{AdditiveGroup, PrimeField, Zero};

use crate::{CurveError, CurveResult};

/// Build a G1 point from affine coordinates.
pub fn g1_from_xy(x: Fq, y: Fq) -> CurveResult<G1Affine> {
    if x.is_zero() && y.is_zero() {
        return Ok(G1Affine::identity());
    }
    let point = G1Affine::new_unchecked(x, y);
    validate_g1(&point)?;
    Ok(point)
}

/// Build a G2 point from affine coordinates over `Fq2`.
pub fn g2_from_xy(x: Fq2, y: Fq2) -> CurveResult<G2Affine> {
    if x.is_zero() && y.is_zero() {
        return Ok(G2Affine::identity());
    }
    let point = G2Affine::new_unchecked(x, y);
    validate_g2(&point)?;
    Ok(point)
}

/// Check a G1 point that did not come through [`g1_from_xy`].
pub fn validate_g1(point: &G1Affine) -> CurveResult<()> {
    if point.infinity {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(CurveError::PointNotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CurveError::InvalidSubgroup);
    }
    Ok(())
}

/// Check a G2 point that did not come through [`g2_from_xy`].
pub fn validate_g2(point: &G2Affine) -> CurveResult<()> {
    if point.infinity {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(CurveError::PointNotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CurveError::InvalidSubgroup);
    }
    Ok(())
}

pub fn add<A: AffineRepr>(a: &A, b: &A) -> A {
    (a.into_group() + *b).into_affine()
}

pub fn double<A: AffineRepr>(a: &A) -> A {
    a.into_group().double().into_affine()
}

pub fn neg<A: AffineRepr>(a: &A) -> A {
    (-a.into_group()).into_affine()
}

pub fn scalar_mul<A: AffineRepr>(a: &A, scalar: &A::ScalarField) -> A {
    a.mul_bigint(scalar.into_bigint()).into_affine()
}

/// `Σ scalars[i] · bases[i]` over G1, left in projective form so callers
/// can keep accumulating before normalising.
pub fn g1_linear_combination(bases: &[G1Affine], scalars: &[Fr]) -> CurveResult<G1Projective> {
    if bases.len() != scalars.len() {
        return Err(CurveError::InvalidInput(
            "linear combination needs one scalar per base",
        ));
    }
    if bases.is_empty() {
        return Ok(G1Projective::zero());
    }
    G1Projective::msm(bases, scalars)
        .map_err(|_| CurveError::InvalidInput("linear combination needs one scalar per base"))
}
