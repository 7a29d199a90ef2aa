// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkv-curve: BN254 arithmetic used by the Groth16 verifier.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`field`] | strict byte/decimal decoding of `Fq`/`Fr`, checked inversion |
//! | [`point`] | validated G1/G2 construction, group operations, MSM |
//! | [`pairing`] | optimal ate pairing and multi-pairing identity checks |
//!
//! Every constructor here rejects non-canonical input instead of reducing
//! it: a coordinate `>= p` or a scalar `>= r` is an error, never a wrap.

mod error;
pub mod field;
pub mod pairing;
pub mod point;

pub use error::{CurveError, CurveResult};
pub use pairing::{G2Prepared, Gt};

pub use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
