// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Solidity-style proof JSON.
//!
//! Mirrors the arguments of `verifyProof(uint[2] a, uint[2][2] b, uint[2] c,
//! uint[k] input)`:
//!
//! ```json
//! {
//!   "a": ["<x>", "<y>"],
//!   "b": [["<x.c1>", "<x.c0>"], ["<y.c1>", "<y.c0>"]],
//!   "c": ["<x>", "<y>"],
//!   "inputs": ["1", "2"]
//! }
//! ```
//!
//! Values are decimal strings (or `0x` hex). Nothing is reduced: a
//! coordinate `>= p` or an input `>= r` is an error.

use ark_bn254::{Fq2, Fr};
use serde::{Deserialize, Serialize};
use zkv_curve::field::{fq_from_decimal, fr_from_decimal, to_decimal};
use zkv_curve::point::{g1_from_xy, g2_from_xy};
use zkv_types::{G1Affine, G2Affine, Proof, PublicInputs};

use crate::{CodecError, CodecResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityProof {
    pub a: [String; 2],
    pub b: [[String; 2]; 2],
    pub c: [String; 2],
    #[serde(default)]
    pub inputs: Vec<String>,
}

impl SolidityProof {
    pub fn from_json(s: &str) -> CodecResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> CodecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate into a proof and its public inputs.
    pub fn decode(&self) -> CodecResult<(Proof, PublicInputs)> {
        let a = decode_g1(&self.a)?;
        let b = g2_from_xy(
            Fq2::new(fq_from_decimal(&self.b[0][1])?, fq_from_decimal(&self.b[0][0])?),
            Fq2::new(fq_from_decimal(&self.b[1][1])?, fq_from_decimal(&self.b[1][0])?),
        )?;
        let c = decode_g1(&self.c)?;
        let inputs = self
            .inputs
            .iter()
            .enumerate()
            .map(|(index, s)| {
                fr_from_decimal(s).map_err(|_| CodecError::InvalidPublicInput { proof: 0, index })
            })
            .collect::<CodecResult<Vec<Fr>>>()?;
        Ok((Proof { a, b, c }, inputs.into()))
    }

    pub fn encode(proof: &Proof, inputs: &[Fr]) -> Self {
        let g1 = |p: &G1Affine| [to_decimal(&p.x), to_decimal(&p.y)];
        let g2 = |p: &G2Affine| {
            [
                [to_decimal(&p.x.c1), to_decimal(&p.x.c0)],
                [to_decimal(&p.y.c1), to_decimal(&p.y.c0)],
            ]
        };
        Self {
            a: g1(&proof.a),
            b: g2(&proof.b),
            c: g1(&proof.c),
            inputs: inputs.iter().map(to_decimal).collect(),
        }
    }
}

fn decode_g1(xy: &[String; 2]) -> CodecResult<G1Affine> {
    Ok(g1_from_xy(fq_from_decimal(&xy[0])?, fq_from_decimal(&xy[1])?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use zkv_curve::CurveError;

    fn sample() -> (Proof, Vec<Fr>) {
        let mut rng = StdRng::seed_from_u64(5);
        let proof = Proof {
            a: (G1Affine::generator() * Fr::rand(&mut rng)).into_affine(),
            b: (G2Affine::generator() * Fr::rand(&mut rng)).into_affine(),
            c: (G1Affine::generator() * Fr::rand(&mut rng)).into_affine(),
        };
        (proof, vec![Fr::from(1u64), Fr::rand(&mut rng)])
    }

    #[test]
    fn json_roundtrip() {
        let (proof, inputs) = sample();
        let json = SolidityProof::encode(&proof, &inputs).to_json().unwrap();
        let (decoded, decoded_inputs) = SolidityProof::from_json(&json).unwrap().decode().unwrap();
        assert_eq!(decoded, proof);
        assert_eq!(decoded_inputs.as_slice(), inputs.as_slice());
    }

    #[test]
    fn inputs_default_to_empty() {
        let (proof, _) = sample();
        let mut value = serde_json::to_value(SolidityProof::encode(&proof, &[])).unwrap();
        value.as_object_mut().unwrap().remove("inputs");
        let parsed: SolidityProof = serde_json::from_value(value).unwrap();
        assert!(parsed.decode().unwrap().1.is_empty());
    }

    #[test]
    fn out_of_range_input_is_located() {
        let (proof, _) = sample();
        let mut sp = SolidityProof::encode(&proof, &[Fr::from(1u64)]);
        sp.inputs.push(
            "21888242871839275222246405745257275088548364400416034343698204186575808495617".into(),
        );
        assert!(matches!(
            sp.decode(),
            Err(CodecError::InvalidPublicInput { proof: 0, index: 1 })
        ));
    }

    #[test]
    fn swapped_g2_coordinates_are_off_curve() {
        let (proof, _) = sample();
        let mut sp = SolidityProof::encode(&proof, &[]);
        sp.b[0].swap(0, 1);
        assert!(matches!(
            sp.decode(),
            Err(CodecError::Curve(CurveError::PointNotOnCurve))
        ));
    }

    #[test]
    fn missing_field_is_a_json_error() {
        assert!(matches!(
            SolidityProof::from_json(r#"{"a": ["1", "2"]}"#),
            Err(CodecError::Json(_))
        ));
    }
}
