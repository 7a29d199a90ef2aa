// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Uncompressed big-endian point encodings.
//!
//! - G1: `x ‖ y` (64 bytes)
//! - G2: `x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0` (128 bytes)
//! - Proof: `A ‖ B ‖ C` (256 bytes), which is also the word order of one
//!   `uint256[8]` proof in ABI calldata.
//!
//! The point at infinity is all zeros.

use ark_bn254::{Fq2, G1Affine, G2Affine};
use zkv_curve::field::{fq_from_be_bytes, to_be_bytes, FIELD_BYTES};
use zkv_curve::point::{g1_from_xy, g2_from_xy};
use zkv_types::Proof;

use crate::{CodecError, CodecResult};

pub const G1_BYTES: usize = 2 * FIELD_BYTES;
pub const G2_BYTES: usize = 4 * FIELD_BYTES;
pub const PROOF_BYTES: usize = 2 * G1_BYTES + G2_BYTES;

fn word(bytes: &[u8], i: usize) -> &[u8] {
    &bytes[i * FIELD_BYTES..(i + 1) * FIELD_BYTES]
}

pub fn decode_g1(bytes: &[u8]) -> CodecResult<G1Affine> {
    if bytes.len() != G1_BYTES {
        return Err(CodecError::malformed(format!(
            "G1 point must be {G1_BYTES} bytes, got {}",
            bytes.len()
        )));
    }
    let x = fq_from_be_bytes(word(bytes, 0))?;
    let y = fq_from_be_bytes(word(bytes, 1))?;
    Ok(g1_from_xy(x, y)?)
}

pub fn encode_g1(point: &G1Affine) -> [u8; G1_BYTES] {
    let mut out = [0u8; G1_BYTES];
    if !point.infinity {
        out[..FIELD_BYTES].copy_from_slice(&to_be_bytes(&point.x));
        out[FIELD_BYTES..].copy_from_slice(&to_be_bytes(&point.y));
    }
    out
}

pub fn decode_g2(bytes: &[u8]) -> CodecResult<G2Affine> {
    if bytes.len() != G2_BYTES {
        return Err(CodecError::malformed(format!(
            "G2 point must be {G2_BYTES} bytes, got {}",
            bytes.len()
        )));
    }
    let x_c1 = fq_from_be_bytes(word(bytes, 0))?;
    let x_c0 = fq_from_be_bytes(word(bytes, 1))?;
    let y_c1 = fq_from_be_bytes(word(bytes, 2))?;
    let y_c0 = fq_from_be_bytes(word(bytes, 3))?;
    Ok(g2_from_xy(Fq2::new(x_c0, x_c1), Fq2::new(y_c0, y_c1))?)
}

pub fn encode_g2(point: &G2Affine) -> [u8; G2_BYTES] {
    let mut out = [0u8; G2_BYTES];
    if !point.infinity {
        let coords = [point.x.c1, point.x.c0, point.y.c1, point.y.c0];
        for (chunk, c) in out.chunks_exact_mut(FIELD_BYTES).zip(coords.iter()) {
            chunk.copy_from_slice(&to_be_bytes(c));
        }
    }
    out
}

pub fn decode_proof(bytes: &[u8]) -> CodecResult<Proof> {
    if bytes.len() != PROOF_BYTES {
        return Err(CodecError::malformed(format!(
            "proof must be {PROOF_BYTES} bytes, got {}",
            bytes.len()
        )));
    }
    let a = decode_g1(&bytes[..G1_BYTES])?;
    let b = decode_g2(&bytes[G1_BYTES..G1_BYTES + G2_BYTES])?;
    let c = decode_g1(&bytes[G1_BYTES + G2_BYTES..])?;
    Ok(Proof { a, b, c })
}

pub fn encode_proof(proof: &Proof) -> [u8; PROOF_BYTES] {
    let mut out = [0u8; PROOF_BYTES];
    out[..G1_BYTES].copy_from_slice(&encode_g1(&proof.a));
    out[G1_BYTES..G1_BYTES + G2_BYTES].copy_from_slice(&encode_g2(&proof.b));
    out[G1_BYTES + G2_BYTES..].copy_from_slice(&encode_g1(&proof.c));
    out
}
