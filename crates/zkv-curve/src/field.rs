// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Canonical encodings of BN254 base-field (`Fq`) and scalar-field (`Fr`)
//! elements.
//!
//! # Byte order
//!
//! All byte encodings are 32-byte big-endian, the layout of a Solidity
//! `uint256` word. arkworks stores elements in Montgomery form with
//! little-endian limbs, so every conversion goes through `into_bigint`.

use ark_bn254::{Fq, Fr};
use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;

use crate::{CurveError, CurveResult};

/// Width of one encoded field element.
pub const FIELD_BYTES: usize = 32;

/// Decode a 32-byte big-endian integer, rejecting values `>= modulus`.
pub fn from_be_bytes<F: PrimeField>(bytes: &[u8]) -> CurveResult<F> {
    if bytes.len() != FIELD_BYTES {
        return Err(CurveError::InvalidFieldElement("expected a 32-byte word"));
    }
    let value = F::from_be_bytes_mod_order(bytes);
    // from_be_bytes_mod_order reduces; a canonical input survives the round trip unchanged
    if to_be_bytes(&value).as_slice() != bytes {
        return Err(CurveError::InvalidFieldElement("value exceeds the field modulus"));
    }
    Ok(value)
}

/// Encode as a 32-byte big-endian word.
pub fn to_be_bytes<F: PrimeField>(value: &F) -> [u8; FIELD_BYTES] {
    let bytes = value.into_bigint().to_bytes_be();
    let n = bytes.len().min(FIELD_BYTES);
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - n..].copy_from_slice(&bytes[bytes.len() - n..]);
    out
}

/// Parse a decimal string (or `0x`-prefixed hex) without reducing it.
pub fn from_decimal<F: PrimeField>(s: &str) -> CurveResult<F> {
    let s = s.trim();
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => (digits, 16),
        None => (s, 10),
    };
    // parse_bytes also accepts `_` separators and a leading `+`
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(CurveError::InvalidFieldElement("not an unsigned integer"));
    }
    let value = BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or(CurveError::InvalidFieldElement("not an unsigned integer"))?;
    from_biguint(&value)
}

/// Convert an arbitrary-precision integer, rejecting values `>= modulus`.
pub fn from_biguint<F: PrimeField>(value: &BigUint) -> CurveResult<F> {
    let bytes = value.to_bytes_be();
    if bytes.len() > FIELD_BYTES {
        return Err(CurveError::InvalidFieldElement("value exceeds 256 bits"));
    }
    let mut word = [0u8; FIELD_BYTES];
    word[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    from_be_bytes(&word)
}

/// Decimal rendering, the format Solidity tooling prints.
pub fn to_decimal<F: PrimeField>(value: &F) -> String {
    BigUint::from_bytes_be(&to_be_bytes(value)).to_string()
}

pub fn fq_from_be_bytes(bytes: &[u8]) -> CurveResult<Fq> {
    from_be_bytes(bytes)
}

pub fn fr_from_be_bytes(bytes: &[u8]) -> CurveResult<Fr> {
    from_be_bytes(bytes)
}

pub fn fq_from_decimal(s: &str) -> CurveResult<Fq> {
    from_decimal(s)
}

pub fn fr_from_decimal(s: &str) -> CurveResult<Fr> {
    from_decimal(s)
}

/// Multiplicative inverse; zero has none.
pub fn inverse<F: Field>(value: &F) -> CurveResult<F> {
    value.inverse().ok_or(CurveError::DivisionByZero)
}

/// `numerator / denominator`, failing on a zero denominator.
pub fn checked_div<F: Field>(numerator: &F, denominator: &F) -> CurveResult<F> {
    Ok(*numerator * inverse(denominator)?)
}
