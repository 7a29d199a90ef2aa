// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Standalone ABI encoding of one dynamic array of static tuples.
//!
//! This is the calldata shape of `verify(bytes publics, bytes proofs)`:
//! each argument is `abi.encode(uint256[k][])`, i.e.
//!
//! ```text
//! word 0        offset of the array, always 0x20
//! word 1        N, number of rows
//! word 2..      N rows of k words each, no padding
//! ```
//!
//! A proof row is `uint256[8]` in [`point`](crate::point) order. Public
//! input rows are `uint256[arity]`, where `arity` comes from the verifying
//! key. Lengths are checked exactly: trailing bytes are as fatal as missing
//! ones.

use ethabi::ethereum_types::U256;
use ethabi::{ParamType, Token};
use zkv_curve::field::{fr_from_be_bytes, to_be_bytes};
use zkv_types::{Proof, PublicInputs};

use crate::point::{decode_proof, encode_proof, PROOF_BYTES};
use crate::{CodecError, CodecResult};

/// ABI word width.
pub const WORD: usize = 32;

/// Words in one `uint256[8]` proof row.
pub const PROOF_WORDS: usize = PROOF_BYTES / WORD;

const HEADER_BYTES: usize = 2 * WORD;
const HEAD_OFFSET: usize = WORD;

/// Read a header word as `usize`, `None` if it does not fit.
fn word_to_usize(word: &[u8]) -> Option<usize> {
    let value = U256::from_big_endian(word);
    if value.bits() > 64 {
        return None;
    }
    usize::try_from(value.low_u64()).ok()
}

/// `uint256[row_words][]`
fn array_type(row_words: usize) -> ParamType {
    ParamType::Array(Box::new(ParamType::FixedArray(
        Box::new(ParamType::Uint(256)),
        row_words,
    )))
}

/// Row count of an encoded array, after checking only the header.
///
/// Cheap enough to run before any row is decoded, which lets callers
/// enforce size limits up front.
pub fn peek_array_len(bytes: &[u8]) -> CodecResult<usize> {
    if bytes.len() < HEADER_BYTES {
        return Err(CodecError::malformed(format!(
            "truncated array header: {} bytes",
            bytes.len()
        )));
    }
    if bytes.len() % WORD != 0 {
        return Err(CodecError::malformed(format!(
            "payload of {} bytes is not word aligned",
            bytes.len()
        )));
    }
    match word_to_usize(&bytes[..WORD]) {
        Some(HEAD_OFFSET) => {}
        _ => return Err(CodecError::malformed("array offset must be 0x20")),
    }
    word_to_usize(&bytes[WORD..HEADER_BYTES])
        .ok_or_else(|| CodecError::malformed("array length overflows"))
}

/// Check the header and exact payload length, then decode the rows as
/// 32-byte big-endian words.
fn decode_rows(bytes: &[u8], row_words: usize) -> CodecResult<Vec<Vec<[u8; WORD]>>> {
    let len = peek_array_len(bytes)?;
    let expected = len
        .checked_mul(row_words * WORD)
        .and_then(|body| body.checked_add(HEADER_BYTES))
        .ok_or_else(|| CodecError::malformed("array length overflows"))?;
    if bytes.len() != expected {
        return Err(CodecError::malformed(format!(
            "array of {len} rows needs {expected} bytes, got {}",
            bytes.len()
        )));
    }

    let mut tokens = ethabi::decode(&[array_type(row_words)], bytes)
        .map_err(|e| CodecError::malformed(format!("abi: {e}")))?;
    let rows = tokens
        .pop()
        .and_then(Token::into_array)
        .ok_or_else(|| CodecError::malformed("expected a dynamic array"))?;
    rows.into_iter().map(row_to_words).collect()
}

fn row_to_words(row: Token) -> CodecResult<Vec<[u8; WORD]>> {
    row.into_fixed_array()
        .ok_or_else(|| CodecError::malformed("expected a fixed-size row"))?
        .into_iter()
        .map(token_to_word)
        .collect()
}

fn token_to_word(token: Token) -> CodecResult<[u8; WORD]> {
    let value = token
        .into_uint()
        .ok_or_else(|| CodecError::malformed("expected a uint256 word"))?;
    let mut out = [0u8; WORD];
    value.to_big_endian(&mut out);
    Ok(out)
}

fn uint(word: &[u8]) -> Token {
    Token::Uint(U256::from_big_endian(word))
}

fn encode_rows(rows: Vec<Token>) -> Vec<u8> {
    ethabi::encode(&[Token::Array(rows)])
}

/// Decode `abi.encode(uint256[8][])`.
pub fn decode_proofs(bytes: &[u8]) -> CodecResult<Vec<Proof>> {
    decode_rows(bytes, PROOF_WORDS)?
        .into_iter()
        .map(|row| decode_proof(&row.concat()))
        .collect()
}

pub fn encode_proofs(proofs: &[Proof]) -> Vec<u8> {
    let rows = proofs
        .iter()
        .map(|proof| {
            let words = encode_proof(proof);
            Token::FixedArray(words.chunks_exact(WORD).map(uint).collect())
        })
        .collect();
    encode_rows(rows)
}

/// Decode `abi.encode(uint256[arity][])`.
///
/// Every value must already be a canonical scalar; an out-of-range word is
/// reported with its row and column rather than reduced.
pub fn decode_public_inputs(bytes: &[u8], arity: usize) -> CodecResult<Vec<PublicInputs>> {
    if arity == 0 {
        return Err(CodecError::malformed(
            "zero-width input rows cannot be ABI encoded",
        ));
    }
    decode_rows(bytes, arity)?
        .into_iter()
        .enumerate()
        .map(|(proof, row)| {
            row.iter()
                .enumerate()
                .map(|(index, word)| {
                    fr_from_be_bytes(word)
                        .map_err(|_| CodecError::InvalidPublicInput { proof, index })
                })
                .collect::<CodecResult<Vec<_>>>()
                .map(PublicInputs::from)
        })
        .collect()
}

/// Inverse of [`decode_public_inputs`]. All rows must share one non-zero
/// width.
pub fn encode_public_inputs(rows: &[PublicInputs]) -> CodecResult<Vec<u8>> {
    let arity = rows.first().map_or(1, PublicInputs::len);
    if arity == 0 {
        return Err(CodecError::malformed(
            "zero-width input rows cannot be ABI encoded",
        ));
    }
    if let Some(row) = rows.iter().position(|r| r.len() != arity) {
        return Err(CodecError::malformed(format!(
            "input row {row} has {} values, expected {arity}",
            rows[row].len()
        )));
    }
    let tokens = rows
        .iter()
        .map(|row| {
            let words = row.as_slice().iter().map(|x| uint(&to_be_bytes(x)));
            Token::FixedArray(words.collect())
        })
        .collect();
    Ok(encode_rows(tokens))
}
