// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # zkv-codec
//!
//! Byte-level encodings consumed by the verifier. Everything is decoded and
//! validated (field range, curve and subgroup membership) before any
//! pairing runs.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`abi`] | EVM ABI `uint256[8][]` proofs and `uint256[k][]` public inputs |
//! | [`vk`] | versioned verifying-key file, arkworks key import |
//! | [`json`] | Solidity-style `verifyProof(a, b, c, input)` arguments |
//! | [`point`] | uncompressed big-endian G1/G2 encodings |
//!
//! # Byte order
//!
//! Coordinates are 32-byte big-endian words. G2 coordinates put the
//! imaginary part first (`x.c1, x.c0, y.c1, y.c0`), the order used by the
//! EVM pairing precompile and Solidity verifiers.

pub mod abi;
mod error;
pub mod json;
pub mod point;
pub mod vk;

pub use error::{CodecError, CodecResult};
pub use json::SolidityProof;

/// Decode hex text, with or without a `0x` prefix.
pub fn decode_hex(s: &str) -> CodecResult<Vec<u8>> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    Ok(hex::decode(digits)?)
}

/// `0x`-prefixed lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
