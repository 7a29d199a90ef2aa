// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifying-key serialization.
//!
//! # Key file layout (version 1)
//!
//! ```text
//! "ZKVK"              4 bytes magic
//! 0x01                1 byte version
//! alpha_g1            64 bytes
//! beta_g2             128 bytes
//! gamma_g2            128 bytes
//! delta_g2            128 bytes
//! n                   u32 big-endian, number of gamma_abc points
//! gamma_abc_g1[n]     64 bytes each
//! ```
//!
//! Points use the uncompressed big-endian encodings of [`crate::point`].
//! Keys exported by an arkworks prover (`CanonicalSerialize`, compressed)
//! are also accepted through [`decode_ark_verifying_key`].

use ark_bn254::Bn254;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use zkv_types::VerifyingKey;

use crate::point::{decode_g1, decode_g2, encode_g1, encode_g2, G1_BYTES, G2_BYTES};
use crate::{CodecError, CodecResult};

pub const VK_MAGIC: &[u8; 4] = b"ZKVK";
pub const VK_VERSION: u8 = 1;

const PREFIX_BYTES: usize = VK_MAGIC.len() + 1;
const FIXED_BYTES: usize = PREFIX_BYTES + G1_BYTES + 3 * G2_BYTES + 4;

/// Encode in the versioned key file format.
pub fn encode_verifying_key(vk: &VerifyingKey) -> CodecResult<Vec<u8>> {
    let count = u32::try_from(vk.gamma_abc_g1.len())
        .map_err(|_| CodecError::malformed("too many gamma_abc points"))?;
    let mut out = Vec::with_capacity(FIXED_BYTES + vk.gamma_abc_g1.len() * G1_BYTES);
    out.extend_from_slice(VK_MAGIC);
    out.push(VK_VERSION);
    out.extend_from_slice(&encode_g1(&vk.alpha_g1));
    out.extend_from_slice(&encode_g2(&vk.beta_g2));
    out.extend_from_slice(&encode_g2(&vk.gamma_g2));
    out.extend_from_slice(&encode_g2(&vk.delta_g2));
    out.extend_from_slice(&count.to_be_bytes());
    for point in &vk.gamma_abc_g1 {
        out.extend_from_slice(&encode_g1(point));
    }
    Ok(out)
}

/// Decode the versioned key file format. Every point is validated.
pub fn decode_verifying_key(bytes: &[u8]) -> CodecResult<VerifyingKey> {
    if bytes.len() < PREFIX_BYTES || !bytes.starts_with(VK_MAGIC) {
        return Err(CodecError::malformed("missing ZKVK magic"));
    }
    let version = bytes[VK_MAGIC.len()];
    if version != VK_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    if bytes.len() < FIXED_BYTES {
        return Err(CodecError::malformed(format!(
            "key header needs {FIXED_BYTES} bytes, got {}",
            bytes.len()
        )));
    }

    let rest = &bytes[PREFIX_BYTES..];
    let (alpha, rest) = rest.split_at(G1_BYTES);
    let (beta, rest) = rest.split_at(G2_BYTES);
    let (gamma, rest) = rest.split_at(G2_BYTES);
    let (delta, rest) = rest.split_at(G2_BYTES);
    let mut count = [0u8; 4];
    count.copy_from_slice(&rest[..4]);
    let count = u32::from_be_bytes(count) as usize;

    if count == 0 {
        return Err(CodecError::malformed("key has no gamma_abc points"));
    }
    let expected = count
        .checked_mul(G1_BYTES)
        .and_then(|n| n.checked_add(FIXED_BYTES))
        .ok_or_else(|| CodecError::malformed("gamma_abc count overflows"))?;
    if bytes.len() != expected {
        return Err(CodecError::malformed(format!(
            "key with {count} gamma_abc points needs {expected} bytes, got {}",
            bytes.len()
        )));
    }
    let gamma_abc_g1 = bytes[FIXED_BYTES..]
        .chunks_exact(G1_BYTES)
        .map(decode_g1)
        .collect::<CodecResult<Vec<_>>>()?;

    Ok(VerifyingKey {
        alpha_g1: decode_g1(alpha)?,
        beta_g2: decode_g2(beta)?,
        gamma_g2: decode_g2(gamma)?,
        delta_g2: decode_g2(delta)?,
        gamma_abc_g1,
    })
}

/// Decode an arkworks `VerifyingKey<Bn254>` in compressed canonical form.
pub fn decode_ark_verifying_key(bytes: &[u8]) -> CodecResult<VerifyingKey> {
    let mut reader = bytes;
    let vk = ark_groth16::VerifyingKey::<Bn254>::deserialize_compressed(&mut reader)
        .map_err(|e| CodecError::malformed(format!("arkworks key: {e}")))?;
    if !reader.is_empty() {
        return Err(CodecError::malformed(format!(
            "{} trailing bytes after arkworks key",
            reader.len()
        )));
    }
    if vk.gamma_abc_g1.is_empty() {
        return Err(CodecError::malformed("key has no gamma_abc points"));
    }
    Ok(vk.into())
}

pub fn encode_ark_verifying_key(vk: &VerifyingKey) -> CodecResult<Vec<u8>> {
    let ark: ark_groth16::VerifyingKey<Bn254> = vk.clone().into();
    let mut out = Vec::new();
    ark.serialize_compressed(&mut out)
        .map_err(|e| CodecError::malformed(format!("arkworks key: {e}")))?;
    Ok(out)
}

/// Decode either format, picking by the magic prefix.
pub fn load_verifying_key(bytes: &[u8]) -> CodecResult<VerifyingKey> {
    if bytes.starts_with(VK_MAGIC) {
        decode_verifying_key(bytes)
    } else {
        decode_ark_verifying_key(bytes)
    }
}
