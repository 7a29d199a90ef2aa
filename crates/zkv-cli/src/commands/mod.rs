// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod config;
pub mod convert;
#[cfg(test)]
mod fixture;
pub mod inspect;
pub mod verify;
pub mod verify_batch;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use zkv_codec::decode_hex;
use zkv_verifier::Verifier;

use crate::config::CliConfig;

/// Load the key named by `--vk` or the config and build a verifier.
pub fn load_verifier(flag: Option<&Path>, config: &CliConfig) -> Result<Verifier> {
    let path = config.resolve_vk_path(flag)?;
    let bytes =
        fs::read(&path).with_context(|| format!("cannot read verifying key at {}", path.display()))?;
    let verifier = Verifier::from_key_bytes(&bytes, config.verifier.clone())
        .with_context(|| format!("invalid verifying key at {}", path.display()))?;
    info!(
        path = %path.display(),
        public_inputs = verifier.num_public_inputs(),
        "verifying key loaded"
    );
    Ok(verifier)
}

/// Read a file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("cannot read stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

/// A payload argument: inline hex, or `@file` holding hex text or raw
/// ABI bytes.
pub fn read_payload(arg: &str) -> Result<Vec<u8>> {
    match arg.strip_prefix('@') {
        Some(path) => {
            let bytes = read_input(Path::new(path))?;
            match std::str::from_utf8(&bytes) {
                Ok(text) if looks_like_hex(text) => {
                    decode_hex(text).with_context(|| format!("invalid hex in {path}"))
                }
                _ => Ok(bytes),
            }
        }
        None => decode_hex(arg).context("payload is not valid hex"),
    }
}

fn looks_like_hex(text: &str) -> bool {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
