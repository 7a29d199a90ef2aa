// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use zkv_codec::vk::{encode_ark_verifying_key, encode_verifying_key, load_verifying_key};

use crate::commands::read_input;
use crate::output;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KeyFormat {
    /// Versioned `ZKVK` file
    Zkvk,
    /// arkworks compressed `VerifyingKey<Bn254>`
    Ark,
}

/// Re-encode a verifying key. The input format is detected.
pub fn run(input: &Path, output_path: &Path, to: KeyFormat) -> Result<()> {
    let bytes = read_input(input)?;
    let vk = load_verifying_key(&bytes)
        .with_context(|| format!("invalid verifying key at {}", input.display()))?;

    let encoded = match to {
        KeyFormat::Zkvk => encode_verifying_key(&vk)?,
        KeyFormat::Ark => encode_ark_verifying_key(&vk)?,
    };
    fs::write(output_path, &encoded)
        .with_context(|| format!("cannot write {}", output_path.display()))?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "input": input.display().to_string(),
            "output": output_path.display().to_string(),
            "format": format!("{to:?}").to_lowercase(),
            "bytes": encoded.len(),
            "public_inputs": vk.num_public_inputs(),
        }));
    } else {
        output::success(&format!(
            "wrote {} bytes to {}",
            encoded.len(),
            output_path.display()
        ));
    }
    Ok(())
}
