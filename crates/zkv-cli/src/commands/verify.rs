// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use zkv_codec::SolidityProof;

use crate::commands::{load_verifier, read_input};
use crate::config::CliConfig;
use crate::output;

/// Verify one Solidity-style proof JSON. Returns the verdict.
pub fn run(vk: Option<&Path>, config: &CliConfig, proof_path: &Path) -> Result<bool> {
    let verifier = load_verifier(vk, config)?;

    let data = read_input(proof_path)?;
    let text = String::from_utf8(data).context("proof file is not UTF-8")?;
    let call = SolidityProof::from_json(&text)
        .with_context(|| format!("invalid proof JSON in {}", proof_path.display()))?;

    if call.inputs.len() != verifier.num_public_inputs() {
        return Err(output::fail_with_hint(
            &format!(
                "proof carries {} public inputs, key expects {}",
                call.inputs.len(),
                verifier.num_public_inputs()
            ),
            "check that the proof and the verifying key come from the same circuit",
        ));
    }

    let valid = verifier.verify_calldata(&call)?;
    output::verdict(
        valid,
        serde_json::json!({ "public_inputs": call.inputs }),
    );
    Ok(valid)
}
