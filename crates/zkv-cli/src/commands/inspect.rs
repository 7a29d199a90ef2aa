// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use zkv_codec::encode_hex;
use zkv_codec::point::{encode_g1, encode_g2};
use zkv_codec::vk::VK_MAGIC;
use zkv_verifier::Verifier;

use crate::commands::read_input;
use crate::config::CliConfig;
use crate::output;

pub fn run(vk: Option<&Path>, config: &CliConfig) -> Result<()> {
    let path = config.resolve_vk_path(vk)?;
    let bytes = read_input(&path)?;
    let format = if bytes.starts_with(VK_MAGIC) {
        "zkvk"
    } else {
        "arkworks"
    };

    let verifier = Verifier::from_key_bytes(&bytes, config.verifier.clone())
        .with_context(|| format!("invalid verifying key at {}", path.display()))?;
    let key = verifier.key();
    let vk = key.vk();
    let digest = hex::encode(key.digest());

    if output::is_json() {
        output::json_output(serde_json::json!({
            "path": path.display().to_string(),
            "format": format,
            "digest": digest,
            "public_inputs": vk.num_public_inputs(),
            "alpha_g1": encode_hex(&encode_g1(&vk.alpha_g1)),
            "beta_g2": encode_hex(&encode_g2(&vk.beta_g2)),
            "gamma_g2": encode_hex(&encode_g2(&vk.gamma_g2)),
            "delta_g2": encode_hex(&encode_g2(&vk.delta_g2)),
            "gamma_abc_g1": vk
                .gamma_abc_g1
                .iter()
                .map(|p| encode_hex(&encode_g1(p)))
                .collect::<Vec<_>>(),
        }));
    } else {
        output::label("path", &path.display().to_string());
        output::label("format", format);
        output::label("digest", &digest);
        output::label("public inputs", &vk.num_public_inputs().to_string());
    }
    Ok(())
}
