// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::Result;
use zkv_verifier::BatchMode;

use crate::commands::{load_verifier, read_payload};
use crate::config::CliConfig;
use crate::output;

/// Verify a `verify(publics, proofs)` payload pair.
///
/// Aggregated mode gives one verdict for the whole batch. Individual mode,
/// from `--individual` or the config, checks each proof and names the ones
/// that fail.
pub fn run(
    vk: Option<&Path>,
    config: &CliConfig,
    publics: &str,
    proofs: &str,
    individual: bool,
) -> Result<bool> {
    let verifier = load_verifier(vk, config)?;
    let publics = read_payload(publics)?;
    let proofs = read_payload(proofs)?;

    let mode = if individual {
        BatchMode::Individual
    } else {
        config.verifier.batch_mode
    };
    if mode == BatchMode::Aggregated {
        let valid = verifier.verify_multiproof(&publics, &proofs)?;
        output::verdict(valid, serde_json::json!({ "mode": mode }));
        return Ok(valid);
    }

    let items = verifier.decode_multiproof(&publics, &proofs)?;
    let report = verifier.verify_each(&items)?;
    let failed: Vec<usize> = report
        .results
        .iter()
        .enumerate()
        .filter(|(_, ok)| !**ok)
        .map(|(i, _)| i)
        .collect();

    if !output::is_json() {
        output::label("proofs", &report.len().to_string());
        output::label("valid", &report.valid_count().to_string());
        for i in &failed {
            output::warn(&format!("proof {i} failed"));
        }
    }
    output::verdict(
        report.all_valid(),
        serde_json::json!({
            "mode": mode,
            "proofs": report.len(),
            "failed": failed,
        }),
    );
    Ok(report.all_valid())
}
