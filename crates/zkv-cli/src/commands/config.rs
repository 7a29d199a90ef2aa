// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::path::PathBuf;

use anyhow::Result;
use zkv_verifier::BatchMode;

use crate::config::{self, parse_max_batch};
use crate::output;

const ALLOWED_KEYS: &[&str] = &["vk_path", "max_batch_size", "batch_mode"];

pub fn set(key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    let mut cfg = config::load_file()?;
    match key {
        "vk_path" => cfg.vk_path = Some(PathBuf::from(value)),
        "max_batch_size" => cfg.verifier.max_batch_size = parse_max_batch(value)?,
        "batch_mode" => cfg.verifier.batch_mode = parse_batch_mode(value)?,
        _ => unreachable!(),
    }
    config::save(&cfg)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

fn parse_batch_mode(value: &str) -> Result<BatchMode> {
    match value {
        "aggregated" => Ok(BatchMode::Aggregated),
        "individual" => Ok(BatchMode::Individual),
        other => Err(output::fail_with_hint(
            &format!("unknown batch mode: {other}"),
            "use `aggregated` or `individual`",
        )),
    }
}

/// Effective settings, environment overrides included.
pub fn show() -> Result<()> {
    let cfg = config::load()?;
    let vk_path = cfg
        .vk_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unset)".into());
    let mode = match cfg.verifier.batch_mode {
        BatchMode::Aggregated => "aggregated",
        BatchMode::Individual => "individual",
    };

    if output::is_json() {
        output::json_output(serde_json::json!({
            "config_path": config::config_path()?.display().to_string(),
            "vk_path": cfg.vk_path,
            "max_batch_size": cfg.verifier.max_batch_size,
            "batch_mode": mode,
        }));
    } else {
        output::label("config", &config::config_path()?.display().to_string());
        output::label("vk_path", &vk_path);
        output::label("max_batch_size", &cfg.verifier.max_batch_size.to_string());
        output::label("batch_mode", mode);
    }
    Ok(())
}
