// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! `~/.zkv/config.json`, with environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use zkv_verifier::VerifierConfig;

use crate::output;

pub const ENV_VK_PATH: &str = "ZKV_VK_PATH";
pub const ENV_MAX_BATCH: &str = "ZKV_MAX_BATCH";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    pub vk_path: Option<PathBuf>,
    #[serde(flatten)]
    pub verifier: VerifierConfig,
}

impl CliConfig {
    /// Apply `ZKV_VK_PATH` / `ZKV_MAX_BATCH` from `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = lookup(ENV_VK_PATH) {
            self.vk_path = Some(PathBuf::from(path));
        }
        if let Some(max) = lookup(ENV_MAX_BATCH) {
            self.verifier.max_batch_size = parse_max_batch(&max)
                .with_context(|| format!("{ENV_MAX_BATCH} must be a positive integer, got {max:?}"))?;
        }
        Ok(())
    }

    /// Key file to use: the `--vk` flag wins over environment and file.
    pub fn resolve_vk_path(&self, flag: Option<&Path>) -> Result<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.vk_path.clone())
            .ok_or_else(|| {
                output::fail_with_hint(
                    "no verifying key configured",
                    "pass --vk <file>, set ZKV_VK_PATH, or run `zkv config set vk_path <file>`",
                )
            })
    }
}

pub fn parse_max_batch(s: &str) -> Result<usize> {
    let n: usize = s.trim().parse()?;
    anyhow::ensure!(n > 0, "batch limit must be at least 1");
    Ok(n)
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".zkv").join("config.json"))
}

/// Stored config, or defaults when no file exists yet.
pub fn load_file() -> Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let data = fs::read_to_string(&path)
        .with_context(|| format!("cannot read config at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid config JSON")
}

/// Stored config with environment overrides applied.
pub fn load() -> Result<CliConfig> {
    let mut config = load_file()?;
    config.apply_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

pub fn save(config: &CliConfig) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json).with_context(|| format!("cannot write config at {}", path.display()))?;
    Ok(())
}
