// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Largest batch accepted unless configured otherwise.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 64;

/// How a multiproof payload is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// One randomized multi-pairing for the whole batch.
    #[default]
    Aggregated,
    /// Every proof on its own, in parallel.
    Individual,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    pub max_batch_size: usize,
    pub batch_mode: BatchMode,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            batch_mode: BatchMode::Aggregated,
        }
    }
}
