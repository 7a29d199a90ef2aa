// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Process-wide verifier, installed once at startup.

use std::sync::OnceLock;

use tracing::info;

use crate::{Verifier, VerifierError, VerifierResult};

static VERIFIER: OnceLock<Verifier> = OnceLock::new();

/// Install the process-wide verifier. Fails if one is already installed;
/// the key never changes for the life of the process.
pub fn install(verifier: Verifier) -> VerifierResult<()> {
    let digest = hex::encode(verifier.key().digest());
    VERIFIER
        .set(verifier)
        .map_err(|_| VerifierError::AlreadyInstalled)?;
    info!(%digest, "process verifier installed");
    Ok(())
}

pub fn get() -> Option<&'static Verifier> {
    VERIFIER.get()
}
