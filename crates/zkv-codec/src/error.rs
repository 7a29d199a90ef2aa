// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for decoding proofs, inputs and keys.

use zkv_curve::CurveError;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("unsupported key format version {0}")]
    UnsupportedVersion(u8),

    #[error("public input {index} of proof {proof} is not a canonical scalar")]
    InvalidPublicInput { proof: usize, index: usize },

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error("hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedEncoding(msg.into())
    }
}

pub type CodecResult<T> = Result<T, CodecError>;
