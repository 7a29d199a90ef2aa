// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use zkv_codec::CodecError;
use zkv_curve::CurveError;

#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    #[error("expected {expected} public inputs, got {got}")]
    InputLengthMismatch { expected: usize, got: usize },

    #[error("public input {index} of proof {proof} is not below the scalar field order")]
    InvalidPublicInput { proof: usize, index: usize },

    #[error("batch contains no proofs")]
    EmptyBatch,

    #[error("batch of {got} proofs exceeds the limit of {max}")]
    BatchTooLarge { max: usize, got: usize },

    #[error("invalid challenge: {0}")]
    InvalidChallenge(&'static str),

    #[error("invalid verifying key: {0}")]
    InvalidKey(&'static str),

    #[error("a process-wide verifier is already installed")]
    AlreadyInstalled,

    #[error(transparent)]
    Codec(CodecError),

    #[error(transparent)]
    Curve(#[from] CurveError),
}

// Lift the variants that mean the same thing at both layers so callers
// match on one name.
impl From<CodecError> for VerifierError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::InvalidPublicInput { proof, index } => {
                Self::InvalidPublicInput { proof, index }
            }
            CodecError::Curve(e) => Self::Curve(e),
            other => Self::Codec(other),
        }
    }
}

pub type VerifierResult<T> = Result<T, VerifierError>;
