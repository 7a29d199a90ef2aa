// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use crate::{Proof, PublicInputs};

/// One entry of a multiproof payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchItem {
    pub proof: Proof,
    pub inputs: PublicInputs,
}

impl BatchItem {
    pub fn new(proof: Proof, inputs: impl Into<PublicInputs>) -> Self {
        Self {
            proof,
            inputs: inputs.into(),
        }
    }
}
