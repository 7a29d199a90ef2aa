// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_bn254::Fr;

/// Ordered public inputs of one proof, already reduced into `Fr`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicInputs(pub Vec<Fr>);

impl PublicInputs {
    pub fn new(values: Vec<Fr>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[Fr] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Fr>> for PublicInputs {
    fn from(values: Vec<Fr>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[Fr; N]> for PublicInputs {
    fn from(values: [Fr; N]) -> Self {
        Self(values.to_vec())
    }
}

impl AsRef<[Fr]> for PublicInputs {
    fn as_ref(&self) -> &[Fr] {
        &self.0
    }
}
