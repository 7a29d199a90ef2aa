// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fixture circuit and proofs for the integration tests.
//! Circuit: x · y = product, x + y = sum
//! Public inputs: [product, sum]
//! Private witness: x, y

#![allow(dead_code)]

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, ProvingKey};
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use zkv_types::{BatchItem, Proof, VerifyingKey};

#[derive(Clone, Default)]
pub struct FactorCircuit {
    pub x: Option<Fr>,
    pub y: Option<Fr>,
}

impl ConstraintSynthesizer<Fr> for FactorCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let product = cs.new_input_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            let y = self.y.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * y)
        })?;
        let sum = cs.new_input_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            let y = self.y.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x + y)
        })?;
        let x_var = cs.new_witness_variable(|| self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let y_var = cs.new_witness_variable(|| self.y.ok_or(SynthesisError::AssignmentMissing))?;

        cs.enforce_constraint(lc!() + x_var, lc!() + y_var, lc!() + product)?;
        cs.enforce_constraint(lc!() + x_var + y_var, lc!() + Variable::One, lc!() + sum)?;
        Ok(())
    }
}

pub struct Fixture {
    pub pk: ProvingKey<Bn254>,
    pub ark_vk: ark_groth16::VerifyingKey<Bn254>,
    pub vk: VerifyingKey,
    rng: StdRng,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (pk, ark_vk) =
            Groth16::<Bn254>::circuit_specific_setup(FactorCircuit::default(), &mut rng).unwrap();
        Self {
            pk,
            vk: ark_vk.clone().into(),
            ark_vk,
            rng,
        }
    }

    /// Proof that the prover knows `x`, `y` with the given product and sum.
    pub fn prove(&mut self, x: u64, y: u64) -> (Proof, Vec<Fr>) {
        let (x, y) = (Fr::from(x), Fr::from(y));
        let circuit = FactorCircuit {
            x: Some(x),
            y: Some(y),
        };
        let proof = Groth16::<Bn254>::prove(&self.pk, circuit, &mut self.rng).unwrap();
        (proof.into(), vec![x * y, x + y])
    }

    pub fn item(&mut self, x: u64, y: u64) -> BatchItem {
        let (proof, inputs) = self.prove(x, y);
        BatchItem::new(proof, inputs)
    }

    pub fn items(&mut self, n: u64) -> Vec<BatchItem> {
        (0..n).map(|i| self.item(i + 2, i + 3)).collect()
    }
}

/// Same proof, one public input shifted by one.
pub fn with_wrong_input(mut item: BatchItem) -> BatchItem {
    item.inputs.0[1] += Fr::from(1u64);
    item
}
