// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Scratch directory with a key file and proof payloads for command tests.
//!
//! The key has known discrete logs: α = 3·G1, β = 5·G2, γ = δ = G2 and
//! IC = [G1, G1, G1]. For inputs `[x, y]` the proof `A = s·G1`, `B = G2`,
//! `C = c·G1` is valid when `s = 15 + 1 + x + y + c`.

use std::fs;
use std::path::PathBuf;

use ark_ec::AffineRepr;
use zkv_codec::abi::{encode_proofs, encode_public_inputs};
use zkv_codec::vk::encode_verifying_key;
use zkv_codec::{encode_hex, SolidityProof};
use zkv_curve::point::scalar_mul;
use zkv_types::{Fr, G1Affine, G2Affine, Proof, PublicInputs, VerifyingKey};

use crate::config::CliConfig;

pub struct Workspace {
    pub dir: PathBuf,
    pub vk_path: PathBuf,
    pub config: CliConfig,
}

impl Workspace {
    /// `name` keeps parallel tests out of each other's directories.
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("zkv-cli-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let vk_path = dir.join("game.vk");
        fs::write(&vk_path, encode_verifying_key(&toy_key()).unwrap()).unwrap();
        Self {
            dir,
            vk_path,
            config: CliConfig::default(),
        }
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Proof JSON file for one call.
    pub fn proof_json(&self, name: &str, proof: &Proof, inputs: &[Fr]) -> PathBuf {
        let json = SolidityProof::encode(proof, inputs).to_json().unwrap();
        self.write(name, json)
    }

    /// `@file` arguments for a multiproof payload pair, as hex text.
    pub fn multiproof(&self, items: &[(Proof, [Fr; 2])]) -> (String, String) {
        let proofs: Vec<Proof> = items.iter().map(|(p, _)| *p).collect();
        let publics: Vec<PublicInputs> = items.iter().map(|(_, x)| PublicInputs::from(*x)).collect();
        let publics = self.write("publics.hex", encode_hex(&encode_public_inputs(&publics).unwrap()));
        let proofs = self.write("proofs.hex", encode_hex(&encode_proofs(&proofs)));
        (
            format!("@{}", publics.display()),
            format!("@{}", proofs.display()),
        )
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

pub fn toy_key() -> VerifyingKey {
    VerifyingKey {
        alpha_g1: scalar_mul(&G1Affine::generator(), &Fr::from(3u64)),
        beta_g2: scalar_mul(&G2Affine::generator(), &Fr::from(5u64)),
        gamma_g2: G2Affine::generator(),
        delta_g2: G2Affine::generator(),
        gamma_abc_g1: vec![G1Affine::generator(); 3],
    }
}

/// A valid proof for `[x, y]` under [`toy_key`].
pub fn toy_proof(x: u64, y: u64) -> (Proof, [Fr; 2]) {
    let c = Fr::from(7u64);
    let s = Fr::from(16u64) + Fr::from(x) + Fr::from(y) + c;
    let proof = Proof {
        a: scalar_mul(&G1Affine::generator(), &s),
        b: G2Affine::generator(),
        c: scalar_mul(&G1Affine::generator(), &c),
    };
    (proof, [Fr::from(x), Fr::from(y)])
}
