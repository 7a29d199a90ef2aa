// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Fiat–Shamir transcript for batch challenges, built on `merlin`.
//!
//! ```text
//! transcript "zkv.groth16.batch.v1"
//!   key     : key digest (32)
//!   n       : N (u64 LE)
//!   per item: proof (256), arity (u64 LE), input (32 BE) each
//! r_i = challenge_bytes("r", 64) mod r, redrawn while zero
//! ```
//!
//! Every challenge depends on every proof in the batch, so proofs cannot be
//! chosen after the challenges are known.

use ark_ff::{PrimeField, Zero};
use merlin::Transcript;
use zkv_codec::point::encode_proof;
use zkv_curve::field::to_be_bytes;
use zkv_types::{BatchItem, Fr};

pub const DOMAIN_TAG: &[u8] = b"zkv.groth16.batch.v1";

/// Groth16 batch messages on top of a `merlin` transcript.
pub trait TranscriptProtocol {
    fn append_u64_le(&mut self, label: &'static [u8], value: u64);

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Fr);

    fn append_item(&mut self, item: &BatchItem);

    /// Absorb a whole batch, count first.
    fn append_batch(&mut self, items: &[BatchItem]);

    /// Wide challenge reduced mod r, redrawn until non-zero.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Fr;

    fn challenge_scalars(&mut self, label: &'static [u8], n: usize) -> Vec<Fr>;
}

impl TranscriptProtocol for Transcript {
    fn append_u64_le(&mut self, label: &'static [u8], value: u64) {
        self.append_message(label, &value.to_le_bytes());
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Fr) {
        self.append_message(label, &to_be_bytes(scalar));
    }

    fn append_item(&mut self, item: &BatchItem) {
        self.append_message(b"proof", &encode_proof(&item.proof));
        self.append_u64_le(b"arity", item.inputs.len() as u64);
        for value in item.inputs.as_slice() {
            self.append_scalar(b"input", value);
        }
    }

    fn append_batch(&mut self, items: &[BatchItem]) {
        self.append_u64_le(b"n", items.len() as u64);
        for item in items {
            self.append_item(item);
        }
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Fr {
        loop {
            let mut buf = [0u8; 64];
            self.challenge_bytes(label, &mut buf);
            let r = Fr::from_le_bytes_mod_order(&buf);
            if !r.is_zero() {
                return r;
            }
        }
    }

    fn challenge_scalars(&mut self, label: &'static [u8], n: usize) -> Vec<Fr> {
        (0..n).map(|_| self.challenge_scalar(label)).collect()
    }
}

/// Fresh transcript bound to one verifying key.
pub fn batch_transcript(key_digest: &[u8; 32]) -> Transcript {
    let mut transcript = Transcript::new(DOMAIN_TAG);
    transcript.append_message(b"key", key_digest);
    transcript
}

/// One challenge per item, bound to the key and the whole batch.
pub fn derive_challenges(key_digest: &[u8; 32], items: &[BatchItem]) -> Vec<Fr> {
    let mut transcript = batch_transcript(key_digest);
    transcript.append_batch(items);
    transcript.challenge_scalars(b"r", items.len())
}
