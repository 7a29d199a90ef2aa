// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod config;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::convert::KeyFormat;

#[derive(Parser)]
#[command(name = "zkv", about = "Groth16 BN254 proof verifier")]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,
    /// Verifying key file (overrides ZKV_VK_PATH and the config file)
    #[arg(long, global = true)]
    vk: Option<PathBuf>,
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify a single Solidity-style proof JSON (`-` reads stdin)
    Verify {
        proof: PathBuf,
    },
    /// Verify a multiproof payload: ABI-encoded public inputs and proofs
    VerifyBatch {
        /// `uint256[k][]` public inputs, hex or @file
        #[arg(long)]
        publics: String,
        /// `uint256[8][]` proofs, hex or @file
        #[arg(long)]
        proofs: String,
        /// Check each proof separately and report failures
        #[arg(long)]
        individual: bool,
        /// Override the configured batch limit
        #[arg(long)]
        max_batch: Option<usize>,
    },
    /// Show the digest and shape of the verifying key
    InspectVk,
    /// Re-encode a verifying key
    ConvertVk {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = KeyFormat::Zkvk)]
        to: KeyFormat,
    },
    /// Get or set CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a config value (vk_path, max_batch_size, batch_mode)
    Set { key: String, value: String },
    /// Show effective configuration
    Show,
}

/// `Some(verdict)` for verification commands, `None` for the rest.
fn run(cli: Cli) -> anyhow::Result<Option<bool>> {
    let vk = cli.vk.as_deref();
    match cli.command {
        Cmd::Verify { proof } => {
            let cfg = config::load()?;
            commands::verify::run(vk, &cfg, &proof).map(Some)
        }
        Cmd::VerifyBatch {
            publics,
            proofs,
            individual,
            max_batch,
        } => {
            let mut cfg = config::load()?;
            if let Some(max) = max_batch {
                cfg.verifier.max_batch_size = max;
            }
            commands::verify_batch::run(vk, &cfg, &publics, &proofs, individual).map(Some)
        }
        Cmd::InspectVk => {
            let cfg = config::load()?;
            commands::inspect::run(vk, &cfg).map(|_| None)
        }
        Cmd::ConvertVk { input, output, to } => {
            commands::convert::run(&input, &output, to).map(|_| None)
        }
        Cmd::Config { action } => match action {
            ConfigAction::Set { key, value } => commands::config::set(&key, &value).map(|_| None),
            ConfigAction::Show => commands::config::show().map(|_| None),
        },
    }
}

/// 0 valid (or nothing to verify), 1 invalid, 2 error.
fn exit_status(outcome: &anyhow::Result<Option<bool>>) -> u8 {
    match outcome {
        Ok(Some(true)) | Ok(None) => 0,
        Ok(Some(false)) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    logging::init(cli.verbose);

    let outcome = run(cli);
    if let Err(e) = &outcome {
        if output::is_json() {
            output::json_output(serde_json::json!({ "error": format!("{e:#}") }));
        } else {
            output::error_msg(&format!("error: {e:#}"));
        }
    }
    ExitCode::from(exit_status(&outcome))
}
