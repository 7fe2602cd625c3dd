//! QC-Compat: Quantum-Chain handshake compatibility checker
//!
//! Loads the local node configuration and a peer descriptor, then runs the
//! same admission gate the node runs during a handshake.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qc_node_info::{
    CompatibilityError, DescriptorCodec, HandshakeGate, IdentityKey, JsonDescriptorCodec,
    NodeInfoService, TomlConfigProvider,
};

/// QC-Compat: check a peer descriptor against the local node
#[derive(Parser, Debug)]
#[command(name = "qc-compat")]
#[command(about = "Check whether a peer descriptor passes the Quantum-Chain handshake")]
struct Args {
    /// Local node config (TOML, `[node]` and `[identity]` tables)
    #[arg(short, long)]
    config: PathBuf,

    /// Identity key as hex; overrides `[identity] key` from the config
    #[arg(short = 'k', long)]
    identity_key: Option<String>,

    /// Remote peer descriptor (JSON)
    #[arg(short, long)]
    remote: PathBuf,

    /// Also check the reverse direction (peer as the local side)
    #[arg(long)]
    mutual: bool,
}

/// Result of a single check.
#[derive(Debug)]
enum Outcome {
    Compatible,
    Rejected(CompatibilityError),
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match run(&args)? {
        Outcome::Compatible => {
            println!("compatible");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Rejected(e) => {
            println!("rejected ({}): {}", e.reject_reason(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(args: &Args) -> Result<Outcome> {
    let provider = TomlConfigProvider::load(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;

    let identity_key = match (&args.identity_key, provider.identity_key()) {
        (Some(hex), _) => IdentityKey::from_hex(hex).context("parsing --identity-key")?,
        (None, Some(key)) => key.clone(),
        (None, None) => bail!("no identity key: pass --identity-key or set [identity] key"),
    };

    let service = NodeInfoService::from_config(&provider, identity_key);

    let bytes = fs::read(&args.remote)
        .with_context(|| format!("reading remote descriptor {}", args.remote.display()))?;
    let remote = JsonDescriptorCodec::new()
        .decode(&bytes)
        .context("decoding remote descriptor")?;

    info!(
        local = %service.local_descriptor(),
        remote = %remote,
        mutual = args.mutual,
        "Checking peer descriptor"
    );

    let result = if args.mutual {
        service.check_mutual(&remote)
    } else {
        service.check_peer(&remote)
    };

    match result {
        Ok(()) => Ok(Outcome::Compatible),
        Err(e) if e.is_local_fault() => bail!("local configuration error: {e}"),
        Err(e) => Ok(Outcome::Rejected(e)),
    }
}
