//! Shared plumbing for the generator binaries.

use std::path::PathBuf;

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Switches every generator binary accepts. None of them change what is generated.
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory the fixed `assets/...` paths are resolved against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Print the effective generator parameters as JSON before running.
    #[arg(long)]
    pub dump_params: bool,
}

/// Install a stderr fmt subscriber honoring `RUST_LOG`, defaulting to `warn`.
///
/// Stdout stays reserved for the one-line status message each generator prints.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print `params` to stdout as pretty JSON. Backs the `--dump-params` flag.
pub fn dump_params<T: serde::Serialize>(params: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(params).context("serialize generator parameters")?;
    println!("{json}");
    Ok(())
}
