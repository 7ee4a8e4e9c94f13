//! Shared command-line surface and logging setup for the demo binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tq_core::{CoreResult, RunConfig};
use tq_sweep::SweepGrid;

#[derive(Parser, Debug)]
pub struct Args {
    /// Root seed.  Omit for a fresh seed per parameter point.  Overrides
    /// the seed of a `--grid` file.
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON `SweepGrid` to run instead of the built-in lab grid.
    #[arg(long)]
    pub grid: Option<PathBuf>,

    /// Directory that receives every output file.
    #[arg(long, default_value = "output")]
    pub out_dir: PathBuf,

    /// Skip the per-event text log (it grows to millions of lines for long
    /// horizons).
    #[arg(long)]
    pub no_event_log: bool,
}

/// Logs go to stderr with `RUST_LOG`-style filtering, `info` by default.
/// Stdout carries only the result lines.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// The grid named by `--grid`, or `builtin(seed)` when none is given.
pub fn load_grid(args: &Args, builtin: fn(Option<u64>) -> CoreResult<SweepGrid>) -> Result<SweepGrid> {
    let Some(path) = &args.grid else {
        return Ok(builtin(args.seed)?);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading grid file {}", path.display()))?;
    let mut grid: SweepGrid = serde_json::from_str(&text)
        .with_context(|| format!("parsing grid file {}", path.display()))?;
    if let Some(seed) = args.seed {
        grid.run = RunConfig::new(grid.run.repetitions(), Some(seed))?;
    }
    Ok(grid)
}
