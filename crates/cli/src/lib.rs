//! Shared plumbing for the performance command-line tools.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use flight_performance_calculator::{DecelMode, PerformanceEngine};
use tracing_subscriber::EnvFilter;

/// Catalog and calibration locations shared by every binary.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Catalog directory holding aircraft, airports, and aliases
    #[arg(long, default_value = "data/catalog")]
    pub catalog: PathBuf,

    /// Calibration constants (TOML); built-in defaults when omitted
    #[arg(long)]
    pub calibration: Option<PathBuf>,
}

impl SourceArgs {
    pub fn engine(&self) -> anyhow::Result<PerformanceEngine> {
        Ok(PerformanceEngine::load(
            &self.catalog,
            self.calibration.as_deref(),
        )?)
    }
}

/// Deceleration mode accepted on the command line.
#[derive(Copy, Clone, ValueEnum, Debug)]
pub enum ReverserArg {
    None,
    Idle,
    Max,
}

impl From<ReverserArg> for DecelMode {
    fn from(value: ReverserArg) -> Self {
        match value {
            ReverserArg::None => DecelMode::None,
            ReverserArg::Idle => DecelMode::Idle,
            ReverserArg::Max => DecelMode::Max,
        }
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to warnings.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve a simulator aircraft name, failing with a readable message when no
/// performance data exists.
pub fn resolve_aircraft(engine: &PerformanceEngine, name: &str) -> anyhow::Result<String> {
    engine
        .resolve_performance_type(name)
        .ok_or_else(|| anyhow::anyhow!("no performance data for aircraft '{}'", name))
}

/// Render a yes/no feasibility flag.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "NO" }
}
