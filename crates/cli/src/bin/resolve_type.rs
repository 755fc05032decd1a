use clap::Parser;
use perf_cli::{SourceArgs, init_logging};

#[derive(Parser)]
#[command(author, version, about = "Map a simulator aircraft name onto a performance catalog key")]
struct Cli {
    /// Aircraft name as reported by the simulator
    name: String,

    #[command(flatten)]
    sources: SourceArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let engine = cli.sources.engine()?;

    match engine.resolve_with_trace(&cli.name) {
        Some((key, strategy)) => {
            println!("{key} ({strategy})");
            Ok(())
        }
        None => anyhow::bail!("no performance data for aircraft '{}'", cli.name),
    }
}
