use std::path::Path;

use clap::Parser;
use flight_performance_calculator::export::{self, PerformanceReport};
use perf_cli::{ReverserArg, SourceArgs, init_logging, resolve_aircraft, yes_no};

#[derive(Parser)]
#[command(author, version, about = "Landing speeds, approach thrust, and runway check")]
struct Cli {
    /// Aircraft type as named in the simulator (resolved to a catalog key)
    #[arg(long)]
    aircraft: String,

    /// Airport code
    #[arg(long)]
    airport: String,

    /// Runway name
    #[arg(long)]
    runway: String,

    /// Flap setting
    #[arg(long)]
    flaps: u8,

    /// Reverse thrust during the landing roll
    #[arg(long, value_enum, default_value_t = ReverserArg::None)]
    reversers: ReverserArg,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(flatten)]
    sources: SourceArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let engine = cli.sources.engine()?;
    let aircraft = resolve_aircraft(&engine, &cli.aircraft)?;

    let result = engine
        .compute_landing_performance(
            &aircraft,
            &cli.airport,
            &cli.runway,
            cli.flaps,
            cli.reversers.into(),
        )
        .ok_or_else(|| {
            anyhow::anyhow!(
                "cannot compute landing for {} at {} runway {} flaps {}",
                aircraft,
                cli.airport,
                cli.runway,
                cli.flaps
            )
        })?;

    if cli.json {
        let writer = export::writer_for_path(Path::new("-"))?;
        export::write_json(writer, &PerformanceReport::Landing(&result))?;
        return Ok(());
    }

    println!("=== Landing {} {} {} ===", result.aircraft, result.airport, result.runway);
    println!(
        "Configuration  : flaps {}, reversers {}",
        result.flap_setting,
        result.decel_mode.as_str()
    );
    println!("Speeds         : Vref {} kt, Vapp {} kt", result.vref_kt, result.vapp_kt);
    println!("Approach thrust: {}%", result.thrust_percent);
    println!(
        "Distance       : {} ft actual, {} ft required, {} ft available",
        result.actual_landing_distance_ft, result.landing_distance_required_ft, result.lda_ft
    );
    println!(
        "Margin         : {} ft (can stop: {})",
        result.margin_ft,
        yes_no(result.can_stop)
    );

    Ok(())
}
