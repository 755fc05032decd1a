use std::path::Path;

use clap::Parser;
use flight_performance_calculator::export::{self, PerformanceReport};
use perf_cli::{SourceArgs, init_logging, resolve_aircraft, yes_no};

#[derive(Parser)]
#[command(author, version, about = "Takeoff speeds, thrust, and runway check")]
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

    /// Intersection to depart from (defaults to the full length)
    #[arg(long)]
    intersection: Option<String>,

    /// Flap setting
    #[arg(long)]
    flaps: u8,

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
        .compute_takeoff_performance(
            &aircraft,
            &cli.airport,
            &cli.runway,
            cli.intersection.as_deref(),
            cli.flaps,
        )
        .ok_or_else(|| {
            anyhow::anyhow!(
                "cannot compute takeoff for {} at {} runway {}{} flaps {}",
                aircraft,
                cli.airport,
                cli.runway,
                cli.intersection
                    .as_deref()
                    .map(|i| format!(" via {i}"))
                    .unwrap_or_default(),
                cli.flaps
            )
        })?;

    if cli.json {
        let writer = export::writer_for_path(Path::new("-"))?;
        export::write_json(writer, &PerformanceReport::Takeoff(&result))?;
        return Ok(());
    }

    println!("=== Takeoff {} {} {} ===", result.aircraft, result.airport, result.runway);
    if let Some(intersection) = &result.intersection {
        println!("Intersection   : {intersection}");
    }
    println!("Flaps          : {}", result.flap_setting);
    println!("Thrust         : {}%", result.thrust_percent);
    println!(
        "Speeds         : V1 {} kt, VR {} kt, V2 {} kt",
        result.v1_kt, result.vr_kt, result.v2_kt
    );
    println!(
        "Takeoff run    : {} ft required, {} ft available ({} ft unfactored)",
        result.takeoff_run_ft, result.tora_ft, result.takeoff_distance_ft
    );
    println!(
        "Accel-stop     : {} ft required, {} ft available",
        result.accelerate_stop_distance_ft, result.asda_ft
    );
    println!(
        "Feasible       : liftoff {}, accelerate-stop {}",
        yes_no(result.can_liftoff),
        yes_no(result.can_accel_stop)
    );
    if !result.climb_capable {
        println!("Warning        : no thrust setting reaches the climb-out speed");
    }

    Ok(())
}
