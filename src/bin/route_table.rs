use std::path::PathBuf;

use clap::Parser;
use flight_route_calculator::catalog::{airports_or_builtin, categories_or_builtin};
use flight_route_calculator::export::table::{RouteRow, write_route_table};
use flight_route_calculator::export::writer_for_path;
use flight_route_calculator::logging;
use flight_route_calculator::route::analyze_route;
use log::info;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "CSV table of distance, aircraft, and emissions for every airport pair"
)]
struct Cli {
    /// Airport catalog (YAML file, TOML file, or directory of TOML files)
    #[arg(long)]
    airports: Option<PathBuf>,

    /// Aircraft category catalog
    #[arg(long)]
    aircraft: Option<PathBuf>,

    /// Output CSV path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let catalog = airports_or_builtin(cli.airports.as_deref())?;
    let categories = categories_or_builtin(cli.aircraft.as_deref())?;

    let mut rows = Vec::with_capacity(catalog.len() * catalog.len().saturating_sub(1));
    for departure in catalog.iter() {
        for arrival in catalog.iter().filter(|a| a.code != departure.code) {
            let analysis = analyze_route(&catalog, &categories, &departure.code, &arrival.code)?;
            let summary = analysis.summary();
            rows.push(RouteRow {
                departure: summary.departure.code,
                arrival: summary.arrival.code,
                distance_km: summary.distance_km,
                aircraft: summary.aircraft.map(|a| a.name),
                fuel_burn_kg: summary.fuel_burn_kg,
                co2_emissions_kg: summary.co2_emissions_kg,
                co2_per_passenger_kg: summary.co2_per_passenger_kg,
            });
        }
    }

    let writer = writer_for_path(&cli.output)?;
    write_route_table(writer, &rows)?;
    info!("{} routes written to {}", rows.len(), cli.output.display());
    Ok(())
}
