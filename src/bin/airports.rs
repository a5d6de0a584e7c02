use std::path::PathBuf;

use clap::Parser;
use flight_route_calculator::catalog::airports_or_builtin;
use flight_route_calculator::logging;

#[derive(Parser)]
#[command(author, version, about = "List the airports known to the calculator")]
struct Cli {
    /// Airport catalog (YAML file, TOML file, or directory of TOML files)
    #[arg(long)]
    airports: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(false);

    let catalog = airports_or_builtin(cli.airports.as_deref())?;
    for airport in catalog.iter() {
        println!(
            "{:<4} {:>9.4} {:>10.4}",
            airport.code, airport.coordinate.latitude, airport.coordinate.longitude
        );
    }
    Ok(())
}
