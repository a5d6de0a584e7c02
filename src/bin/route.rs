use std::fs;
use std::path::PathBuf;

use clap::Parser;
use flight_route_calculator::app::{BufferedSink, Calculator, Outcome, StaticSelection};
use flight_route_calculator::catalog::{airports_or_builtin, categories_or_builtin};
use flight_route_calculator::export::json::{ReportMetadata, write_report};
use flight_route_calculator::export::{ensure_parent_dir, html, text};
use flight_route_calculator::logging;
use flight_route_calculator::render::bitmap::BitmapSurface;
use flight_route_calculator::render::{MapImage, NullSurface, RouteRenderer, RouteStyle};
use log::info;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Great-circle distance, aircraft choice, and CO2 estimate for a route"
)]
struct Cli {
    /// Departure airport IATA code (case-insensitive)
    #[arg(long, default_value = "")]
    from: String,

    /// Arrival airport IATA code (case-insensitive)
    #[arg(long, default_value = "")]
    to: String,

    /// Airport catalog (YAML file, TOML file, or directory of TOML files)
    #[arg(long)]
    airports: Option<PathBuf>,

    /// Aircraft category catalog (same layouts as --airports)
    #[arg(long)]
    aircraft: Option<PathBuf>,

    /// Write the route map as PNG
    #[arg(long)]
    map: Option<PathBuf>,

    /// Equirectangular world map drawn behind the route
    #[arg(long, requires = "map")]
    background: Option<PathBuf>,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 640)]
    height: u32,

    /// Write a JSON report
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the results panel as an HTML fragment
    #[arg(long)]
    html: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let catalog = airports_or_builtin(cli.airports.as_deref())?;
    let categories = categories_or_builtin(cli.aircraft.as_deref())?;
    let map = cli.background.as_deref().map(MapImage::open).transpose()?;
    let calculator = Calculator::new(
        &catalog,
        &categories,
        RouteRenderer::new(RouteStyle::default(), map),
    );

    let selection = StaticSelection::new(cli.from.as_str(), cli.to.as_str());
    let mut sink = BufferedSink::default();
    let outcome = match &cli.map {
        Some(path) => {
            if cli.width == 0 || cli.height == 0 {
                return Err(anyhow::anyhow!("--width and --height must be positive"));
            }
            ensure_parent_dir(path)?;
            let mut surface = BitmapSurface::new(path, cli.width, cli.height);
            let outcome = calculator.calculate(&selection, &mut surface, &mut sink)?;
            surface.present()?;
            info!("map written to {}", path.display());
            outcome
        }
        None => {
            let mut surface = NullSurface {
                width: f64::from(cli.width),
                height: f64::from(cli.height),
            };
            calculator.calculate(&selection, &mut surface, &mut sink)?
        }
    };

    let analysis = match outcome {
        Outcome::Calculated(analysis) => analysis,
        Outcome::Rejected(err) => {
            let message = sink.error.unwrap_or_else(|| err.to_string());
            if let Some(path) = &cli.html {
                ensure_parent_dir(path)?;
                fs::write(path, html::error_fragment(&message))?;
            }
            return Err(anyhow::anyhow!(message));
        }
    };

    let summary = analysis.summary();
    print!("{}", text::results_block(&summary));

    if let Some(path) = &cli.json {
        let generated = chrono::Utc::now().to_rfc3339();
        let meta = ReportMetadata {
            generated_utc: &generated,
            tool_version: flight_route_calculator::version(),
        };
        write_report(path, &meta, &summary)?;
        info!("report written to {}", path.display());
    }

    if let Some(path) = &cli.html {
        ensure_parent_dir(path)?;
        fs::write(path, sink.results_html.unwrap_or_default())?;
        info!("results panel written to {}", path.display());
    }

    Ok(())
}
