//! gistools: CLI for geodetic distance, destination and GeoJSON validation.

use anyhow::Context;
use clap::{Parser, Subcommand};
use gistools_geo::{Coordinate, GeoConfig, Geometry, LengthUnit};
use owo_colors::{OwoColorize, Stream};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gistools")]
#[command(about = "Spherical geodesy and GeoJSON geometry toolkit")]
#[command(version)]
struct Cli {
    /// Path to a TOML file overriding earth_radius_m / equality_epsilon
    #[arg(long, global = true, env = "GISTOOLS_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Great-circle distance between two positions
    Distance {
        /// Start position as "lon,lat[,alt]"
        #[arg(allow_hyphen_values = true)]
        from: String,
        /// End position as "lon,lat[,alt]"
        #[arg(allow_hyphen_values = true)]
        to: String,
        /// Output unit
        #[arg(long, default_value = "meters")]
        unit: String,
    },
    /// Position reached from a start point along a bearing
    Destination {
        /// Start position as "lon,lat[,alt]"
        #[arg(allow_hyphen_values = true)]
        from: String,
        /// Distance to travel
        #[arg(allow_hyphen_values = true)]
        distance: f64,
        /// Initial bearing in degrees clockwise from north
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
        /// Unit of the distance argument
        #[arg(long, default_value = "meters")]
        unit: String,
        /// Wrap the resulting longitude into [-180, 180]
        #[arg(long)]
        normalize: bool,
    },
    /// Wrap a position's longitude into [-180, 180]
    Normalize {
        /// Position as "lon,lat[,alt]"
        #[arg(allow_hyphen_values = true)]
        position: String,
    },
    /// Convert a length between units
    Convert {
        #[arg(allow_hyphen_values = true)]
        length: f64,
        /// Source unit (e.g. miles, km, ft)
        from: String,
        /// Target unit
        to: String,
    },
    /// Decode and validate a GeoJSON geometry
    Validate {
        /// GeoJSON file, or "-" for stdin
        #[arg(default_value = "-")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }
    init_logging(cli.verbose)?;

    let config = GeoConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Distance { from, to, unit } => {
            let from = parse_position(&from)?;
            let to = parse_position(&to)?;
            let unit: LengthUnit = unit.parse()?;

            let meters = config.distance(&from, &to);
            let distance = config.convert_length(meters, LengthUnit::Meters, unit);

            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "distance": distance, "unit": unit.as_str() })
                );
            } else {
                let value = format!("{:.3}", distance);
                println!(
                    "{} {}",
                    value.if_supports_color(Stream::Stdout, |v| v.bold()),
                    unit
                );
            }
        }

        Commands::Destination {
            from,
            distance,
            bearing,
            unit,
            normalize,
        } => {
            let from = parse_position(&from)?;
            let unit: LengthUnit = unit.parse()?;
            let meters = config.convert_length(distance, unit, LengthUnit::Meters);

            let mut end = config.destination(&from, meters, bearing);
            if normalize {
                end = end.normalized();
            }
            print_coordinate(&end, cli.json);
        }

        Commands::Normalize { position } => {
            let coordinate = parse_position(&position)?;
            print_coordinate(&coordinate.normalized(), cli.json);
        }

        Commands::Convert { length, from, to } => {
            let converted = gistools_geo::convert(length, &from, &to)?;
            if cli.json {
                println!("{}", serde_json::json!({ "length": converted, "unit": to }));
            } else {
                println!("{} {}", converted, to);
            }
        }

        Commands::Validate { path } => {
            let text = read_input(&path)?;
            let geometry = Geometry::from_geojson_str(&text)
                .with_context(|| format!("Could not decode {}", path.display()))?;

            let result = geometry.validate();
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "type": geometry.geojson_type().as_str(),
                        "coordinate_count": geometry.coordinate_count(),
                        "valid": result.is_ok(),
                        "error": result.as_ref().err().map(|e| e.to_string()),
                    })
                );
            } else {
                match &result {
                    Ok(()) => println!(
                        "{} {} with {} coordinates",
                        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
                        geometry.geojson_type(),
                        geometry.coordinate_count()
                    ),
                    Err(e) => eprintln!(
                        "{} {}",
                        "✗".if_supports_color(Stream::Stderr, |t| t.red()),
                        e
                    ),
                }
            }

            if result.is_err() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

/// Parses "lon,lat[,alt[,m]]".
fn parse_position(text: &str) -> anyhow::Result<Coordinate> {
    let components = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid number '{}' in position '{}'", part.trim(), text))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;

    Ok(Coordinate::from_position(&components)?)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn print_coordinate(coordinate: &Coordinate, json: bool) {
    if json {
        println!("{}", coordinate.to_json());
    } else {
        println!("{}", coordinate);
    }
}
