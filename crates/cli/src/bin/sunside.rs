use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use sunside::GeoPoint;
use sunside::config::load_engine_config;
use sunside::core::geo::path_length_km;
use sunside::export::{json, track};
use sunside::seat::{
    AirportDirectory, CatalogDirectory, EngineSettings, FlightRequest, SunEvent, SunEventKind,
    SunPreference, recommend_with, trace,
};

/// Recommend which side of the aircraft gets the best view of the sun.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Window-seat sun recommendation (left or right)"
)]
struct Cli {
    /// Origin airport code, IATA or ICAO (case-insensitive)
    #[arg(long, required_unless_present_all = ["from_lat", "from_lon"])]
    from: Option<String>,

    /// Origin latitude in degrees (instead of --from)
    #[arg(long, requires = "from_lon", allow_negative_numbers = true)]
    from_lat: Option<f64>,

    /// Origin longitude in degrees (instead of --from)
    #[arg(long, requires = "from_lat", allow_negative_numbers = true)]
    from_lon: Option<f64>,

    /// Destination airport code, IATA or ICAO (case-insensitive)
    #[arg(long, required_unless_present_all = ["to_lat", "to_lon"])]
    to: Option<String>,

    /// Destination latitude in degrees (instead of --to)
    #[arg(long, requires = "to_lon", allow_negative_numbers = true)]
    to_lat: Option<f64>,

    /// Destination longitude in degrees (instead of --to)
    #[arg(long, requires = "to_lat", allow_negative_numbers = true)]
    to_lon: Option<f64>,

    /// Departure time, RFC 3339 (e.g. 2024-06-21T10:00:00Z)
    #[arg(long)]
    depart: String,

    /// Scheduled flight duration in minutes
    #[arg(long, allow_negative_numbers = true)]
    duration: i64,

    /// Prefer the side facing a sunrise seen en route
    #[arg(long, default_value_t = false)]
    sunrise: bool,

    /// Prefer the side facing a sunset seen en route
    #[arg(long, default_value_t = false)]
    sunset: bool,

    /// Which event wins when both are wanted and both occur (default: sunset)
    #[arg(long, value_enum)]
    priority: Option<PriorityArg>,

    /// Airport catalog (YAML list, TOML record, or directory of TOML records)
    #[arg(long, default_value = "data/airports.yaml")]
    airports: PathBuf,

    /// Engine settings file (TOML or YAML)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the recommendation as JSON (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the per-sample track as CSV (use '-' for stdout)
    #[arg(long)]
    track: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum PriorityArg {
    Sunrise,
    Sunset,
}

struct Endpoint {
    label: String,
    location: GeoPoint,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let directory = if cli.from.is_some() || cli.to.is_some() {
        let catalog = CatalogDirectory::load(&cli.airports).with_context(|| {
            format!("failed to load airport catalog {}", cli.airports.display())
        })?;
        log::info!("loaded {} airports from {}", catalog.len(), cli.airports.display());
        Some(catalog)
    } else {
        None
    };

    let origin = endpoint(directory.as_ref(), cli.from.as_deref(), cli.from_lat, cli.from_lon)?;
    let destination = endpoint(directory.as_ref(), cli.to.as_deref(), cli.to_lat, cli.to_lon)?;

    let settings = match &cli.settings {
        Some(path) => {
            let config = load_engine_config(path)
                .with_context(|| format!("failed to load settings {}", path.display()))?;
            EngineSettings::try_from(&config)?
        }
        None => EngineSettings::default(),
    };

    let departure: DateTime<Utc> = DateTime::parse_from_rfc3339(&cli.depart)
        .with_context(|| format!("invalid departure time '{}'", cli.depart))?
        .with_timezone(&Utc);

    let request = FlightRequest {
        source: origin.location,
        destination: destination.location,
        departure_time_utc: departure,
        duration_minutes: cli.duration,
        sun_preference: SunPreference {
            wants_sunrise: cli.sunrise,
            wants_sunset: cli.sunset,
            priority: cli.priority.map(|p| match p {
                PriorityArg::Sunrise => SunEventKind::Sunrise,
                PriorityArg::Sunset => SunEventKind::Sunset,
            }),
        },
    };

    let recommendation = recommend_with(&request, &settings)?;
    let (h, m) = (cli.duration / 60, cli.duration % 60);

    println!("=== Seat Recommendation ===");
    println!(
        "Route     : {} -> {} ({:.0} km)",
        origin.label,
        destination.label,
        path_length_km(&origin.location, &destination.location)
    );
    println!("Departure : {}", departure.to_rfc3339());
    println!("Duration  : {h}h {m:02}m");
    println!("Side      : {}", recommendation.side);
    println!("Reason    : {}", recommendation.reason);
    println!(
        "Votes     : left {} / right {}",
        recommendation.left_votes, recommendation.right_votes
    );
    println!("Sunrise   : {}", describe_event(recommendation.sunrise.as_ref()));
    println!("Sunset    : {}", describe_event(recommendation.sunset.as_ref()));

    if let Some(path) = &cli.json {
        json::write_pretty(path, &recommendation)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if let Some(path) = &cli.track {
        let rows: Vec<track::Row> = trace(&request, &settings)?
            .into_iter()
            .map(|entry| track::Row {
                elapsed_minutes: entry.sample.elapsed_minutes,
                time_utc: entry.sample.time_utc.to_rfc3339(),
                lat: entry.sample.coordinate.lat,
                lon: entry.sample.coordinate.lon,
                distance_km: entry.sample.distance_km,
                subsolar_lat: entry.vote.subsolar.lat,
                subsolar_lon: entry.vote.subsolar.lon,
                bearing_to_destination: entry.vote.bearing_to_destination,
                bearing_to_sun: entry.vote.bearing_to_sun,
                angle_difference: entry.vote.angle_difference,
                side: entry.vote.side.as_str(),
            })
            .collect();
        track::write_rows(path, &rows)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {} track rows to {}", rows.len(), path.display());
    }

    Ok(())
}

fn endpoint(
    directory: Option<&CatalogDirectory>,
    code: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<Endpoint> {
    match (code, directory, lat, lon) {
        (Some(code), Some(directory), _, _) => {
            let airport = directory.resolve(code)?;
            Ok(Endpoint {
                label: airport.iata,
                location: airport.location,
            })
        }
        (None, _, Some(lat), Some(lon)) => {
            let location = GeoPoint::new(lat, lon)?;
            Ok(Endpoint {
                label: location.to_string(),
                location,
            })
        }
        _ => Err(anyhow!("each endpoint needs an airport code or a latitude/longitude pair")),
    }
}

fn describe_event(event: Option<&SunEvent>) -> String {
    match event {
        Some(event) => format!(
            "{} UTC over {}",
            event.time_utc.format("%Y-%m-%d %H:%M"),
            event.location
        ),
        None => "not seen".to_string(),
    }
}
