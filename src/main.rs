use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lap_time_simulation::*;

const DEFAULT_TRACK: &str = "pist_uzunlugu: 5.4
viraj_sayisi: 16
duz_yol_yuzdesi: 0.6";

const DEFAULT_CAR: &str = "ortalama_hiz: 180
viraj_performansi: 0.8
ivmelenme: 0.7
hava_direnci: 0.3";

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "main")]
#[command(version, about = "Estimate lap times from track and car parameters", long_about = None)]
struct Cli {
    /// Track parameter file
    #[arg(short, long)]
    track: Option<PathBuf>,

    /// Car parameter file
    #[arg(short, long)]
    car: Option<PathBuf>,

    /// Second car parameter file, compared against the first
    #[arg(long)]
    compare: Option<PathBuf>,

    /// JSON file overriding physical and weather constants
    #[arg(long)]
    physics: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Logging verbosity level
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn read_parameters(path: Option<&PathBuf>, default: &str) -> Result<ParameterMap> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| SimulationError::Config(format!("{}: {}", path.display(), e)))?;
            parse_parameters(&text)
        }
        None => parse_parameters(default),
    }
}

fn read_constants(path: Option<&PathBuf>) -> Result<PhysicsConstants> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| SimulationError::Config(format!("{}: {}", path.display(), e)))?;
            PhysicsConstants::from_json(&text)
        }
        None => Ok(PhysicsConstants::default()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| SimulationError::Config(e.to_string()))
}

fn print_result(label: &str, result: &SimulationResult) {
    let breakdown = &result.breakdown;
    println!("--- {} ---", label);
    println!("Lap Time: {:.2} s", result.lap_time);
    for (name, value) in Breakdown::PRIMARY_FIELDS
        .iter()
        .zip(breakdown.primary_values())
    {
        println!("  {:<16} {:>10.4}", name, value);
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let track = read_parameters(cli.track.as_ref(), DEFAULT_TRACK)?;
    let car = read_parameters(cli.car.as_ref(), DEFAULT_CAR)?;
    let constants = read_constants(cli.physics.as_ref())?;

    match cli.compare.as_ref() {
        Some(path) => {
            let second_car = read_parameters(Some(path), DEFAULT_CAR)?;
            let comparison = compare(&track, &car, &second_car, &constants)?;
            info!(delta = comparison.lap_time_delta, "comparison complete");

            if cli.json {
                println!("{}", to_json(&comparison)?);
            } else {
                print_result("Car 1", &comparison.first);
                print_result("Car 2", &comparison.second);
                println!("\n--- Difference (Car 2 - Car 1) ---");
                println!("Lap Time: {:+.2} s", comparison.lap_time_delta);
                for delta in &comparison.metrics {
                    println!("  {:<16} {:>+10.4}", delta.metric, delta.difference);
                }
            }
        }
        None => {
            let simulator = Simulator::with_constants(&track, &car, constants)?;
            let result = simulator.run()?;

            if cli.json {
                println!("{}", to_json(&result)?);
            } else {
                print_result("Simulation", &result);
                println!("\n--- Segments ---");
                for (index, timing) in simulator.lap_trace()?.segments.iter().enumerate() {
                    let kind = if timing.segment.is_corner() { "corner" } else { "straight" };
                    println!(
                        "{} {:<8} {:>7.1} m  exit {:>6.2} m/s  {:>8.2} s",
                        index,
                        kind,
                        timing.segment.length(),
                        timing.exit_speed,
                        timing.time
                    );
                }
            }
        }
    }

    Ok(())
}
