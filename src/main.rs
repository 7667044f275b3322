//! Clockface command line.
//!
//! Renders a single frame as JSON, runs a clock against wall-clock time or
//! prints the JSON schema of settings files.

use std::{error::Error, path::PathBuf, process};

use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use clockface::{
    ClockError,
    clock::Clock,
    config::{ClockFile, ConfigPaths},
    skin::ClockSkin,
    ticker, tracing_config,
};
use tracing::{info, instrument, warn};

#[derive(Parser)]
#[command(name = "clockface")]
#[command(about = "Skinnable analog clock renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one rendered frame as JSON
    Render {
        /// Settings file; defaults to the user's clock.toml if present
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 250.0)]
        width: f64,
        #[arg(long, default_value_t = 250.0)]
        height: f64,
        /// Time to show, e.g. 2026-10-17T10:08:30; defaults to now
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
    /// Drive the clock from wall-clock time, printing the time text as it changes
    Run {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Stop after this many frames
        #[arg(long)]
        frames: Option<usize>,
    },
    /// Print the JSON schema of settings files
    Schema,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_config::init()?;
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            config,
            width,
            height,
            at,
        } => render(config, width, height, at),
        Commands::Run { config, frames } => run(config, frames).await,
        Commands::Schema => Ok(serde_json::to_string_pretty(&ClockFile::schema())?),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn render(
    config: Option<PathBuf>,
    width: f64,
    height: f64,
    at: Option<NaiveDateTime>,
) -> Result<String, Box<dyn Error>> {
    let mut clock = build_clock(config)?;
    clock.set_time(at.unwrap_or_else(|| Local::now().naive_local()));

    let mut skin = ClockSkin::new(&mut clock);
    clock.resize_to(width, height);
    skin.handle(clock.take_updates(), &clock);

    Ok(serde_json::to_string_pretty(skin.scene())?)
}

#[instrument]
async fn run(config: Option<PathBuf>, frames: Option<usize>) -> Result<String, Box<dyn Error>> {
    let mut clock = build_clock(config)?;
    clock.set_running(true);

    let mut skin = ClockSkin::new(&mut clock);
    clock.resize_to(skin.size(), skin.size());
    skin.handle(clock.take_updates(), &clock);

    let period = ticker::period_for(&clock);
    info!(?period, skin = %clock.skin_type(), "clock running");

    let mut last_text = String::new();
    let mut seen = 0;
    let produced = ticker::drive(
        &mut clock,
        &mut skin,
        ticker::ticks(period),
        |clock, scene, fired| {
            seen += 1;

            if scene.text.content != last_text {
                last_text.clone_from(&scene.text.content);
                println!("{last_text}");
            }
            for event in fired {
                info!(text = %event.alarm.text, at = %event.fired_at, "alarm");
            }

            if frames.is_some_and(|limit| seen >= limit) {
                clock.set_running(false);
            }
        },
    )
    .await;

    info!(frames = produced, "clock stopped");
    Ok(String::new())
}

fn build_clock(config: Option<PathBuf>) -> Result<Clock, ClockError> {
    Ok(load_file(config)?.into_builder()?.build())
}

fn load_file(config: Option<PathBuf>) -> Result<ClockFile, ClockError> {
    if let Some(path) = config {
        return ClockFile::load(&path);
    }

    match ConfigPaths::main_config() {
        Ok(path) if path.exists() => ClockFile::load(&path),
        Ok(_) => Ok(ClockFile::default()),
        Err(e) => {
            warn!(error = %e, "cannot locate settings directory, using defaults");
            Ok(ClockFile::default())
        }
    }
}
