use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// FAO-56 reference evapotranspiration for personal weather stations.
#[derive(Parser)]
#[command(name = "et0_service", version, about = "FAO-56 Penman-Monteith ET0 calculator")]
pub struct Cli {
    /// Log debug messages.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch station history from Weather Underground and compute ET0.
    Fetch(FetchArgs),
    /// Compute ET0 from an observation JSON file.
    Compute(ComputeArgs),
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
pub struct FetchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "et0.toml")]
    pub config: PathBuf,

    /// PWS id; must be listed in the config.
    #[arg(short, long)]
    pub station: String,

    /// First day (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Number of consecutive days starting at `date`.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub days: u32,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Observation file (JSON `WeatherObservation`).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Canopy reflection coefficient (albedo).
    #[arg(long, default_value_t = et0_service::model::GRASS_REFERENCE_ALBEDO)]
    pub canopy: f64,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
