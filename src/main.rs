use std::error::Error;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::Parser;

use et0_service::config::{self, Config, StationConfig};
use et0_service::et0;
use et0_service::ingest::wunderground;
use et0_service::logging::{self, LogLevel, Source};
use et0_service::model::{CalculationParameters, WeatherObservation};
use et0_service::report::Report;

mod cli;

use cli::{Cli, Command, ComputeArgs, FetchArgs};

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Fetch(args) => run_fetch(args, cli.verbose),
        Command::Compute(args) => run_compute(args, cli.verbose),
    }
}

fn init_logging(config: Option<&Config>, verbose: bool) {
    let defaults = config::LoggingConfig::default();
    let settings = config.map(|c| &c.logging).unwrap_or(&defaults);
    let level = if verbose { LogLevel::Debug } else { settings.level };
    logging::init_logger(level, settings.file.as_deref(), settings.console_timestamps);
}

fn print_report(report: &Report<'_>, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn run_compute(args: ComputeArgs, verbose: bool) -> Result<(), Box<dyn Error>> {
    init_logging(None, verbose);

    let text = std::fs::read_to_string(&args.input)?;
    let observation: WeatherObservation = serde_json::from_str(&text)?;
    let params = CalculationParameters::new(args.canopy);
    let label = args.input.display().to_string();

    let result = et0::compute(&observation, &params).inspect_err(|e| {
        logging::log_calculation_failure(&label, "compute", e);
    })?;

    print_report(
        &Report {
            station: None,
            date: None,
            canopy_reflection_coefficient: params.canopy_reflection_coefficient,
            result: &result,
        },
        args.json,
    )
}

fn run_fetch(args: FetchArgs, verbose: bool) -> Result<(), Box<dyn Error>> {
    let config = config::load_config(&args.config)?;
    init_logging(Some(&config), verbose);

    let station = config.find_station(&args.station).ok_or_else(|| {
        format!("station '{}' is not listed in {}", args.station, args.config.display())
    })?;
    let api_key = config.api_key().ok_or_else(|| {
        format!("no API key: set wunderground.api_key or {}", config::API_KEY_ENV)
    })?;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.wunderground.timeout_secs))
        .build()?;

    let start = args.date.unwrap_or_else(|| Local::now().date_naive());
    let days: Vec<NaiveDate> = start.iter_days().take(args.days as usize).collect();
    logging::debug(
        Source::System,
        Some(&station.pws),
        &format!("Computing {} day(s) starting {}", days.len(), start),
    );

    let mut successful = 0;
    for date in &days {
        if fetch_and_report(&client, &config, station, &api_key, *date, args.json) {
            successful += 1;
        }
    }

    let failed = days.len() - successful;
    if days.len() > 1 {
        logging::log_batch_summary(Source::System, days.len(), successful, failed);
    }
    if successful == 0 {
        return Err(format!("no ET0 values computed for station '{}'", station.pws).into());
    }
    Ok(())
}

/// One station-day. Failures are logged and reported as `false` so the
/// rest of the batch still runs.
fn fetch_and_report(
    client: &reqwest::blocking::Client,
    config: &Config,
    station: &StationConfig,
    api_key: &str,
    date: NaiveDate,
    json: bool,
) -> bool {
    let operation = format!("history {}", date);
    let observation = match wunderground::fetch_observation(
        client,
        &config.wunderground.base_url,
        api_key,
        &station.pws,
        date,
    ) {
        Ok(obs) => obs,
        Err(e) => {
            logging::log_ingest_failure(&station.pws, &operation, &e);
            return false;
        }
    };

    let params = station.parameters();
    let result = match et0::compute(&observation, &params) {
        Ok(result) => result,
        Err(e) => {
            logging::log_calculation_failure(&station.pws, &operation, &e);
            return false;
        }
    };

    let report = Report {
        station: Some(station.name.as_deref().unwrap_or(&station.pws)),
        date: Some(date),
        canopy_reflection_coefficient: params.canopy_reflection_coefficient,
        result: &result,
    };
    match print_report(&report, json) {
        Ok(()) => true,
        Err(e) => {
            logging::error(Source::System, Some(&station.pws), &format!("report failed: {}", e));
            false
        }
    }
}
