/// Weather Underground history API client
///
/// Retrieves one day of personal weather station (PWS) history and turns it
/// into a `WeatherObservation` for the ET0 calculator.
///
/// Endpoint shape:
///   {base}/api/{key}/conditions/history_{YYYYMMDD}/q/pws:{station}.json
///
/// The API reports every number as a JSON string ("86", "47.00000000"),
/// so each field is read leniently and converted here rather than
/// leaving dynamic lookups to callers.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::model::{IngestError, WeatherObservation};

pub const WUNDERGROUND_BASE_URL: &str = "http://api.wunderground.com";

/// Sentinels the API uses for "sensor did not report".
const MISSING_SENTINELS: [f64; 2] = [-999.0, -9999.0];

// ============================================================================
// API Response Structures
// ============================================================================

/// A numeric field that may arrive either as a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Number(f64),
    Text(String),
}

impl NumberField {
    /// `Ok(None)` for empty strings and sentinel values.
    fn value(&self, field: &str) -> Result<Option<f64>, IngestError> {
        let value = match self {
            NumberField::Number(n) => *n,
            NumberField::Text(s) if s.trim().is_empty() => return Ok(None),
            NumberField::Text(s) => s.trim().parse::<f64>().map_err(|e| {
                IngestError::ParseError(format!("{}: {:?} is not a number ({})", field, s, e))
            })?,
        };
        if MISSING_SENTINELS.contains(&value) {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub current_observation: Option<CurrentObservation>,
    pub history: Option<History>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentObservation {
    pub display_location: Option<DisplayLocation>,
}

/// Station location; elevation is in meters.
#[derive(Debug, Deserialize)]
pub struct DisplayLocation {
    pub elevation: Option<NumberField>,
    pub latitude: Option<NumberField>,
    pub longitude: Option<NumberField>,
}

#[derive(Debug, Deserialize)]
pub struct History {
    #[serde(default)]
    pub dailysummary: Vec<DailySummary>,
    #[serde(default)]
    pub observations: Vec<HistoryObservation>,
}

/// Daily aggregates in imperial units (suffix `i`).
#[derive(Debug, Deserialize)]
pub struct DailySummary {
    pub maxtempi: Option<NumberField>,
    pub mintempi: Option<NumberField>,
    pub meanwindspdi: Option<NumberField>,
    pub maxhumidity: Option<NumberField>,
    pub minhumidity: Option<NumberField>,
}

/// One intraday sample; only solar radiation (W/m²) is used.
#[derive(Debug, Deserialize)]
pub struct HistoryObservation {
    pub solarradiation: Option<NumberField>,
}

// ============================================================================
// URL construction + fetch
// ============================================================================

/// Builds the history URL for `station` on `date`.
pub fn build_history_url(base_url: &str, api_key: &str, station: &str, date: NaiveDate) -> String {
    format!(
        "{}/api/{}/conditions/history_{}/q/pws:{}.json",
        base_url.trim_end_matches('/'),
        api_key,
        date.format("%Y%m%d"),
        station
    )
}

/// Fetch and parse one day of history for a PWS.
///
/// # Returns
/// A fully-populated observation, or the reason it could not be built.
/// No retries: a failure is reported to the caller immediately.
pub fn fetch_observation(
    client: &reqwest::blocking::Client,
    base_url: &str,
    api_key: &str,
    station: &str,
    date: NaiveDate,
) -> Result<WeatherObservation, IngestError> {
    let url = build_history_url(base_url, api_key, station, date);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()?;

    if !response.status().is_success() {
        return Err(IngestError::HttpError(response.status().as_u16()));
    }

    let body = response.text()?;
    parse_history(&body, date)
}

// ============================================================================
// Parsing
// ============================================================================

fn required(field: &str, raw: Option<&NumberField>) -> Result<f64, IngestError> {
    raw.ok_or_else(|| IngestError::MissingField(field.to_string()))?
        .value(field)?
        .ok_or_else(|| IngestError::MissingField(field.to_string()))
}

/// Parse a history response body into an observation for `date`.
pub fn parse_history(json: &str, date: NaiveDate) -> Result<WeatherObservation, IngestError> {
    let response: HistoryResponse = serde_json::from_str(json)?;

    let history = response
        .history
        .ok_or_else(|| IngestError::MissingField("history".to_string()))?;
    let summary = history
        .dailysummary
        .first()
        .ok_or_else(|| IngestError::NoDataAvailable(format!("no daily summary for {}", date)))?;
    let location = response
        .current_observation
        .and_then(|c| c.display_location)
        .ok_or_else(|| IngestError::MissingField("current_observation.display_location".to_string()))?;

    let mut solar_radiation_readings_w = Vec::with_capacity(history.observations.len());
    for obs in &history.observations {
        if let Some(raw) = &obs.solarradiation {
            if let Some(value) = raw.value("observations[].solarradiation")? {
                solar_radiation_readings_w.push(value);
            }
        }
    }
    if solar_radiation_readings_w.is_empty() {
        return Err(IngestError::NoDataAvailable(format!(
            "no solar radiation samples for {}",
            date
        )));
    }

    Ok(WeatherObservation {
        max_temp_f: required("dailysummary.maxtempi", summary.maxtempi.as_ref())?,
        min_temp_f: required("dailysummary.mintempi", summary.mintempi.as_ref())?,
        solar_radiation_readings_w,
        mean_wind_speed_mph: required("dailysummary.meanwindspdi", summary.meanwindspdi.as_ref())?,
        elevation_meters: required("display_location.elevation", location.elevation.as_ref())?,
        min_humidity_pct: required("dailysummary.minhumidity", summary.minhumidity.as_ref())?,
        max_humidity_pct: required("dailysummary.maxhumidity", summary.maxhumidity.as_ref())?,
        latitude_degrees: required("display_location.latitude", location.latitude.as_ref())?,
        longitude_degrees: required("display_location.longitude", location.longitude.as_ref())?,
        day_of_year: date.ordinal(),
    })
}

// ============================================================================
// Tests
// ============================================================================
