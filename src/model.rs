/// Core data types for the reference evapotranspiration service.
///
/// This module defines the shared domain model imported by all other modules:
/// the weather observation fed into the calculator, the calculation
/// parameters, the audit-trail result and the error types.
/// It contains no formulas and no I/O.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// One calendar day of weather at a single station.
///
/// Produced by `ingest::wunderground::parse_history` or deserialized from an
/// offline observation file. Temperatures and wind are in the imperial units
/// the station reports; elevation is already in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub max_temp_f: f64,
    pub min_temp_f: f64,
    /// Intraday solar radiation samples in W/m². Only the mean is used.
    pub solar_radiation_readings_w: Vec<f64>,
    pub mean_wind_speed_mph: f64,
    pub elevation_meters: f64,
    pub min_humidity_pct: f64,
    pub max_humidity_pct: f64,
    pub latitude_degrees: f64,
    /// Carried as station metadata; the formulas never read it.
    pub longitude_degrees: f64,
    /// Day within the observation's own calendar year, 1..=366.
    pub day_of_year: u32,
}

/// Albedo of the FAO-56 hypothetical grass reference crop.
pub const GRASS_REFERENCE_ALBEDO: f64 = 0.23;

/// Tunable inputs that are not part of the weather record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationParameters {
    /// Canopy reflection coefficient (albedo), expected in [0, 1].
    pub canopy_reflection_coefficient: f64,
}

impl CalculationParameters {
    pub fn new(canopy_reflection_coefficient: f64) -> Self {
        Self { canopy_reflection_coefficient }
    }

    pub fn grass_reference() -> Self {
        Self::new(GRASS_REFERENCE_ALBEDO)
    }
}

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Every intermediate term of one Penman-Monteith evaluation plus the final
/// ET0 in millimeters and inches.
///
/// Built in one step by `et0::compute` once every stage has run, so a
/// partially-filled result is never observable. Fields are read through
/// getters; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvapotranspirationResult {
    pub(crate) mean_daily_air_temperature_c: f64,
    pub(crate) mean_solar_radiation_mj: f64,
    pub(crate) mean_wind_speed_ms: f64,
    pub(crate) saturation_vapor_pressure_curve_slope: f64,
    pub(crate) atmospheric_pressure: f64,
    pub(crate) psychrometric_constant: f64,
    pub(crate) delta_term: f64,
    pub(crate) psi_term: f64,
    pub(crate) temperature_term: f64,
    pub(crate) mean_saturation_vapor_pressure: f64,
    pub(crate) actual_vapor_pressure: f64,
    pub(crate) vapor_pressure_deficit: f64,
    pub(crate) inverse_relative_distance: f64,
    pub(crate) solar_declination: f64,
    pub(crate) latitude_radians: f64,
    pub(crate) sunset_hour_angle: f64,
    pub(crate) extraterrestrial_radiation: f64,
    pub(crate) clear_sky_radiation: f64,
    pub(crate) net_shortwave_radiation: f64,
    pub(crate) net_longwave_radiation: f64,
    pub(crate) net_radiation: f64,
    pub(crate) net_radiation_mm: f64,
    pub(crate) radiation_term: f64,
    pub(crate) wind_term: f64,
    pub(crate) evapotranspiration_mm: f64,
    pub(crate) evapotranspiration_in: f64,
}

impl EvapotranspirationResult {
    /// Mean daily air temperature, °C.
    pub fn mean_daily_air_temperature_c(&self) -> f64 { self.mean_daily_air_temperature_c }
    /// Mean solar radiation, MJ/m²/day.
    pub fn mean_solar_radiation_mj(&self) -> f64 { self.mean_solar_radiation_mj }
    /// Mean wind speed, m/s.
    pub fn mean_wind_speed_ms(&self) -> f64 { self.mean_wind_speed_ms }
    /// Slope of the saturation vapor pressure curve (Δ), kPa/°C.
    pub fn saturation_vapor_pressure_curve_slope(&self) -> f64 { self.saturation_vapor_pressure_curve_slope }
    /// Atmospheric pressure, kPa.
    pub fn atmospheric_pressure(&self) -> f64 { self.atmospheric_pressure }
    /// Psychrometric constant (γ), kPa/°C.
    pub fn psychrometric_constant(&self) -> f64 { self.psychrometric_constant }
    pub fn delta_term(&self) -> f64 { self.delta_term }
    pub fn psi_term(&self) -> f64 { self.psi_term }
    pub fn temperature_term(&self) -> f64 { self.temperature_term }
    /// Mean saturation vapor pressure (es), kPa.
    pub fn mean_saturation_vapor_pressure(&self) -> f64 { self.mean_saturation_vapor_pressure }
    /// Actual vapor pressure (ea), kPa.
    pub fn actual_vapor_pressure(&self) -> f64 { self.actual_vapor_pressure }
    /// es - ea, kPa.
    pub fn vapor_pressure_deficit(&self) -> f64 { self.vapor_pressure_deficit }
    /// Inverse relative Earth-Sun distance (dr).
    pub fn inverse_relative_distance(&self) -> f64 { self.inverse_relative_distance }
    /// Solar declination (δ), rad.
    pub fn solar_declination(&self) -> f64 { self.solar_declination }
    pub fn latitude_radians(&self) -> f64 { self.latitude_radians }
    /// Sunset hour angle (ωs), rad.
    pub fn sunset_hour_angle(&self) -> f64 { self.sunset_hour_angle }
    /// Extraterrestrial radiation (Ra), MJ/m²/day.
    pub fn extraterrestrial_radiation(&self) -> f64 { self.extraterrestrial_radiation }
    /// Clear-sky radiation (Rso), MJ/m²/day.
    pub fn clear_sky_radiation(&self) -> f64 { self.clear_sky_radiation }
    /// Net shortwave radiation (Rns), MJ/m²/day.
    pub fn net_shortwave_radiation(&self) -> f64 { self.net_shortwave_radiation }
    /// Net outgoing longwave radiation (Rnl), MJ/m²/day.
    pub fn net_longwave_radiation(&self) -> f64 { self.net_longwave_radiation }
    /// Net radiation (Rn), MJ/m²/day.
    pub fn net_radiation(&self) -> f64 { self.net_radiation }
    /// Net radiation expressed as equivalent evaporation, mm/day.
    pub fn net_radiation_mm(&self) -> f64 { self.net_radiation_mm }
    pub fn radiation_term(&self) -> f64 { self.radiation_term }
    pub fn wind_term(&self) -> f64 { self.wind_term }
    pub fn evapotranspiration_mm(&self) -> f64 { self.evapotranspiration_mm }
    pub fn evapotranspiration_in(&self) -> f64 { self.evapotranspiration_in }

    /// Label/value pairs in pipeline order, for reports.
    pub fn terms(&self) -> [(&'static str, f64); 26] {
        [
            ("mean daily air temperature (°C)", self.mean_daily_air_temperature_c),
            ("mean solar radiation (MJ/m²/day)", self.mean_solar_radiation_mj),
            ("mean wind speed (m/s)", self.mean_wind_speed_ms),
            ("sat. vapor pressure slope Δ (kPa/°C)", self.saturation_vapor_pressure_curve_slope),
            ("atmospheric pressure (kPa)", self.atmospheric_pressure),
            ("psychrometric constant γ (kPa/°C)", self.psychrometric_constant),
            ("delta term", self.delta_term),
            ("psi term", self.psi_term),
            ("temperature term", self.temperature_term),
            ("mean sat. vapor pressure es (kPa)", self.mean_saturation_vapor_pressure),
            ("actual vapor pressure ea (kPa)", self.actual_vapor_pressure),
            ("vapor pressure deficit (kPa)", self.vapor_pressure_deficit),
            ("inverse Earth-Sun distance dr", self.inverse_relative_distance),
            ("solar declination δ (rad)", self.solar_declination),
            ("latitude φ (rad)", self.latitude_radians),
            ("sunset hour angle ωs (rad)", self.sunset_hour_angle),
            ("extraterrestrial radiation Ra", self.extraterrestrial_radiation),
            ("clear-sky radiation Rso", self.clear_sky_radiation),
            ("net shortwave radiation Rns", self.net_shortwave_radiation),
            ("net longwave radiation Rnl", self.net_longwave_radiation),
            ("net radiation Rn", self.net_radiation),
            ("net radiation (mm)", self.net_radiation_mm),
            ("radiation term", self.radiation_term),
            ("wind term", self.wind_term),
            ("ET0 (mm/day)", self.evapotranspiration_mm),
            ("ET0 (in/day)", self.evapotranspiration_in),
        ]
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the ET0 calculation itself.
#[derive(Debug, Clone, PartialEq)]
pub enum EtError {
    /// An input field is outside its physical or documented range.
    InvalidInput { field: &'static str, reason: String },
    /// The inputs are valid but the formulas have no finite answer for them
    /// (e.g. zero clear-sky radiation during polar night).
    NonComputable(String),
}

impl std::fmt::Display for EtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EtError::InvalidInput { field, reason } => {
                write!(f, "Invalid input `{}`: {}", field, reason)
            }
            EtError::NonComputable(msg) => write!(f, "Non-computable result: {}", msg),
        }
    }
}

impl std::error::Error for EtError {}

/// Errors that can arise when fetching or parsing station history.
#[derive(Debug, PartialEq)]
pub enum IngestError {
    /// Non-2xx HTTP response from the weather API.
    HttpError(u16),
    /// The request never produced a response (DNS, TLS, timeout, ...).
    RequestFailed(String),
    /// The response body could not be deserialized.
    ParseError(String),
    /// A field the calculation needs is absent from the response.
    MissingField(String),
    /// The station answered but had nothing for the requested day.
    NoDataAvailable(String),
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::HttpError(code) => write!(f, "HTTP error: {}", code),
            IngestError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            IngestError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            IngestError::MissingField(field) => write!(f, "Missing field: {}", field),
            IngestError::NoDataAvailable(what) => write!(f, "No data available: {}", what),
        }
    }
}

impl std::error::Error for IngestError {}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::ParseError(err.to_string())
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => IngestError::HttpError(status.as_u16()),
            None if err.is_decode() => IngestError::ParseError(err.to_string()),
            None => IngestError::RequestFailed(err.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
