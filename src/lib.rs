/// et0_service: FAO-56 reference evapotranspiration for weather stations.
///
/// # Module structure
///
/// ```text
/// et0_service
/// ├── model       — shared data types (WeatherObservation, EvapotranspirationResult, EtError, …)
/// ├── units       — fixed unit conversions (°F, ft, W/m², mph, degrees, mm)
/// ├── et0
/// │   ├── formulas — Penman-Monteith stage equations
/// │   └── validate — input range checks
/// ├── ingest
/// │   ├── wunderground — Weather Underground PWS history: URL + JSON parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── config      — TOML station list, API access and logging settings
/// ├── logging     — levelled console/file logging with failure classification
/// └── report      — text and JSON renderings of a result
/// ```

pub mod config;
pub mod et0;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod report;
pub mod units;
