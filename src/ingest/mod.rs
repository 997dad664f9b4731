/// Weather data acquisition.
///
/// Everything that talks to a remote provider lives here; the calculator
/// only ever sees a typed `WeatherObservation`.
///
/// Submodules:
/// - `wunderground` — Weather Underground PWS history: URL, fetch, parse.
/// - `fixtures` (test only) — representative API response payloads.

pub mod wunderground;

#[cfg(test)]
pub(crate) mod fixtures;
