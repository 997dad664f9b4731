/// Boundary checks on calculation inputs.
///
/// Out-of-range values are rejected with the offending field named, never
/// clamped.

use crate::model::{CalculationParameters, EtError, WeatherObservation};

fn invalid(field: &'static str, reason: String) -> EtError {
    EtError::InvalidInput { field, reason }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), EtError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{} is not a finite number", value)))
    }
}

fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), EtError> {
    require_finite(field, value)?;
    if value < min || value > max {
        return Err(invalid(field, format!("{} is outside [{}, {}]", value, min, max)));
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), EtError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, format!("{} must not be negative", value)));
    }
    Ok(())
}

/// Validates an observation and parameter set before any formula runs.
pub fn validate_inputs(
    observation: &WeatherObservation,
    params: &CalculationParameters,
) -> Result<(), EtError> {
    require_finite("max_temp_f", observation.max_temp_f)?;
    require_finite("min_temp_f", observation.min_temp_f)?;
    require_finite("elevation_meters", observation.elevation_meters)?;
    require_finite("longitude_degrees", observation.longitude_degrees)?;

    require_non_negative("mean_wind_speed_mph", observation.mean_wind_speed_mph)?;
    require_range("min_humidity_pct", observation.min_humidity_pct, 0.0, 100.0)?;
    require_range("max_humidity_pct", observation.max_humidity_pct, 0.0, 100.0)?;
    if observation.min_humidity_pct > observation.max_humidity_pct {
        return Err(invalid(
            "min_humidity_pct",
            format!(
                "{} exceeds max_humidity_pct {}",
                observation.min_humidity_pct, observation.max_humidity_pct
            ),
        ));
    }
    require_range("latitude_degrees", observation.latitude_degrees, -90.0, 90.0)?;

    if !(1..=366).contains(&observation.day_of_year) {
        return Err(invalid(
            "day_of_year",
            format!("{} is outside [1, 366]", observation.day_of_year),
        ));
    }

    if observation.solar_radiation_readings_w.is_empty() {
        return Err(invalid(
            "solar_radiation_readings_w",
            "at least one reading is required".to_string(),
        ));
    }
    if let Some(bad) = observation
        .solar_radiation_readings_w
        .iter()
        .find(|r| !r.is_finite())
    {
        return Err(invalid(
            "solar_radiation_readings_w",
            format!("{} is not a finite number", bad),
        ));
    }

    require_range(
        "canopy_reflection_coefficient",
        params.canopy_reflection_coefficient,
        0.0,
        1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> WeatherObservation {
        WeatherObservation {
            max_temp_f: 86.0,
            min_temp_f: 62.0,
            solar_radiation_readings_w: vec![250.0],
            mean_wind_speed_mph: 5.0,
            elevation_meters: 152.4,
            min_humidity_pct: 40.0,
            max_humidity_pct: 90.0,
            latitude_degrees: 39.0,
            longitude_degrees: -104.9,
            day_of_year: 248,
        }
    }

    fn rejected_field(obs: &WeatherObservation, albedo: f64) -> Option<&'static str> {
        match validate_inputs(obs, &CalculationParameters::new(albedo)) {
            Err(EtError::InvalidInput { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn test_valid_observation_passes() {
        assert!(validate_inputs(&observation(), &CalculationParameters::new(1.0)).is_ok());
    }

    #[test]
    fn test_humidity_of_150_is_rejected() {
        let mut obs = observation();
        obs.max_humidity_pct = 150.0;
        assert_eq!(rejected_field(&obs, 0.23), Some("max_humidity_pct"));
    }

    #[test]
    fn test_negative_humidity_is_rejected() {
        let mut obs = observation();
        obs.min_humidity_pct = -1.0;
        assert_eq!(rejected_field(&obs, 0.23), Some("min_humidity_pct"));
    }

    #[test]
    fn test_inverted_humidity_range_is_rejected() {
        let mut obs = observation();
        obs.min_humidity_pct = 95.0;
        assert_eq!(rejected_field(&obs, 0.23), Some("min_humidity_pct"));
    }

    #[test]
    fn test_canopy_coefficient_bounds() {
        assert_eq!(rejected_field(&observation(), 1.01), Some("canopy_reflection_coefficient"));
        assert_eq!(rejected_field(&observation(), -0.1), Some("canopy_reflection_coefficient"));
        assert_eq!(rejected_field(&observation(), 0.0), None);
        assert_eq!(rejected_field(&observation(), 1.0), None);
    }

    #[test]
    fn test_day_of_year_bounds() {
        let mut obs = observation();
        obs.day_of_year = 0;
        assert_eq!(rejected_field(&obs, 0.23), Some("day_of_year"));
        obs.day_of_year = 367;
        assert_eq!(rejected_field(&obs, 0.23), Some("day_of_year"));
        obs.day_of_year = 366;
        assert_eq!(rejected_field(&obs, 0.23), None);
    }

    #[test]
    fn test_empty_or_nan_solar_readings_are_rejected() {
        let mut obs = observation();
        obs.solar_radiation_readings_w.clear();
        assert_eq!(rejected_field(&obs, 0.23), Some("solar_radiation_readings_w"));
        obs.solar_radiation_readings_w = vec![100.0, f64::NAN];
        assert_eq!(rejected_field(&obs, 0.23), Some("solar_radiation_readings_w"));
    }

    #[test]
    fn test_nan_temperature_is_rejected() {
        let mut obs = observation();
        obs.max_temp_f = f64::NAN;
        assert_eq!(rejected_field(&obs, 0.23), Some("max_temp_f"));
    }

    #[test]
    fn test_latitude_out_of_range_is_rejected() {
        let mut obs = observation();
        obs.latitude_degrees = 91.0;
        assert_eq!(rejected_field(&obs, 0.23), Some("latitude_degrees"));
        obs.latitude_degrees = -90.5;
        assert_eq!(rejected_field(&obs, 0.23), Some("latitude_degrees"));
        obs.latitude_degrees = -90.0;
        assert_eq!(rejected_field(&obs, 0.23), None);
    }

    #[test]
    fn test_negative_wind_is_rejected() {
        let mut obs = observation();
        obs.mean_wind_speed_mph = -1.0;
        match validate_inputs(&obs, &CalculationParameters::grass_reference()) {
            Err(EtError::InvalidInput { field, reason }) => {
                assert_eq!(field, "mean_wind_speed_mph");
                assert_eq!(reason, "-1 must not be negative");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        obs.mean_wind_speed_mph = 0.0;
        assert_eq!(rejected_field(&obs, 0.23), None);
    }

    #[test]
    fn test_infinite_wind_is_rejected() {
        let mut obs = observation();
        obs.mean_wind_speed_mph = f64::INFINITY;
        assert_eq!(rejected_field(&obs, 0.23), Some("mean_wind_speed_mph"));
    }

    #[test]
    fn test_non_finite_elevation_is_rejected() {
        let mut obs = observation();
        obs.elevation_meters = f64::NAN;
        assert_eq!(rejected_field(&obs, 0.23), Some("elevation_meters"));
        obs.elevation_meters = f64::NEG_INFINITY;
        assert_eq!(rejected_field(&obs, 0.23), Some("elevation_meters"));
    }

    #[test]
    fn test_non_finite_longitude_is_rejected() {
        let mut obs = observation();
        obs.longitude_degrees = f64::INFINITY;
        assert_eq!(rejected_field(&obs, 0.23), Some("longitude_degrees"));
    }
}
