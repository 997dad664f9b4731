/// Reference evapotranspiration (ET0) by the FAO-56 Penman-Monteith method.
///
/// `compute` is a pure function: it validates the inputs, runs every stage
/// exactly once in dependency order, and returns the full audit trail.
/// Nothing here logs or touches I/O; callers that want to log failures do
/// so with `logging::log_calculation_failure`.
///
/// Submodules:
/// - `formulas` — the individual stage equations.
/// - `validate` — input range checks.

pub mod formulas;
pub mod validate;

use crate::model::{CalculationParameters, EtError, EvapotranspirationResult, WeatherObservation};
use crate::units;
use formulas::*;

/// Computes ET0 for one station-day.
///
/// # Errors
/// - `EtError::InvalidInput` if any field fails `validate::validate_inputs`.
/// - `EtError::NonComputable` if clear-sky radiation is zero or undefined
///   (polar day/night latitudes), or the final value is not finite.
pub fn compute(
    observation: &WeatherObservation,
    params: &CalculationParameters,
) -> Result<EvapotranspirationResult, EtError> {
    validate::validate_inputs(observation, params)?;

    let max_temp_c = units::fahrenheit_to_celsius(observation.max_temp_f);
    let min_temp_c = units::fahrenheit_to_celsius(observation.min_temp_f);
    let elevation_m = observation.elevation_meters;
    let day = observation.day_of_year;

    // 1-3: daily means
    let mean_temp_c = mean2(max_temp_c, min_temp_c);
    let readings = &observation.solar_radiation_readings_w;
    let mean_solar_w = readings.iter().sum::<f64>() / readings.len() as f64;
    let solar_mj = units::watts_to_megajoules(mean_solar_w);
    let wind_ms = units::mph_to_meters_per_second(observation.mean_wind_speed_mph);

    // 4-10: psychrometrics and auxiliary terms
    let slope = saturation_vapor_pressure_curve_slope(mean_temp_c);
    let pressure = atmospheric_pressure(elevation_m);
    let gamma = psychrometric_constant(pressure);
    let dt = delta_term(slope, gamma, wind_ms);
    let pt = psi_term(slope, gamma, wind_ms);
    let tt = temperature_term(mean_temp_c, wind_ms);

    // 11-12: vapor pressures
    let es = mean_saturation_vapor_pressure(max_temp_c, min_temp_c);
    let ea = actual_vapor_pressure(
        min_temp_c,
        max_temp_c,
        observation.min_humidity_pct,
        observation.max_humidity_pct,
    );
    let deficit = es - ea;

    // 13-18: solar geometry
    let dr = inverse_relative_distance(day);
    let declination = solar_declination(day);
    let latitude_rad = units::degrees_to_radians(observation.latitude_degrees);
    let omega_s = sunset_hour_angle(latitude_rad, declination);
    let ra = extraterrestrial_radiation(dr, omega_s, latitude_rad, declination);
    let rso = clear_sky_radiation(elevation_m, ra);
    if !rso.is_finite() || rso == 0.0 {
        return Err(EtError::NonComputable(format!(
            "clear-sky radiation is {} at latitude {}° on day {}",
            rso, observation.latitude_degrees, day
        )));
    }

    // 19-21: radiation balance
    let rns = net_shortwave_radiation(params.canopy_reflection_coefficient, solar_mj);
    let rnl = net_longwave_radiation(min_temp_c, max_temp_c, ea, solar_mj, rso);
    let rn = rns - rnl;
    let rn_mm = rn * RADIATION_TO_MM;

    // 22-23 and final
    let radiation_term = dt * rn_mm;
    let wind_term = pt * tt * deficit;
    let et0_mm = radiation_term + wind_term;
    if !et0_mm.is_finite() {
        return Err(EtError::NonComputable(format!("ET0 evaluated to {}", et0_mm)));
    }

    Ok(EvapotranspirationResult {
        mean_daily_air_temperature_c: mean_temp_c,
        mean_solar_radiation_mj: solar_mj,
        mean_wind_speed_ms: wind_ms,
        saturation_vapor_pressure_curve_slope: slope,
        atmospheric_pressure: pressure,
        psychrometric_constant: gamma,
        delta_term: dt,
        psi_term: pt,
        temperature_term: tt,
        mean_saturation_vapor_pressure: es,
        actual_vapor_pressure: ea,
        vapor_pressure_deficit: deficit,
        inverse_relative_distance: dr,
        solar_declination: declination,
        latitude_radians: latitude_rad,
        sunset_hour_angle: omega_s,
        extraterrestrial_radiation: ra,
        clear_sky_radiation: rso,
        net_shortwave_radiation: rns,
        net_longwave_radiation: rnl,
        net_radiation: rn,
        net_radiation_mm: rn_mm,
        radiation_term,
        wind_term,
        evapotranspiration_mm: et0_mm,
        evapotranspiration_in: units::millimeters_to_inches(et0_mm),
    })
}
