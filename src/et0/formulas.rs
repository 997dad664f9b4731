/// FAO-56 Penman-Monteith stage formulas.
///
/// One function per stage so each term can be checked on its own. Units:
/// temperatures in °C, pressures in kPa, radiation in MJ/m²/day, angles in
/// radians, wind in m/s at 2 m.

use std::f64::consts::PI;

const VAPOR_RATE: f64 = 237.3;
const ENTHALPY: f64 = 17.27;
const KELVIN: f64 = 273.15;
/// Solar constant, MJ/m²/min.
const SOLAR_CONSTANT: f64 = 0.0820;
/// Stefan-Boltzmann constant, MJ/K⁴/m²/day.
const STEFAN_BOLTZMANN: f64 = 4.903e-9;
/// Radiation (MJ/m²/day) to equivalent evaporation (mm/day).
pub const RADIATION_TO_MM: f64 = 0.408;

/// Saturation vapor pressure e°(T) at air temperature `t_c`.
pub fn saturation_vapor_pressure(t_c: f64) -> f64 {
    0.6108 * ((ENTHALPY * t_c) / (t_c + VAPOR_RATE)).exp()
}

/// Slope Δ of the saturation vapor pressure curve at `t_mean_c`.
pub fn saturation_vapor_pressure_curve_slope(t_mean_c: f64) -> f64 {
    4098.0 * saturation_vapor_pressure(t_mean_c) / (t_mean_c + VAPOR_RATE).powi(2)
}

/// Atmospheric pressure from station elevation.
pub fn atmospheric_pressure(elevation_m: f64) -> f64 {
    101.3 * ((293.0 - 0.0065 * elevation_m) / 293.0).powf(5.26)
}

pub fn psychrometric_constant(pressure_kpa: f64) -> f64 {
    0.000665 * pressure_kpa
}

fn combination_denominator(slope: f64, gamma: f64, wind_ms: f64) -> f64 {
    slope + gamma * (1.0 + 0.34 * wind_ms)
}

/// Auxiliary delta term (DT) of the radiation component.
pub fn delta_term(slope: f64, gamma: f64, wind_ms: f64) -> f64 {
    slope / combination_denominator(slope, gamma, wind_ms)
}

/// Auxiliary psi term (PT) of the wind component.
pub fn psi_term(slope: f64, gamma: f64, wind_ms: f64) -> f64 {
    gamma / combination_denominator(slope, gamma, wind_ms)
}

/// Auxiliary temperature term (TT) of the wind component.
pub fn temperature_term(t_mean_c: f64, wind_ms: f64) -> f64 {
    900.0 / (t_mean_c + KELVIN) * wind_ms
}

/// Mean saturation vapor pressure es over the day.
pub fn mean_saturation_vapor_pressure(t_max_c: f64, t_min_c: f64) -> f64 {
    mean2(saturation_vapor_pressure(t_max_c), saturation_vapor_pressure(t_min_c))
}

/// Actual vapor pressure ea from the daily humidity extremes.
///
/// Max humidity pairs with min temperature and vice versa.
pub fn actual_vapor_pressure(
    t_min_c: f64,
    t_max_c: f64,
    min_humidity_pct: f64,
    max_humidity_pct: f64,
) -> f64 {
    mean2(
        saturation_vapor_pressure(t_min_c) * (max_humidity_pct / 100.0),
        saturation_vapor_pressure(t_max_c) * (min_humidity_pct / 100.0),
    )
}

fn annual_angle(day_of_year: u32) -> f64 {
    2.0 * PI / 365.0 * f64::from(day_of_year)
}

/// Inverse relative Earth-Sun distance dr.
pub fn inverse_relative_distance(day_of_year: u32) -> f64 {
    1.0 + 0.033 * annual_angle(day_of_year).cos()
}

/// Solar declination δ.
pub fn solar_declination(day_of_year: u32) -> f64 {
    0.409 * (annual_angle(day_of_year) - 1.39).sin()
}

/// Sunset hour angle ωs.
///
/// NaN when `-tan φ · tan δ` leaves [-1, 1] (polar day or night).
pub fn sunset_hour_angle(latitude_rad: f64, declination: f64) -> f64 {
    (-latitude_rad.tan() * declination.tan()).acos()
}

/// Extraterrestrial radiation Ra.
pub fn extraterrestrial_radiation(
    inverse_distance: f64,
    sunset_hour_angle: f64,
    latitude_rad: f64,
    declination: f64,
) -> f64 {
    let geometry = sunset_hour_angle * latitude_rad.sin() * declination.sin()
        + latitude_rad.cos() * declination.cos() * sunset_hour_angle.sin();
    (24.0 * 60.0 / PI) * (SOLAR_CONSTANT * inverse_distance) * geometry
}

/// Clear-sky radiation Rso.
pub fn clear_sky_radiation(elevation_m: f64, extraterrestrial: f64) -> f64 {
    (0.75 + 2e-5 * elevation_m) * extraterrestrial
}

/// Net shortwave radiation Rns for canopy albedo `albedo`.
pub fn net_shortwave_radiation(albedo: f64, solar_radiation_mj: f64) -> f64 {
    (1.0 - albedo) * solar_radiation_mj
}

/// Net outgoing longwave radiation Rnl.
///
/// Divides by `clear_sky`; callers must rule out `clear_sky == 0` first.
pub fn net_longwave_radiation(
    t_min_c: f64,
    t_max_c: f64,
    actual_vapor_pressure: f64,
    solar_radiation_mj: f64,
    clear_sky: f64,
) -> f64 {
    let mean_kelvin4 = mean2((t_max_c + KELVIN).powi(4), (t_min_c + KELVIN).powi(4));
    let humidity_correction = 0.34 - 0.14 * actual_vapor_pressure.sqrt();
    let cloudiness = 1.35 * solar_radiation_mj / clear_sky - 0.35;
    STEFAN_BOLTZMANN * mean_kelvin4 * humidity_correction * cloudiness
}

pub(crate) fn mean2(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}
