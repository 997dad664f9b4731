/// Fixed unit conversions used by the ET0 pipeline.
///
/// The factors are the ones the calculation was calibrated with, not
/// necessarily the most precise SI values (e.g. `0.477` for mph → m/s,
/// which also folds in a wind-height adjustment to 2 m).

use std::f64::consts::PI;

const METERS_PER_FOOT: f64 = 0.3048;
const W_TO_MJ_PER_DAY: f64 = 0.0864;
const MPH_TO_MS_AT_2M: f64 = 0.477;
const MM_TO_IN: f64 = 0.0393701;

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) / 1.8
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 1.8 + 32.0
}

pub fn feet_to_meters(ft: f64) -> f64 {
    ft * METERS_PER_FOOT
}

pub fn meters_to_feet(m: f64) -> f64 {
    m / METERS_PER_FOOT
}

/// Mean irradiance in W/m² to daily radiation in MJ/m²/day.
pub fn watts_to_megajoules(w: f64) -> f64 {
    w * W_TO_MJ_PER_DAY
}

pub fn mph_to_meters_per_second(mph: f64) -> f64 {
    mph * MPH_TO_MS_AT_2M
}

pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

pub fn millimeters_to_inches(mm: f64) -> f64 {
    mm * MM_TO_IN
}
