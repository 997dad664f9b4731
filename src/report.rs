/// Human- and machine-readable renderings of a calculation.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::EvapotranspirationResult;

/// One computed station-day, as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub station: Option<&'a str>,
    pub date: Option<NaiveDate>,
    pub canopy_reflection_coefficient: f64,
    pub result: &'a EvapotranspirationResult,
}

impl Report<'_> {
    /// Aligned two-column table of every term, headline values last.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let station = self.station.unwrap_or("offline observation");
        let header = match self.date {
            Some(date) => format!("{} on {}", station, date),
            None => station.to_string(),
        };
        let _ = writeln!(out, "{}", header);
        let _ = writeln!(out, "canopy reflection coefficient: {}", self.canopy_reflection_coefficient);
        for (label, value) in self.result.terms() {
            let _ = writeln!(out, "  {:<40} {:>12.6}", label, value);
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::et0::compute;
    use crate::model::{CalculationParameters, WeatherObservation};

    fn result() -> EvapotranspirationResult {
        let obs = WeatherObservation {
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
        };
        compute(&obs, &CalculationParameters::grass_reference()).unwrap()
    }

    #[test]
    fn test_text_report_lists_every_term() {
        let r = result();
        let report = Report {
            station: Some("KCOLITTL12"),
            date: NaiveDate::from_ymd_opt(2017, 9, 5),
            canopy_reflection_coefficient: 0.23,
            result: &r,
        };
        let text = report.to_text();
        assert!(text.starts_with("KCOLITTL12 on 2017-09-05"));
        assert_eq!(text.lines().count(), 2 + 26);
        assert!(text.contains("ET0 (mm/day)"));
    }

    #[test]
    fn test_json_report_exposes_audit_trail() {
        let r = result();
        let report = Report { station: None, date: None, canopy_reflection_coefficient: 0.23, result: &r };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        let mm = value["result"]["evapotranspiration_mm"].as_f64().unwrap();
        assert_eq!(mm, r.evapotranspiration_mm());
        assert!(value["result"]["clear_sky_radiation"].is_number());
        assert!(value["station"].is_null());
    }
}
