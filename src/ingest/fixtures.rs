/// Representative Weather Underground history payloads, trimmed to the
/// fields the parser reads plus a little surrounding noise.

pub const HISTORY_RESPONSE: &str = r#"{
  "response": { "version": "0.1" },
  "current_observation": {
    "station_id": "KCOLITTL12",
    "display_location": {
      "full": "Littleton, CO",
      "latitude": "39.00000000",
      "longitude": "-104.90000000",
      "elevation": "152.4"
    }
  },
  "history": {
    "observations": [
      { "date": { "hour": "00" }, "tempi": "64.2", "solarradiation": "0" },
      { "date": { "hour": "09" }, "tempi": "72.0", "solarradiation": "210" },
      { "date": { "hour": "13" }, "tempi": "85.1", "solarradiation": "540" },
      { "date": { "hour": "17" }, "tempi": "80.3", "solarradiation": "250" }
    ],
    "dailysummary": [
      {
        "maxtempi": "86",
        "mintempi": "62",
        "meanwindspdi": "5",
        "maxhumidity": "90",
        "minhumidity": "40",
        "precipi": "0.00"
      }
    ]
  }
}"#;

pub const HISTORY_WITH_GAPS: &str = r#"{
  "current_observation": {
    "display_location": { "latitude": "39.0", "longitude": "-104.9", "elevation": "152.4" }
  },
  "history": {
    "observations": [
      { "solarradiation": "300" },
      { "solarradiation": "" },
      { "solarradiation": "-9999" },
      { "tempi": "70.0" },
      { "solarradiation": "200" }
    ],
    "dailysummary": [
      { "maxtempi": "86", "mintempi": "62", "meanwindspdi": "5", "maxhumidity": "90", "minhumidity": "40" }
    ]
  }
}"#;

pub const HISTORY_NUMERIC_VALUES: &str = r#"{
  "current_observation": {
    "display_location": { "latitude": 36.1, "longitude": -115.2, "elevation": 610 }
  },
  "history": {
    "observations": [ { "solarradiation": 400 } ],
    "dailysummary": [
      { "maxtempi": 91.5, "mintempi": 70, "meanwindspdi": 8, "maxhumidity": 35, "minhumidity": 9 }
    ]
  }
}"#;

pub const HISTORY_EMPTY_SUMMARY: &str = r#"{
  "current_observation": {
    "display_location": { "latitude": "39.0", "longitude": "-104.9", "elevation": "152.4" }
  },
  "history": { "observations": [], "dailysummary": [] }
}"#;

pub const HISTORY_NO_LOCATION: &str = r#"{
  "history": {
    "observations": [ { "solarradiation": "250" } ],
    "dailysummary": [
      { "maxtempi": "86", "mintempi": "62", "meanwindspdi": "5", "maxhumidity": "90", "minhumidity": "40" }
    ]
  }
}"#;

pub const HISTORY_BAD_NUMBER: &str = r#"{
  "current_observation": {
    "display_location": { "latitude": "39.0", "longitude": "-104.9", "elevation": "152.4" }
  },
  "history": {
    "observations": [ { "solarradiation": "250" } ],
    "dailysummary": [
      { "maxtempi": "N/A", "mintempi": "62", "meanwindspdi": "5", "maxhumidity": "90", "minhumidity": "40" }
    ]
  }
}"#;
