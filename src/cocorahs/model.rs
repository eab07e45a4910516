//! Request and response shapes exchanged with the CoCoRaHS API.
//!
//! Nothing here is persisted: every value lives for a single request/response
//! round trip. Wire names (`stationNumber`, `gaugeCatch`, ...) are kept at the
//! serde and form-encoding boundary only.

use crate::error::{CocorahsError, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Timestamp layout the API expects: local time, second precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Client identifier sent in the `source` field of every report.
pub const REPORT_SOURCE: &str = concat!(
    "cocorahs-rs/",
    env!("CARGO_PKG_VERSION"),
    " (command line reporter)"
);

/// Measurement units for `gaugeCatch`. Amounts are always inches.
pub const REPORT_UNITS: &str = "english";

/// Sentinel accepted on the command line for a trace amount.
pub const TRACE_SENTINEL: &str = "T";

/// Base URL for viewing a submitted daily report.
pub const REPORT_VIEW_URL: &str =
    "https://www.cocorahs.org/ViewData/ViewDailyPrecipReport.aspx?DailyPrecipReportID=";

/// Accepted layouts for a user-supplied observation time.
const OBSERVATION_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Basic-auth credentials attached to every outbound call.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A monitoring station the account may report for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Station {
    #[serde(rename = "stationNumber")]
    pub station_number: String,

    #[serde(rename = "stationName", default)]
    pub station_name: Option<String>,
}

impl Station {
    pub fn new(station_number: impl Into<String>) -> Self {
        Self {
            station_number: station_number.into(),
            station_name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.station_name = Some(name.into());
        self
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.station_name {
            Some(name) if !name.is_empty() => write!(f, "{} ({})", self.station_number, name),
            _ => write!(f, "{}", self.station_number),
        }
    }
}

/// Body of `GET identity`. Only the station list is read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub stations: Vec<Station>,
}

// ---------------------------------------------------------------------------
// Precipitation
// ---------------------------------------------------------------------------

/// A gauge reading as entered by the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precipitation {
    /// Measurable amount, in inches.
    Amount(f64),
    /// Too little to measure.
    Trace,
}

impl Precipitation {
    /// The `gaugeCatch` value: zero for trace.
    pub fn gauge_catch(&self) -> f64 {
        match self {
            Precipitation::Amount(inches) => *inches,
            Precipitation::Trace => 0.0,
        }
    }

    pub fn is_trace(&self) -> bool {
        matches!(self, Precipitation::Trace)
    }
}

impl FromStr for Precipitation {
    type Err = CocorahsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == TRACE_SENTINEL {
            return Ok(Precipitation::Trace);
        }

        let inches: f64 = s
            .parse()
            .map_err(|_| CocorahsError::InvalidPrecipitation(s.to_string()))?;
        if !inches.is_finite() || inches < 0.0 {
            return Err(CocorahsError::InvalidPrecipitation(s.to_string()));
        }
        // "-0" parses as negative zero
        Ok(Precipitation::Amount(inches.abs()))
    }
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precipitation::Amount(inches) => write!(f, "{}", format_amount(*inches)),
            Precipitation::Trace => write!(f, "{}", TRACE_SENTINEL),
        }
    }
}

/// Formats an amount so whole numbers keep one decimal place ("1.0", "0.25").
pub fn format_amount(inches: f64) -> String {
    if inches.fract() == 0.0 {
        format!("{:.1}", inches)
    } else {
        format!("{}", inches)
    }
}

/// Parses a user-supplied observation time in any of the accepted layouts.
pub fn parse_observation_time(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    OBSERVATION_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| CocorahsError::InvalidObservationTime(s.to_string()))
}

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// The outbound daily precipitation report.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station_number: String,
    pub observation_time: NaiveDateTime,
    pub entry_time: NaiveDateTime,
    pub precipitation: Precipitation,
}

impl Observation {
    /// Builds a report entered at `entry_time`. Without an explicit
    /// observation time the report is observed at the moment of entry.
    pub fn new(
        station_number: impl Into<String>,
        precipitation: Precipitation,
        observation_time: Option<NaiveDateTime>,
        entry_time: NaiveDateTime,
    ) -> Self {
        Self {
            station_number: station_number.into(),
            observation_time: observation_time.unwrap_or(entry_time),
            entry_time,
            precipitation,
        }
    }

    /// Form fields for `POST DailyPrecipObs`.
    pub fn to_form(&self) -> Vec<(String, String)> {
        vec![
            (
                "obsDateTime".to_string(),
                self.observation_time.format(TIMESTAMP_FORMAT).to_string(),
            ),
            ("stationNumber".to_string(), self.station_number.clone()),
            (
                "entryDateTime".to_string(),
                self.entry_time.format(TIMESTAMP_FORMAT).to_string(),
            ),
            ("source".to_string(), REPORT_SOURCE.to_string()),
            ("units".to_string(), REPORT_UNITS.to_string()),
            (
                "gaugeCatch".to_string(),
                format_amount(self.precipitation.gauge_catch()),
            ),
            (
                "gaugeCatchIsTrace".to_string(),
                self.precipitation.is_trace().to_string(),
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// Report outcome
// ---------------------------------------------------------------------------

/// What the API said about a submitted report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report was stored under `uid`.
    Created { uid: String },
    /// The API answered `status: "error"`.
    Rejected { message: String },
}

impl ReportOutcome {
    /// Classifies a decoded `DailyPrecipObs` response body.
    pub fn from_value(body: &Value) -> Result<Self> {
        if body.get("status").and_then(Value::as_str) == Some("error") {
            let message = match body.get("message") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            return Ok(ReportOutcome::Rejected { message });
        }

        match body.get("uid") {
            Some(Value::String(uid)) if !uid.is_empty() => Ok(ReportOutcome::Created {
                uid: uid.clone(),
            }),
            Some(Value::Number(uid)) => Ok(ReportOutcome::Created {
                uid: uid.to_string(),
            }),
            _ => Err(CocorahsError::MalformedResponse(format!(
                "report response has neither an error status nor a uid: {}",
                body
            ))),
        }
    }

    /// Viewer link for a created report.
    pub fn report_url(&self) -> Option<String> {
        match self {
            ReportOutcome::Created { uid } => Some(format!("{}{}", REPORT_VIEW_URL, uid)),
            ReportOutcome::Rejected { .. } => None,
        }
    }
}
