// Records served by the dashboard backend. All collections default to empty so the
// statistics code never has to deal with a missing array.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Write a JSON number the way the backend shows it: whole numbers without a
/// trailing `.0`.
fn fmt_number(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_finite() && value.fract() == 0. && value.abs() < i64::MAX as f64 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{}", value)
    }
}

/// Stint identifier. The backend stores stints as floats but older dumps use strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StintId {
    Number(f64),
    Text(String),
}

impl fmt::Display for StintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => fmt_number(*value, f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for StintId {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for StintId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One timed lap by one driver in one race.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LapRecord {
    /// Float like the other lap columns; whole-number laps arrive as `12.0`
    pub lap_number: Option<f64>,
    pub driver_code: Option<String>,
    pub team: Option<String>,
    pub stint: Option<StintId>,
    pub compound: Option<String>,
    /// Tyre age in laps at the start of this lap
    pub tyre_life: Option<f64>,
    /// Missing on pit in/out laps and laps deleted by race control
    pub lap_time_seconds: Option<f64>,
}

impl LapRecord {
    /// The lap time when it can take part in numeric aggregation.
    pub fn lap_time(&self) -> Option<f64> {
        self.lap_time_seconds.filter(|t| t.is_finite())
    }
}

/// Finishing position, either a number or the string the backend passed through.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Position {
    Number(f64),
    Text(String),
}

impl Position {
    /// Numeric value of the position. Strings are parsed; anything that does not
    /// yield a finite number counts as missing.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                text.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => fmt_number(*value, f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for Position {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RaceResult {
    pub position: Option<Position>,
    pub driver_code: Option<String>,
    pub driver_name: Option<String>,
    pub grid_position: Option<Position>,
    pub points: Option<f64>,
    pub status: Option<String>,
}

impl RaceResult {
    /// Retired, DNF and not-classified entries. Matching is a case-insensitive
    /// substring test so "Retired (Engine)" also counts.
    pub fn is_non_classified(&self) -> bool {
        let status = match &self.status {
            Some(status) => status.to_lowercase(),
            None => return false,
        };
        ["retired", "dnf", "not classified"]
            .iter()
            .any(|marker| status.contains(marker))
    }

    pub fn numeric_position(&self) -> Option<f64> {
        self.position.as_ref().and_then(Position::as_number)
    }

    /// Name shown in result tables, falling back to the driver code.
    pub fn display_name(&self) -> &str {
        self.driver_name
            .as_deref()
            .or(self.driver_code.as_deref())
            .unwrap_or("—")
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Race {
    pub id: i64,
    pub name: String,
    /// ISO date or datetime of the event
    pub date: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
}

impl Race {
    pub fn event_date(&self) -> Option<NaiveDate> {
        let date = self.date.as_deref()?.trim();
        NaiveDate::parse_from_str(date.get(..10)?, "%Y-%m-%d").ok()
    }

    pub fn venue(&self) -> &str {
        self.location
            .as_deref()
            .or(self.country.as_deref())
            .unwrap_or("Track TBD")
    }
}

/// Season totals for one driver. Reads both the short names and the ones in the
/// `stats` block of the driver stats endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DriverStanding {
    pub code: String,
    pub name: Option<String>,
    pub team: Option<String>,
    #[serde(alias = "total_points")]
    pub points: Option<f64>,
    #[serde(alias = "average_finish_position")]
    pub average_finish: Option<f64>,
    #[serde(alias = "races_entered")]
    pub races: Option<u32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LapsPayload {
    pub count: Option<usize>,
    pub laps: Vec<LapRecord>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsPayload {
    pub results: Vec<RaceResult>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RacesPayload {
    pub season: Option<i32>,
    pub count: Option<usize>,
    pub races: Vec<Race>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsPayload {
    pub drivers: Vec<DriverStanding>,
}
