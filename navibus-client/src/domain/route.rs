//! Route candidates returned by the search backend.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Fare, Stop};

/// A route number as published by the operator (e.g. "12", "A-71").
///
/// The backend sends route numbers either as JSON strings or as bare
/// numbers. Both are held as text so they can be echoed back to the fare
/// endpoint unchanged.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRouteNumber")]
pub struct RouteNumber(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRouteNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawRouteNumber> for RouteNumber {
    fn from(raw: RawRouteNumber) -> Self {
        match raw {
            RawRouteNumber::Text(s) => RouteNumber(s),
            RawRouteNumber::Number(n) => RouteNumber(number_text(&n)),
        }
    }
}

/// Render a JSON number the way it is written on the bus: `12.0` is `12`.
fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64()
        && let Some(f) = n.as_f64()
        && f.fract() == 0.0
        && f.abs() < 1e15
    {
        format!("{f:.0}")
    } else {
        n.to_string()
    }
}

impl RouteNumber {
    pub fn new(s: impl Into<String>) -> Self {
        RouteNumber(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteNumber({})", self.0)
    }
}

impl fmt::Display for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional timetable summary for a route.
///
/// Every field may be missing. Values the backend sends in an unexpected
/// shape are dropped rather than failing the whole search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, deserialize_with = "lenient_time")]
    pub first_bus_time_weekday: Option<NaiveTime>,

    #[serde(default, deserialize_with = "lenient_time")]
    pub last_bus_time_weekday: Option<NaiveTime>,

    #[serde(default, deserialize_with = "lenient_time")]
    pub first_bus_time_sunday: Option<NaiveTime>,

    #[serde(default, deserialize_with = "lenient_time")]
    pub last_bus_time_sunday: Option<NaiveTime>,

    /// Average minutes between buses on weekdays.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub frequency_weekday: Option<u32>,

    /// Average minutes between buses on Sundays.
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub frequency_sunday: Option<u32>,
}

/// Parse a clock time in `HH:MM:SS` or `HH:MM` form.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

fn lenient_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_clock))
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok()))
}

/// One bus route connecting the searched stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub route_number: RouteNumber,

    /// Stops traversed from start to end, inclusive.
    pub sub_path: Vec<Stop>,

    #[serde(flatten)]
    pub schedule: Schedule,
}

impl RouteCandidate {
    /// Create a candidate with no schedule information.
    pub fn new(route_number: RouteNumber, sub_path: Vec<Stop>) -> Self {
        Self {
            route_number,
            sub_path,
            schedule: Schedule::default(),
        }
    }
}

/// A route candidate together with the result of its fare lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRoute {
    #[serde(flatten)]
    pub route: RouteCandidate,

    /// `None` when the fare lookup failed or returned nothing usable.
    pub fare: Option<Fare>,
}

impl EnrichedRoute {
    pub fn new(route: RouteCandidate, fare: Option<Fare>) -> Self {
        Self { route, fare }
    }

    pub fn route_number(&self) -> &RouteNumber {
        &self.route.route_number
    }
}
