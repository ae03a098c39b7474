//! Data transfer objects for web requests and responses.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::{EnrichedRoute, Stop};
use crate::search::SearchState;

/// Placeholder shown for any optional field the backend did not supply.
pub const NOT_AVAILABLE: &str = "Not available";

/// Query string for a route search.
#[derive(Debug, Deserialize)]
pub struct RouteSearchQuery {
    /// Stop to travel from
    pub start: Option<String>,

    /// Stop to travel to
    pub end: Option<String>,
}

/// A route ready for display.
#[derive(Debug, Serialize)]
pub struct RouteView {
    /// Route number (e.g. "12")
    pub route_number: String,

    /// Every stop from start to end, in order
    pub stops: Vec<String>,

    /// Fare with two decimals
    pub fare: String,

    pub first_bus_weekday: String,
    pub last_bus_weekday: String,
    pub first_bus_sunday: String,
    pub last_bus_sunday: String,
    pub frequency_weekday: String,
    pub frequency_sunday: String,
}

fn time_or_placeholder(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn frequency_or_placeholder(mins: Option<u32>) -> String {
    mins.map(|m| format!("every {m} min"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl RouteView {
    pub fn from_route(route: &EnrichedRoute) -> Self {
        let schedule = &route.route.schedule;

        Self {
            route_number: route.route_number().to_string(),
            stops: route
                .route
                .sub_path
                .iter()
                .map(Stop::to_string)
                .collect(),
            fare: route
                .fare
                .map(|f| f.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            first_bus_weekday: time_or_placeholder(schedule.first_bus_time_weekday),
            last_bus_weekday: time_or_placeholder(schedule.last_bus_time_weekday),
            first_bus_sunday: time_or_placeholder(schedule.first_bus_time_sunday),
            last_bus_sunday: time_or_placeholder(schedule.last_bus_time_sunday),
            frequency_weekday: frequency_or_placeholder(schedule.frequency_weekday),
            frequency_sunday: frequency_or_placeholder(schedule.frequency_sunday),
        }
    }
}

/// Response for a route search.
///
/// Exactly one of `routes` (possibly empty) and `error` is meaningful.
#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    pub start: String,
    pub end: String,
    pub routes: Vec<RouteView>,
    pub error: Option<String>,
}

impl From<&SearchState> for RouteSearchResponse {
    fn from(state: &SearchState) -> Self {
        Self {
            start: state.start.clone(),
            end: state.end.clone(),
            routes: state.results.iter().map(RouteView::from_route).collect(),
            error: state.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fare, RouteCandidate, RouteNumber, Schedule};

    fn route(fare: Option<f64>, schedule: Schedule) -> EnrichedRoute {
        let mut candidate = RouteCandidate::new(
            RouteNumber::new("12"),
            vec![
                Stop::parse("A").unwrap(),
                Stop::parse("B").unwrap(),
                Stop::parse("D").unwrap(),
            ],
        );
        candidate.schedule = schedule;
        EnrichedRoute::new(candidate, fare.and_then(Fare::new))
    }

    #[test]
    fn placeholders_for_missing_fields() {
        let view = RouteView::from_route(&route(None, Schedule::default()));

        assert_eq!(view.route_number, "12");
        assert_eq!(view.stops, vec!["A", "B", "D"]);
        assert_eq!(view.fare, NOT_AVAILABLE);
        assert_eq!(view.first_bus_weekday, NOT_AVAILABLE);
        assert_eq!(view.last_bus_weekday, NOT_AVAILABLE);
        assert_eq!(view.first_bus_sunday, NOT_AVAILABLE);
        assert_eq!(view.last_bus_sunday, NOT_AVAILABLE);
        assert_eq!(view.frequency_weekday, NOT_AVAILABLE);
        assert_eq!(view.frequency_sunday, NOT_AVAILABLE);
    }

    #[test]
    fn populated_fields() {
        let schedule = Schedule {
            first_bus_time_weekday: NaiveTime::from_hms_opt(5, 30, 0),
            last_bus_time_weekday: NaiveTime::from_hms_opt(23, 45, 0),
            frequency_weekday: Some(12),
            ..Schedule::default()
        };
        let view = RouteView::from_route(&route(Some(15.0), schedule));

        assert_eq!(view.fare, "15.00");
        assert_eq!(view.first_bus_weekday, "05:30");
        assert_eq!(view.last_bus_weekday, "23:45");
        assert_eq!(view.frequency_weekday, "every 12 min");
        assert_eq!(view.first_bus_sunday, NOT_AVAILABLE);
    }

    #[test]
    fn response_from_state() {
        let routes = vec![route(Some(10.0), Schedule::default())];
        let state = SearchState::new("A", "D").apply(Ok(routes));
        let response = RouteSearchResponse::from(&state);

        assert_eq!(response.start, "A");
        assert_eq!(response.end, "D");
        assert_eq!(response.routes.len(), 1);
        assert!(response.error.is_none());
    }
}
