//! Wire types for the route backend.

use serde::Deserialize;

use crate::domain::Fare;

/// Message used when a failed response carries no reason of its own.
pub const GENERIC_FAILURE: &str = "Search failed";

/// Body of a failed backend response.
///
/// The backend reports problems as either `{"error": ..}` or
/// `{"message": ..}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FailureBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FailureBody {
    /// Pick the most specific non-empty reason.
    pub(crate) fn into_message(self) -> String {
        self.error
            .filter(|s| !s.is_empty())
            .or(self.message.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }
}

/// Extract the reason from a failed response body.
///
/// Bodies that are not a JSON object yield the generic message.
pub(crate) fn failure_message(body: &str) -> String {
    serde_json::from_str::<FailureBody>(body)
        .unwrap_or_default()
        .into_message()
}

/// Body of a fare lookup response.
#[derive(Debug, Deserialize)]
pub(crate) struct FareBody {
    #[serde(default)]
    pub fare: Option<serde_json::Value>,
}

impl FareBody {
    /// The fare, if present and a valid amount.
    pub(crate) fn fare(&self) -> Option<Fare> {
        self.fare.as_ref().and_then(Fare::from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_preferred() {
        let body = r#"{"error": "no path found", "message": "ignored"}"#;
        assert_eq!(failure_message(body), "no path found");
    }

    #[test]
    fn message_field_fallback() {
        let body = r#"{"message": "No matching route found."}"#;
        assert_eq!(failure_message(body), "No matching route found.");
    }

    #[test]
    fn empty_error_falls_through() {
        let body = r#"{"error": "", "message": "try again"}"#;
        assert_eq!(failure_message(body), "try again");
    }

    #[test]
    fn generic_message_otherwise() {
        assert_eq!(failure_message("{}"), GENERIC_FAILURE);
        assert_eq!(failure_message(""), GENERIC_FAILURE);
        assert_eq!(failure_message("<html>502 Bad Gateway</html>"), GENERIC_FAILURE);
        assert_eq!(failure_message(r#"{"error": 42}"#), GENERIC_FAILURE);
    }

    #[test]
    fn fare_body() {
        let body: FareBody = serde_json::from_str(r#"{"fare": 15}"#).unwrap();
        assert_eq!(body.fare(), Fare::new(15.0));

        let body: FareBody = serde_json::from_str(r#"{"fare": null}"#).unwrap();
        assert_eq!(body.fare(), None);

        let body: FareBody = serde_json::from_str(r#"{"route_number": "12"}"#).unwrap();
        assert_eq!(body.fare(), None);

        let body: FareBody = serde_json::from_str(r#"{"fare": "fifteen"}"#).unwrap();
        assert_eq!(body.fare(), None);
    }
}
