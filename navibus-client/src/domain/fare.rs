//! Fare amounts.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A known fare for a route between two stops.
///
/// Always finite and non-negative, so fares are totally ordered.
#[derive(Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Fare(f64);

impl Fare {
    /// Create a fare from a raw amount.
    ///
    /// Returns `None` for negative, NaN or infinite amounts.
    pub fn new(amount: f64) -> Option<Self> {
        if amount.is_finite() && amount >= 0.0 {
            // Fold -0.0 so that total_cmp agrees with ==
            Some(Fare(if amount == 0.0 { 0.0 } else { amount }))
        } else {
            None
        }
    }

    /// Extract a fare from a JSON value.
    ///
    /// Anything other than a valid number yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_f64().and_then(Self::new)
    }
}

impl Eq for Fare {}

impl PartialOrd for Fare {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fare {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Debug for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fare({})", self.0)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_non_negative() {
        assert_eq!(Fare::new(0.0).unwrap().to_string(), "0.00");
        assert_eq!(Fare::new(15.0).unwrap().to_string(), "15.00");
        assert_eq!(Fare::new(12.5).unwrap().to_string(), "12.50");
    }

    #[test]
    fn rejects_invalid_amounts() {
        assert!(Fare::new(-1.0).is_none());
        assert!(Fare::new(f64::NAN).is_none());
        assert!(Fare::new(f64::INFINITY).is_none());
    }

    #[test]
    fn from_json_values() {
        assert_eq!(Fare::from_json(&json!(10)), Fare::new(10.0));
        assert_eq!(Fare::from_json(&json!(7.5)), Fare::new(7.5));
        assert!(Fare::from_json(&json!("10")).is_none());
        assert!(Fare::from_json(&json!(null)).is_none());
        assert!(Fare::from_json(&json!(-3)).is_none());
        assert!(Fare::from_json(&json!({"amount": 10})).is_none());
    }

    #[test]
    fn ordering() {
        let cheap = Fare::new(5.0).unwrap();
        let dear = Fare::new(20.0).unwrap();
        assert!(cheap < dear);
        assert_eq!(cheap.cmp(&cheap), Ordering::Equal);
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Fare::new(15.0).unwrap().to_string(), "15.00");
        assert_eq!(Fare::new(7.5).unwrap().to_string(), "7.50");
    }
}
