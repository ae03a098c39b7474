//! Bus stop identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a stop identifier is missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing input")]
pub struct MissingStop;

/// A named bus stop.
///
/// Stop names are opaque and case-sensitive: `"Andheri"` and `"andheri"`
/// are different stops as far as this crate is concerned. The only
/// guarantee a `Stop` carries is that it is not empty. Surrounding
/// whitespace is preserved and passed to the backend untouched.
///
/// # Examples
///
/// ```
/// use navibus_client::domain::Stop;
///
/// let stop = Stop::parse("Dadar").unwrap();
/// assert_eq!(stop.as_str(), "Dadar");
///
/// assert!(Stop::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Stop(String);

impl Stop {
    /// Parse a stop from user input.
    pub fn parse(s: &str) -> Result<Self, MissingStop> {
        if s.is_empty() {
            return Err(MissingStop);
        }
        Ok(Stop(s.to_string()))
    }

    /// Parse a stop from optional user input, treating `None` as missing.
    pub fn parse_opt(s: Option<&str>) -> Result<Self, MissingStop> {
        s.map_or(Err(MissingStop), Self::parse)
    }

    /// Returns the stop name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Stop {
    type Error = MissingStop;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(MissingStop);
        }
        Ok(Stop(s))
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({})", self.0)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
