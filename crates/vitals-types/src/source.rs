use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of known data providers.
///
/// Adding a provider means adding a variant here plus its metric bag in
/// `metrics.rs` and its slot on `DailyRecord`; the merge engine itself is
/// generic over metric bags and stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Oura,
    Cronometer,
    Strava,
    Garmin,
    Manual,
}

impl Source {
    /// All known sources, in the column order used by tabular exports.
    pub const ALL: [Source; 5] = [
        Source::Oura,
        Source::Cronometer,
        Source::Strava,
        Source::Garmin,
        Source::Manual,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Source::Oura => "oura",
            Source::Cronometer => "cronometer",
            Source::Strava => "strava",
            Source::Garmin => "garmin",
            Source::Manual => "manual",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "oura" => Ok(Source::Oura),
            "cronometer" => Ok(Source::Cronometer),
            "strava" => Ok(Source::Strava),
            "garmin" => Ok(Source::Garmin),
            "manual" => Ok(Source::Manual),
            other => Err(Error::UnknownSource(other.to_string())),
        }
    }
}
