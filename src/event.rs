//! Event model as supplied by the (external) event source.

use crate::error::ParseError;
use crate::geo::Point;
use crate::profile::{ActivityLevel, GroupSize};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A listed event. Immutable input to the matcher; derived records reference
/// events by id or carry a clone, never a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub time: ClockTime,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    pub capacity: u32,
    pub attendees: u32,
    pub is_active: bool,
    pub group_size: GroupSize,
    pub activity_level: ActivityLevel,
}

impl Event {
    /// Only active events with real attendees are matchable.
    pub const fn is_matchable(&self) -> bool {
        self.is_active && self.attendees > 0
    }

    /// `Some` only when both coordinates are present. Events without a
    /// position are skipped by the matcher, not reported.
    pub fn coordinates(&self) -> Option<Point> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Point::new(lat, lng)),
            _ => None,
        }
    }
}

/// Local start time of day, `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8) -> Result<Self, ParseError> {
        if hour > 23 || minute > 59 {
            return Err(ParseError::ClockTimeRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((h, m)) = s.split_once(':') else {
            return Err(ParseError::ClockTime(s.to_string()));
        };
        let hour = h.parse().map_err(|_| ParseError::ClockTime(s.to_string()))?;
        let minute = m.parse().map_err(|_| ParseError::ClockTime(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
