//! User profile model: the preferences the scorer matches events against.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Fallback travel radius in miles when a profile has none configured.
pub const DEFAULT_RADIUS_MILES: f64 = 2.0;

/// A member profile, as supplied by the (external) profile source.
///
/// The matching core only reads these fields; it never writes a profile back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub neighborhood: String,
    /// Maximum travel distance in miles. `None` falls back to
    /// [`DEFAULT_RADIUS_MILES`].
    #[serde(default, rename = "radius")]
    pub radius_miles: Option<f64>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub group_size: Option<GroupSize>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
}

impl UserProfile {
    /// The radius actually used for filtering: the configured value when it
    /// is a positive finite number, the default otherwise.
    pub fn effective_radius(&self) -> f64 {
        match self.radius_miles {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => DEFAULT_RADIUS_MILES,
        }
    }
}

/// Declared availability, keyed by long weekday name ("Monday" .. "Sunday").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(HashMap<String, HashSet<Daypart>>);

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert: `Availability::new().with("Monday", [Daypart::Morning])`.
    #[must_use]
    pub fn with(mut self, weekday: impl Into<String>, slots: impl IntoIterator<Item = Daypart>) -> Self {
        self.0
            .entry(weekday.into())
            .or_default()
            .extend(slots);
        self
    }

    /// True iff the declared slots for `weekday` contain `slot`. Days with no
    /// entry allow nothing.
    pub fn allows(&self, weekday: &str, slot: Daypart) -> bool {
        self.0.get(weekday).is_some_and(|slots| slots.contains(&slot))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Coarse time-of-day bucket an event start time falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Daypart {
    Morning,
    Afternoon,
    Evening,
}

impl Daypart {
    /// Bucket a start hour: before noon is `Morning`, noon through 16 is
    /// `Afternoon`, 17 onward is `Evening`.
    pub const fn from_hour(hour: u8) -> Self {
        if hour < 12 {
            Self::Morning
        } else if hour < 17 {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }
}

/// Preferred gathering size, shared vocabulary between profiles and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSize {
    Small,
    Medium,
    Large,
}

/// How physically involved an event is, shared vocabulary with profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}
