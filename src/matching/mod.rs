//! Candidate filtering and recommendation generation.
//!
//! A pure, synchronous pipeline: it takes a profile and an event snapshot,
//! applies the hard gates (active, within radius, available), scores the
//! survivors, and returns them ordered by score. Data gaps degrade to an
//! empty list, never an error.

pub(crate) mod availability;
pub(crate) mod interests;
mod scoring;

pub use scoring::MatchTier;

use crate::event::Event;
use crate::gazetteer::CoordinateLookup;
use crate::geo::haversine_miles;
use crate::profile::UserProfile;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A scored, explained match between a user and one event.
///
/// Recomputed fresh on every invocation; never cached or persisted by the
/// matcher itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub event: Event,
    /// Combined weighted score, rounded to 0-100.
    pub score: u32,
    /// Human-readable clauses for the factors that passed their thresholds,
    /// in fixed evaluation order.
    pub reasons: Vec<String>,
    #[serde(rename = "matchType")]
    pub tier: MatchTier,
    /// Score clamped to a tier-specific ceiling, rounded.
    pub confidence: u32,
}

/// Generate recommendations for `user` over an event snapshot.
///
/// Fail-soft conditions, both returning an empty list:
/// - no event in the pool is active with real attendees;
/// - the user's neighborhood cannot be resolved (warn-logged).
///
/// Events without coordinates are skipped silently. Survivors are scored and
/// returned sorted by score descending; the sort is stable, so ties keep
/// their input order.
pub fn recommend(
    user: &UserProfile,
    events: &[Event],
    lookup: &impl CoordinateLookup,
) -> Vec<Recommendation> {
    let active: Vec<&Event> = events.iter().filter(|e| e.is_matchable()).collect();
    if active.is_empty() {
        return Vec::new();
    }

    let Some(origin) = lookup.coordinates(&user.neighborhood) else {
        warn!(
            neighborhood = %user.neighborhood,
            "coordinates not found for neighborhood"
        );
        return Vec::new();
    };

    let radius = user.effective_radius();
    let mut recommendations = Vec::new();

    for event in active {
        let Some(position) = event.coordinates() else {
            continue;
        };

        let distance = haversine_miles(origin, position);
        if distance > radius {
            debug!(event = %event.id, distance, radius, "outside travel radius");
            continue;
        }

        if !availability::availability_match(&user.availability, event.date, event.time) {
            debug!(event = %event.id, "outside declared availability");
            continue;
        }

        if let Some(recommendation) = scoring::score_candidate(user, event, distance, radius) {
            recommendations.push(recommendation);
        }
    }

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations
}

/// Recommendations for the coming week: events dated within seven days of
/// `today`, top three by score.
///
/// `today` is an explicit parameter so the caller owns the clock; the
/// matcher never reads ambient time.
pub fn daily_recommendations(
    user: &UserProfile,
    events: &[Event],
    lookup: &impl CoordinateLookup,
    today: NaiveDate,
) -> Vec<Recommendation> {
    let horizon = today + Days::new(7);
    recommend(user, events, lookup)
        .into_iter()
        .filter(|rec| rec.event.date >= today && rec.event.date <= horizon)
        .take(3)
        .collect()
}
