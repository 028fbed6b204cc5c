//! Weighted scoring and match-tier classification.

use super::interests;
use super::Recommendation;
use crate::event::Event;
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};

/// Relative weight of each scoring factor, in evaluation order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Weights {
    pub interest: f64,
    pub availability: f64,
    pub distance: f64,
    pub group_size: f64,
    pub activity_level: f64,
}

impl Weights {
    pub(crate) fn sum(&self) -> f64 {
        self.interest + self.availability + self.distance + self.group_size + self.activity_level
    }
}

pub(crate) const WEIGHTS: Weights = Weights {
    interest: 40.0,
    availability: 30.0,
    distance: 15.0,
    group_size: 10.0,
    activity_level: 5.0,
};

/// Candidates scoring below this are dropped from the result entirely, not
/// reported as rejected.
pub(crate) const MIN_SCORE: f64 = 40.0;

/// Categorical match quality derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Perfect,
    Great,
    Good,
}

impl MatchTier {
    /// Tier and confidence for a raw score: 80 and up is a perfect match
    /// with confidence capped at 95, 60 and up a great match capped at 85,
    /// anything else good with confidence equal to the score.
    pub fn classify(score: f64) -> (Self, f64) {
        if score >= 80.0 {
            (Self::Perfect, score.min(95.0))
        } else if score >= 60.0 {
            (Self::Great, score.min(85.0))
        } else {
            (Self::Good, score)
        }
    }
}

/// Score one candidate that survived the distance and availability gates.
///
/// The availability weight is a fixed addend here: every candidate reaching
/// this point already passed the availability gate, so the term is constant
/// for survivors. That mirrors the shipped product behavior and must not be
/// rebalanced into a proportional term.
///
/// Returns `None` when the combined score falls below [`MIN_SCORE`].
pub(crate) fn score_candidate(
    user: &UserProfile,
    event: &Event,
    distance: f64,
    radius: f64,
) -> Option<Recommendation> {
    let interest_pct = interests::interest_match_pct(&user.interests, &event.tags);
    let group_size_match = user.group_size == Some(event.group_size);
    let activity_level_match = user.activity_level == Some(event.activity_level);

    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Reasons accumulate in factor evaluation order; callers rely on it.
    score += interest_pct / 100.0 * WEIGHTS.interest;
    if interest_pct > 50.0 {
        reasons.push(format!("{}% interest match", interest_pct.round() as u32));
    }

    score += WEIGHTS.availability;
    reasons.push("Available at this time".to_string());

    score += ((radius - distance) / radius).max(0.0) * WEIGHTS.distance;
    if distance < 1.0 {
        reasons.push("Very close to you".to_string());
    } else if distance < 2.0 {
        reasons.push("Close to your area".to_string());
    }

    if group_size_match {
        score += WEIGHTS.group_size;
        reasons.push("Perfect group size for you".to_string());
    }

    if activity_level_match {
        score += WEIGHTS.activity_level;
        reasons.push("Matches your activity level".to_string());
    }

    if score < MIN_SCORE {
        return None;
    }

    let (tier, confidence) = MatchTier::classify(score);
    Some(Recommendation {
        event: event.clone(),
        score: score.round() as u32,
        reasons,
        tier,
        confidence: confidence.round() as u32,
    })
}
