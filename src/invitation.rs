//! Personalized invitation generation from scored recommendations.

use crate::event::Event;
use crate::gazetteer::CoordinateLookup;
use crate::matching::{self, MatchTier, Recommendation};
use crate::profile::UserProfile;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invitations are only generated for this many top recommendations.
pub const MAX_INVITATIONS: usize = 5;

/// Invitation lifecycle. The matcher only ever creates `Pending`; accepting
/// and declining belong to the embedding UI. `Expired` is part of the data
/// model but nothing transitions into it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
    Expired,
}

/// An invitation to one event, wrapping the recommendation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedInvitation {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub message: String,
    pub score: u32,
    pub reasons: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub status: InvitationStatus,
}

impl PersonalizedInvitation {
    fn new<R: Rng>(user: &UserProfile, recommendation: &Recommendation, rng: &mut R) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: recommendation.event.id.clone(),
            user_id: user.id.clone(),
            message: invitation_message(recommendation, user, rng),
            score: recommendation.score,
            reasons: recommendation.reasons.clone(),
            created_at: Utc::now(),
            status: InvitationStatus::Pending,
        }
    }

    /// UI action: accept a pending invitation. Returns whether it applied.
    pub fn accept(&mut self) -> bool {
        self.transition(InvitationStatus::Accepted)
    }

    /// UI action: decline a pending invitation. Returns whether it applied.
    pub fn decline(&mut self) -> bool {
        self.transition(InvitationStatus::Declined)
    }

    fn transition(&mut self, to: InvitationStatus) -> bool {
        if self.status == InvitationStatus::Pending {
            self.status = to;
            true
        } else {
            false
        }
    }
}

/// Build invitations for the user's top recommendations, best score first.
///
/// All of the empty-input conditions of [`matching::recommend`] (no active
/// events, unresolvable neighborhood, nothing clearing the score floor)
/// produce an empty list here as well.
pub fn create_invitations<R: Rng>(
    user: &UserProfile,
    events: &[Event],
    lookup: &impl CoordinateLookup,
    rng: &mut R,
) -> Vec<PersonalizedInvitation> {
    matching::recommend(user, events, lookup)
        .into_iter()
        .take(MAX_INVITATIONS)
        .map(|recommendation| PersonalizedInvitation::new(user, &recommendation, rng))
        .collect()
}

/// Render one invitation message for a recommendation.
///
/// Each tier has three canned templates interpolating the user's name, the
/// event title, and the top one or two reasons. The choice among them is
/// uniform over the injected `rng`, so message text varies between calls by
/// design; tests should seed the rng or assert membership in the template
/// set, never equality against a single expected string.
pub fn invitation_message<R: Rng>(
    recommendation: &Recommendation,
    user: &UserProfile,
    rng: &mut R,
) -> String {
    let name = &user.name;
    let title = &recommendation.event.title;
    let reasons = &recommendation.reasons;

    let lead = reasons.first().map(String::as_str);
    let top_two = reasons
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" and ");

    let mut templates = match recommendation.tier {
        MatchTier::Perfect => {
            let lead = lead.unwrap_or_default();
            vec![
                format!(
                    "Hi {}! 🌟 We found the perfect event for you: \"{}\". {} and it's exactly what you're looking for!",
                    name, title, lead
                ),
                format!(
                    "{}, this looks like it was made for you! \"{}\" - {}.",
                    name, title, top_two
                ),
                format!(
                    "Hey {}! ✨ \"{}\" is happening near you and we think you'll love it. {}!",
                    name, title, lead
                ),
            ]
        }
        MatchTier::Great => {
            let lead = lead.unwrap_or_default();
            let second = reasons
                .get(1)
                .map_or("it looks like a great fit", String::as_str);
            vec![
                format!(
                    "Hi {}! We think you'd really enjoy \"{}\". {} and {}.",
                    name, title, lead, second
                ),
                format!(
                    "{}, check out \"{}\" - {} and it's in your area!",
                    name, title, lead
                ),
                format!(
                    "Hey {}! \"{}\" caught our attention for you. {}.",
                    name, title, top_two
                ),
            ]
        }
        MatchTier::Good => vec![
            format!(
                "Hi {}, \"{}\" might interest you. {}.",
                name,
                title,
                lead.unwrap_or("It matches some of your preferences")
            ),
            format!(
                "{}, we found \"{}\" in your area. {}!",
                name,
                title,
                lead.unwrap_or("Thought you might like it")
            ),
            format!(
                "Hey {}, \"{}\" is happening nearby. {}!",
                name,
                title,
                lead.unwrap_or("Worth checking out")
            ),
        ],
    };

    let pick = rng.gen_range(0..templates.len());
    templates.swap_remove(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn pending() -> PersonalizedInvitation {
        PersonalizedInvitation {
            id: "inv_1".to_string(),
            event_id: "evt_1".to_string(),
            user_id: "user_1".to_string(),
            message: "Hi!".to_string(),
            score: 72,
            reasons: vec!["Available at this time".to_string()],
            created_at: Utc::now(),
            status: InvitationStatus::Pending,
        }
    }

    #[test]
    fn pending_can_be_accepted() {
        let mut invitation = pending();
        check!(invitation.accept());
        check!(invitation.status == InvitationStatus::Accepted);
    }

    #[test]
    fn pending_can_be_declined() {
        let mut invitation = pending();
        check!(invitation.decline());
        check!(invitation.status == InvitationStatus::Declined);
    }

    #[test]
    fn accepted_cannot_be_declined_afterwards() {
        let mut invitation = pending();
        invitation.accept();
        check!(!invitation.decline());
        check!(invitation.status == InvitationStatus::Accepted);
    }

    #[test]
    fn status_serializes_lowercase() {
        check!(serde_json::to_string(&InvitationStatus::Pending).unwrap() == "\"pending\"");
        check!(serde_json::to_string(&InvitationStatus::Expired).unwrap() == "\"expired\"");
    }
}
