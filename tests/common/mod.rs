//! Shared fixtures for the matching pipeline tests.
//!
//! The baseline scenario: a coffee-loving user in Brooklyn Heights with
//! Monday-morning availability, and a Monday-morning coffee event at the
//! neighborhood center (distance zero), active with real attendees. Tests
//! perturb single fields off this baseline to probe one gate at a time.

use outthere_match::{
    ActivityLevel, Availability, Daypart, Event, GroupSize, UserProfile,
};

/// 2024-01-22 is a Monday.
pub const MONDAY: &str = "2024-01-22";

/// Brooklyn Heights center per the bundled gazetteer.
pub const BROOKLYN_HEIGHTS: (f64, f64) = (40.6955, -73.9937);

pub fn coffee_user() -> UserProfile {
    UserProfile {
        id: "user_1".to_string(),
        name: "Sam".to_string(),
        interests: vec!["coffee".to_string()],
        neighborhood: "Brooklyn Heights".to_string(),
        radius_miles: Some(2.0),
        availability: Availability::new().with("Monday", [Daypart::Morning]),
        group_size: Some(GroupSize::Small),
        activity_level: Some(ActivityLevel::Low),
    }
}

pub fn coffee_event(id: &str) -> Event {
    Event {
        id: id.to_string(),
        title: "Coffee & Conversation".to_string(),
        tags: vec!["☕ Coffee".to_string()],
        date: MONDAY.parse().unwrap(),
        time: "09:00".parse().unwrap(),
        lat: Some(BROOKLYN_HEIGHTS.0),
        lng: Some(BROOKLYN_HEIGHTS.1),
        capacity: 10,
        attendees: 1,
        is_active: true,
        group_size: GroupSize::Small,
        activity_level: ActivityLevel::Low,
    }
}

/// An event roughly `miles` north of Brooklyn Heights, all else baseline.
pub fn event_at_distance(id: &str, miles: f64) -> Event {
    // One degree of latitude is about 69 miles.
    let mut event = coffee_event(id);
    event.lat = Some(BROOKLYN_HEIGHTS.0 + miles / 69.0);
    event
}
