pub mod error;
pub mod event;
pub mod gazetteer;
pub mod geo;
pub mod invitation;
pub mod matching;
pub mod profile;
pub mod tracing;

pub use error::ParseError;
pub use event::{ClockTime, Event};
pub use gazetteer::{CoordinateLookup, Neighborhood, NycGazetteer};
pub use geo::Point;
pub use invitation::{InvitationStatus, PersonalizedInvitation, create_invitations};
pub use matching::{MatchTier, Recommendation, daily_recommendations, recommend};
pub use profile::{ActivityLevel, Availability, Daypart, GroupSize, UserProfile};
