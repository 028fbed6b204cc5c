//! Error handling types and utilities.

/// A specialized Result type for model-construction operations.
///
/// The matching pipeline itself is total: upstream data gaps degrade to an
/// empty result rather than an error. Parsing model fields out of their
/// string forms is the only fallible surface of the crate.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Error returned when parsing a model field fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Clock time was not of the form `HH:MM`.
    #[error("invalid clock time '{0}': expected HH:MM")]
    ClockTime(String),
    /// Clock time parsed but a component was out of range.
    #[error("clock time '{hour:02}:{minute:02}' out of range")]
    ClockTimeRange { hour: u8, minute: u8 },
}
