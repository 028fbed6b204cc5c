//! Availability checking: event weekday plus start-time daypart membership.

use crate::event::ClockTime;
use crate::profile::{Availability, Daypart};
use chrono::{Datelike, NaiveDate, Weekday};

/// Long English weekday name, the key vocabulary of [`Availability`].
pub(crate) const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// True iff the user's declared slots for the event's weekday contain the
/// event's start-time bucket. A multi-hour event spanning several dayparts is
/// only checked against its start bucket.
pub(crate) fn availability_match(
    availability: &Availability,
    date: NaiveDate,
    time: ClockTime,
) -> bool {
    let day = weekday_name(date.weekday());
    availability.allows(day, Daypart::from_hour(time.hour()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn monday_mornings() -> Availability {
        Availability::new().with("Monday", [Daypart::Morning])
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn matches_declared_weekday_and_daypart() {
        // 2024-01-22 is a Monday.
        check!(availability_match(&monday_mornings(), date("2024-01-22"), time("09:00")));
    }

    #[rstest]
    #[case("2024-01-22", "14:00")] // right day, afternoon instead of morning
    #[case("2024-01-22", "20:00")] // right day, evening
    #[case("2024-01-23", "09:00")] // Tuesday morning
    fn rejects_outside_declared_slots(#[case] day: &str, #[case] start: &str) {
        check!(!availability_match(&monday_mornings(), date(day), time(start)));
    }

    #[test]
    fn empty_availability_allows_nothing() {
        check!(!availability_match(&Availability::new(), date("2024-01-22"), time("09:00")));
    }

    #[rstest]
    #[case("2024-01-20", "Saturday")]
    #[case("2024-01-21", "Sunday")]
    #[case("2024-01-26", "Friday")]
    fn weekday_names_are_long_english(#[case] day: &str, #[case] expected: &str) {
        check!(weekday_name(date(day).weekday()) == expected);
    }
}
