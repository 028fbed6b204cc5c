//! Fuzzy interest overlap between profile interests and event tags.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that are neither word characters nor whitespace, stripped
/// before matching so emoji-prefixed tags still match plain interests.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern"));

fn normalize(raw: &str) -> String {
    NON_WORD.replace_all(&raw.to_lowercase(), "").into_owned()
}

/// Percentage (0-100) of the user's interests found among the event's tags.
///
/// An interest counts when its normalized form appears as a substring of at
/// least one normalized tag. The denominator is the user's interest count
/// only; tags matched by no interest never lower the score. An empty
/// interest set scores zero.
pub(crate) fn interest_match_pct(interests: &[String], tags: &[String]) -> f64 {
    if interests.is_empty() {
        return 0.0;
    }

    let tags: Vec<String> = tags.iter().map(|tag| normalize(tag)).collect();
    let matched = interests
        .iter()
        .filter(|interest| {
            let needle = normalize(interest);
            tags.iter().any(|tag| tag.contains(&needle))
        })
        .count();

    matched as f64 / interests.len() as f64 * 100.0
}
