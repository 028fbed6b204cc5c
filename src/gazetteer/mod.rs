//! Neighborhood gazetteer and the coordinate-lookup seam.
//!
//! The matching pipeline only depends on [`CoordinateLookup`]; the bundled
//! [`NycGazetteer`] is the static implementation the application ships,
//! covering all five boroughs.

mod data;

use crate::geo::Point;
use ahash::AHashMap;
use std::sync::LazyLock;

/// Resolves a neighborhood name to coordinates, or "not found".
///
/// Failing to resolve is not an error: the pipeline degrades to an empty
/// recommendation list when the user's neighborhood is unknown.
pub trait CoordinateLookup {
    fn coordinates(&self, name: &str) -> Option<Point>;
}

/// A named neighborhood with its borough and center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    pub name: &'static str,
    pub borough: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Neighborhood {
    pub const fn point(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}

/// Name index over the static table. Duplicate names across boroughs keep the
/// first entry (e.g. "Chelsea" resolves to Manhattan, not Staten Island).
static BY_NAME: LazyLock<AHashMap<&'static str, Point>> = LazyLock::new(|| {
    let mut index = AHashMap::with_capacity(data::NEIGHBORHOODS.len());
    for n in data::NEIGHBORHOODS {
        index.entry(n.name).or_insert_with(|| n.point());
    }
    index
});

/// The built-in NYC neighborhood gazetteer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NycGazetteer;

impl NycGazetteer {
    /// All known neighborhoods, grouped by borough in table order.
    pub fn all() -> &'static [Neighborhood] {
        data::NEIGHBORHOODS
    }

    /// Neighborhoods belonging to the given borough (exact name).
    pub fn in_borough(borough: &str) -> impl Iterator<Item = &'static Neighborhood> {
        data::NEIGHBORHOODS
            .iter()
            .filter(move |n| n.borough == borough)
    }

    /// Distinct borough names in table order.
    pub fn boroughs() -> Vec<&'static str> {
        let mut seen = Vec::new();
        for n in data::NEIGHBORHOODS {
            if !seen.contains(&n.borough) {
                seen.push(n.borough);
            }
        }
        seen
    }

    /// Case-insensitive substring search over neighborhood and borough names.
    pub fn search(query: &str) -> Vec<&'static Neighborhood> {
        let query = query.to_lowercase();
        data::NEIGHBORHOODS
            .iter()
            .filter(|n| {
                n.name.to_lowercase().contains(&query)
                    || n.borough.to_lowercase().contains(&query)
            })
            .collect()
    }
}

impl CoordinateLookup for NycGazetteer {
    fn coordinates(&self, name: &str) -> Option<Point> {
        BY_NAME.get(name).copied()
    }
}

impl<T: CoordinateLookup + ?Sized> CoordinateLookup for &T {
    fn coordinates(&self, name: &str) -> Option<Point> {
        (**self).coordinates(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn resolves_known_neighborhood() {
        let coords = NycGazetteer.coordinates("Brooklyn Heights");
        check!(coords == Some(Point::new(40.6955, -73.9937)));
    }

    #[test]
    fn unknown_neighborhood_is_none() {
        check!(NycGazetteer.coordinates("Hoboken").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first_entry() {
        // Chelsea exists in both Manhattan and Staten Island.
        let coords = NycGazetteer.coordinates("Chelsea");
        check!(coords == Some(Point::new(40.7465, -73.9972)));
    }

    #[test]
    fn five_boroughs() {
        let boroughs = NycGazetteer::boroughs();
        check!(
            boroughs == ["Manhattan", "Brooklyn", "Queens", "Bronx", "Staten Island"]
        );
    }

    #[test]
    fn borough_filter_only_returns_that_borough() {
        let queens: Vec<_> = NycGazetteer::in_borough("Queens").collect();
        check!(!queens.is_empty());
        check!(queens.iter().all(|n| n.borough == "Queens"));
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_borough() {
        let by_name = NycGazetteer::search("williamsburg");
        check!(by_name.iter().any(|n| n.name == "Williamsburg"));

        let by_borough = NycGazetteer::search("staten");
        check!(!by_borough.is_empty());
        check!(by_borough.iter().all(|n| n.borough == "Staten Island"));
    }
}
