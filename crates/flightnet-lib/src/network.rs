use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::geo::{flight_duration_hours, great_circle_distance_km};

/// Case-sensitive airport code used as the primary key of the network.
pub type AirportCode = String;

/// Minimum Jaro-Winkler similarity for an airport to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Airport node with its geographic position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub code: AirportCode,
    pub name: String,
    pub country: String,
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        code: impl Into<AirportCode>,
        name: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            country: country.into(),
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometres to another airport.
    pub fn distance_to(&self, other: &Self) -> f64 {
        great_circle_distance_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.code, self.name, self.country)
    }
}

/// Directed edge between two airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub from: AirportCode,
    pub to: AirportCode,
    /// Ticket cost supplied by the caller.
    pub cost: f64,
    /// Great-circle distance in kilometres.
    pub distance: f64,
    /// Flight time in hours at cruise speed.
    pub duration: f64,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} | ${:.2} | {:.1} km | {:.1} h",
            self.from, self.to, self.cost, self.distance, self.duration
        )
    }
}

/// In-memory flight network: airports plus the outgoing routes of each one.
///
/// Every stored route lives in the adjacency list of its `from` airport, and
/// removing an airport drops all routes that start or end there. Adjacency
/// lists are never left empty, so equality only depends on airports and
/// routes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightNetwork {
    airports: HashMap<AirportCode, Airport>,
    routes: HashMap<AirportCode, Vec<Route>>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an airport. Returns `false` without touching the network when
    /// the code is already taken.
    pub fn add_airport(&mut self, airport: Airport) -> bool {
        if self.airports.contains_key(&airport.code) {
            debug!(code = %airport.code, "rejecting duplicate airport");
            return false;
        }
        debug!(code = %airport.code, "adding airport");
        self.airports.insert(airport.code.clone(), airport);
        true
    }

    /// Remove an airport together with its outgoing routes and every route
    /// that lands on it.
    pub fn remove_airport(&mut self, code: &str) -> bool {
        if self.airports.remove(code).is_none() {
            return false;
        }
        self.routes.remove(code);
        let mut inbound = 0usize;
        for list in self.routes.values_mut() {
            let before = list.len();
            list.retain(|route| route.to != code);
            inbound += before - list.len();
        }
        self.routes.retain(|_, list| !list.is_empty());
        debug!(code, inbound_removed = inbound, "removed airport");
        true
    }

    /// Append a route between two known airports, deriving distance and
    /// duration from their coordinates. Parallel routes are allowed.
    pub fn add_route(&mut self, from: &str, to: &str, cost: f64) -> bool {
        let (Some(origin), Some(destination)) = (self.airports.get(from), self.airports.get(to))
        else {
            return false;
        };

        let distance = origin.distance_to(destination);
        let route = Route {
            from: origin.code.clone(),
            to: destination.code.clone(),
            cost,
            distance,
            duration: flight_duration_hours(distance),
        };
        debug!(from, to, cost, distance, "adding route");
        self.routes.entry(route.from.clone()).or_default().push(route);
        true
    }

    /// Remove every route from `from` to `to`. Returns whether anything was
    /// removed; `false` when `from` has no outgoing routes.
    pub fn remove_route(&mut self, from: &str, to: &str) -> bool {
        let Some(list) = self.routes.get_mut(from) else {
            return false;
        };
        let before = list.len();
        list.retain(|route| route.to != to);
        let removed = before - list.len();
        if list.is_empty() {
            self.routes.remove(from);
        }
        debug!(from, to, removed, "removed routes");
        removed > 0
    }

    /// All airports, in no particular order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Lookup an airport by its case-sensitive code.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn contains_airport(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// Outgoing routes of `code`; empty for unknown codes.
    pub fn routes_from(&self, code: &str) -> &[Route] {
        self.routes.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every stored route, grouped by source airport.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values().flatten()
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Airport codes whose code or name resembles `query`, best match first.
    pub fn fuzzy_airport_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .values()
            .filter_map(|airport| {
                let by_code = strsim::jaro_winkler(&needle, &airport.code.to_lowercase());
                let by_name = strsim::jaro_winkler(&needle, &airport.name.to_lowercase());
                let score = by_code.max(by_name);
                (score >= FUZZY_MATCH_THRESHOLD).then_some((score, airport.code.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }

    /// Insert a route exactly as recorded, without recomputing derived fields.
    pub(crate) fn push_route_unchecked(&mut self, route: Route) {
        self.routes.entry(route.from.clone()).or_default().push(route);
    }

    /// Source codes that own an adjacency list, sorted.
    pub(crate) fn sorted_route_sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        sources.sort_unstable();
        sources
    }
}
