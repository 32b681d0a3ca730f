//! Route planning on top of the raw path finder.
//!
//! [`find_path`] reports every failure as `None`. [`plan_route`] resolves the
//! requested airport codes first so callers can tell an unknown airport (with
//! "did you mean" suggestions) apart from an unreachable destination, and
//! attaches aggregate totals to the result.
//!
//! ```
//! use flightnet_lib::{plan_route, Airport, FlightNetwork, RouteRequest};
//!
//! let mut network = FlightNetwork::new();
//! network.add_airport(Airport::new("JFK", "John F. Kennedy", "USA", 40.64, -73.78));
//! network.add_airport(Airport::new("LHR", "Heathrow", "UK", 51.47, -0.45));
//! network.add_route("JFK", "LHR", 500.0);
//!
//! let plan = plan_route(&network, &RouteRequest::cheapest("JFK", "LHR")).unwrap();
//! assert_eq!(plan.hop_count(), 1);
//! assert_eq!(plan.totals.cost, 500.0);
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{AirportCode, FlightNetwork, Route};
use crate::path::{find_path, PathMetric, PathTotals};

/// Number of suggestions attached to unknown-airport errors.
const MAX_SUGGESTIONS: usize = 3;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub metric: PathMetric,
    pub direct_only: bool,
}

impl RouteRequest {
    /// Cheapest route by total cost.
    pub fn cheapest(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            metric: PathMetric::Cost,
            direct_only: false,
        }
    }

    /// Shortest route by total distance.
    pub fn shortest(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            metric: PathMetric::Distance,
            ..Self::cheapest(start, goal)
        }
    }

    /// Restrict the search to direct flights.
    pub fn direct_only(mut self, direct_only: bool) -> Self {
        self.direct_only = direct_only;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub metric: PathMetric,
    pub direct_only: bool,
    pub start: AirportCode,
    pub goal: AirportCode,
    pub legs: Vec<Route>,
    pub totals: PathTotals,
}

impl RoutePlan {
    /// Number of legs in the route.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }

    /// Airport codes visited in order, starting with the origin.
    pub fn stops(&self) -> Vec<&str> {
        let mut stops = Vec::with_capacity(self.legs.len() + 1);
        if let Some(first) = self.legs.first() {
            stops.push(first.from.as_str());
        }
        stops.extend(self.legs.iter().map(|leg| leg.to.as_str()));
        stops
    }
}

/// Resolve an airport code, returning an error with suggestions when unknown.
pub fn resolve_airport(network: &FlightNetwork, code: &str) -> Result<AirportCode> {
    match network.airport(code) {
        Some(airport) => Ok(airport.code.clone()),
        None => Err(Error::UnknownAirport {
            code: code.to_string(),
            suggestions: network.fuzzy_airport_matches(code, MAX_SUGGESTIONS),
        }),
    }
}

/// Compute a route using the requested metric and restriction.
pub fn plan_route(network: &FlightNetwork, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_airport(network, &request.start)?;
    let goal = resolve_airport(network, &request.goal)?;

    let Some(legs) = find_path(
        network,
        &start,
        &goal,
        request.metric,
        request.direct_only,
    ) else {
        return Err(Error::RouteNotFound { start, goal });
    };

    Ok(RoutePlan {
        metric: request.metric,
        direct_only: request.direct_only,
        totals: PathTotals::from_routes(&legs),
        start,
        goal,
        legs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Airport;

    fn network() -> FlightNetwork {
        let mut network = FlightNetwork::new();
        network.add_airport(Airport::new("JFK", "John F. Kennedy", "USA", 40.64, -73.78));
        network.add_airport(Airport::new("LHR", "Heathrow", "UK", 51.47, -0.45));
        network.add_airport(Airport::new("LAX", "Los Angeles", "USA", 33.94, -118.41));
        network.add_route("JFK", "LAX", 400.0);
        network.add_route("LAX", "LHR", 450.0);
        network
    }

    #[test]
    fn builders_set_metric_and_restriction() {
        let request = RouteRequest::shortest("JFK", "LHR").direct_only(true);
        assert_eq!(request.metric, PathMetric::Distance);
        assert!(request.direct_only);
        assert_eq!(RouteRequest::cheapest("A", "B").metric, PathMetric::Cost);
    }

    #[test]
    fn plan_lists_stops_and_totals() {
        let plan = plan_route(&network(), &RouteRequest::cheapest("JFK", "LHR")).unwrap();
        assert_eq!(plan.stops(), vec!["JFK", "LAX", "LHR"]);
        assert_eq!(plan.totals.cost, 850.0);
        assert_eq!(plan.totals.hops, plan.hop_count());
    }

    #[test]
    fn unknown_airport_is_reported_with_suggestions() {
        let err = plan_route(&network(), &RouteRequest::cheapest("JFX", "LHR")).unwrap_err();
        match err {
            Error::UnknownAirport { code, suggestions } => {
                assert_eq!(code, "JFX");
                assert!(suggestions.contains(&"JFK".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unreachable_goal_is_route_not_found() {
        let err = plan_route(
            &network(),
            &RouteRequest::cheapest("JFK", "LHR").direct_only(true),
        )
        .unwrap_err();
        assert!(matches!(err, Error::RouteNotFound { .. }));
        assert_eq!(err.to_string(), "no route found between JFK and LHR");
    }
}
