//! Flightnet library entry points.
//!
//! This crate models a flight network in memory (airports as nodes, routes as
//! directed weighted edges), finds cheapest or shortest paths over it, and
//! captures the whole network into snapshots that can be written to disk.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod geo;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod snapshot;
pub mod storage;

pub use error::{Error, Result};
pub use geo::{flight_duration_hours, great_circle_distance_km, CRUISE_SPEED_KMH, EARTH_RADIUS_KM};
pub use network::{Airport, AirportCode, FlightNetwork, Route};
pub use output::{RouteEndpoint, RouteLeg, RouteRenderMode, RouteSummary};
pub use path::{find_path, PathMetric, PathTotals};
pub use routing::{plan_route, resolve_airport, RoutePlan, RouteRequest};
pub use snapshot::{
    load_network, load_or_empty, save_network, AirportRecord, NetworkSnapshot, RouteRecord,
    SnapshotFormat,
};
pub use storage::{default_network_path, resolve_network_path, NETWORK_PATH_ENV};
