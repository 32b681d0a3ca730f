//! Common test utilities and fixture helpers.
//!
//! Shared between the integration tests: the three-airport scenario network
//! and temporary directories for snapshot files.

use std::path::PathBuf;

use flightnet_lib::{load_network, Airport, FlightNetwork};
use tempfile::TempDir;

/// Path to the checked-in sample network snapshot.
#[allow(dead_code)]
pub fn fixture_network_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

/// Load the checked-in sample network (CDG, JFK, LAX, LHR, NRT).
#[allow(dead_code)]
pub fn fixture_network() -> FlightNetwork {
    load_network(&fixture_network_path()).expect("fixture network loads")
}

/// JFK, LHR and LAX without any routes.
#[allow(dead_code)]
pub fn transatlantic_airports() -> FlightNetwork {
    let mut network = FlightNetwork::new();
    for airport in [
        Airport::new("JFK", "John F. Kennedy International", "USA", 40.64, -73.78),
        Airport::new("LHR", "London Heathrow", "UK", 51.47, -0.45),
        Airport::new("LAX", "Los Angeles International", "USA", 33.94, -118.41),
    ] {
        assert!(network.add_airport(airport));
    }
    network
}

/// The scenario network: JFK->LHR at `direct_cost`, JFK->LAX 400, LAX->LHR 450.
#[allow(dead_code)]
pub fn transatlantic_network(direct_cost: f64) -> FlightNetwork {
    let mut network = transatlantic_airports();
    assert!(network.add_route("JFK", "LHR", direct_cost));
    assert!(network.add_route("JFK", "LAX", 400.0));
    assert!(network.add_route("LAX", "LHR", 450.0));
    network
}

/// Temporary directory for snapshot files, removed on drop.
#[allow(dead_code)]
pub struct SnapshotTestEnv {
    _temp_dir: TempDir,
    pub binary_path: PathBuf,
    pub json_path: PathBuf,
}

#[allow(dead_code)]
impl SnapshotTestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let binary_path = temp_dir.path().join("network.fnsn");
        let json_path = temp_dir.path().join("network.json");
        Self {
            _temp_dir: temp_dir,
            binary_path,
            json_path,
        }
    }

    /// Path to the temporary directory.
    pub fn temp_path(&self) -> &std::path::Path {
        self._temp_dir.path()
    }
}

impl Default for SnapshotTestEnv {
    fn default() -> Self {
        Self::new()
    }
}
