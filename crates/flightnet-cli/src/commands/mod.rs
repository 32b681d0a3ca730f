// Each module handles one CLI subcommand; main.rs only parses and dispatches.

pub mod airport;
pub mod find;
pub mod route;
pub mod transfer;

use std::path::Path;

use anyhow::{Context, Result};

use flightnet_lib::{load_or_empty, save_network, FlightNetwork};

/// Load the working network, treating a missing file as an empty network.
pub(crate) fn open_network(path: &Path) -> Result<FlightNetwork> {
    load_or_empty(path).with_context(|| format!("failed to open network {}", path.display()))
}

/// Persist the working network after a mutation.
pub(crate) fn commit_network(network: &FlightNetwork, path: &Path) -> Result<()> {
    save_network(network, path)
        .with_context(|| format!("failed to save network to {}", path.display()))
}
