//! `airport` subcommands: add, remove and list airports.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;
use tracing::debug;

use flightnet_cli::output::{render_airports, render_status, OutputFormat};
use flightnet_lib::{resolve_airport, Airport, Error as LibError};

use super::{commit_network, open_network};

#[derive(Subcommand, Debug)]
pub enum AirportCommand {
    /// Add a new airport.
    Add {
        /// IATA-style code; trimmed and upper-cased before insertion.
        code: String,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Country the airport is in.
        #[arg(long)]
        country: String,
        /// Latitude in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Remove an airport together with every route touching it.
    Remove {
        /// Airport code.
        code: String,
    },
    /// List all airports sorted by code.
    List,
}

pub fn handle(network_path: &Path, format: OutputFormat, command: AirportCommand) -> Result<()> {
    match command {
        AirportCommand::Add {
            code,
            name,
            country,
            lat,
            lon,
        } => {
            let code = normalize_code(&code);
            if code.is_empty() {
                bail!("airport code must not be empty");
            }
            let mut network = open_network(network_path)?;
            let airport = Airport::new(code.clone(), name.trim(), country.trim(), lat, lon);
            let label = airport.to_string();
            if !network.add_airport(airport) {
                return Err(LibError::DuplicateAirport { code }.into());
            }
            commit_network(&network, network_path)?;
            render_status(&format!("Added airport {label}"), format)?;
        }
        AirportCommand::Remove { code } => {
            let mut network = open_network(network_path)?;
            let code = resolve_airport(&network, code.trim())?;
            let routes_before = network.route_count();
            network.remove_airport(&code);
            let dropped = routes_before - network.route_count();
            debug!(code = %code, dropped, "airport removed");
            commit_network(&network, network_path)?;
            render_status(
                &format!("Removed airport {code} and {dropped} route(s)"),
                format,
            )?;
        }
        AirportCommand::List => {
            let network = open_network(network_path)?;
            let mut airports: Vec<_> = network.airports().collect();
            airports.sort_by(|a, b| a.code.cmp(&b.code));
            render_airports(&airports, format)?;
        }
    }
    Ok(())
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_trimmed_and_upper_cased() {
        assert_eq!(normalize_code("  jfk "), "JFK");
        assert_eq!(normalize_code("Lhr"), "LHR");
        assert_eq!(normalize_code("   "), "");
    }
}
