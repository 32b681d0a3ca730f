//! `route` subcommands: add, remove and list directed routes.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;

use flightnet_cli::output::{render_routes, render_status, OutputFormat};
use flightnet_lib::resolve_airport;

use super::{commit_network, open_network};

#[derive(Subcommand, Debug)]
pub enum RouteCommand {
    /// Add a directed route; distance and duration are derived from the
    /// airport coordinates.
    Add {
        /// Origin airport code.
        from: String,
        /// Destination airport code.
        to: String,
        /// Ticket cost.
        #[arg(long, allow_negative_numbers = true)]
        cost: f64,
    },
    /// Remove every route from FROM to TO.
    Remove {
        /// Origin airport code.
        from: String,
        /// Destination airport code.
        to: String,
    },
    /// List routes, optionally only those leaving one airport.
    List {
        /// Restrict the listing to routes leaving this airport.
        from: Option<String>,
    },
}

pub fn handle(network_path: &Path, format: OutputFormat, command: RouteCommand) -> Result<()> {
    match command {
        RouteCommand::Add { from, to, cost } => {
            let mut network = open_network(network_path)?;
            let from = resolve_airport(&network, from.trim())?;
            let to = resolve_airport(&network, to.trim())?;
            if !network.add_route(&from, &to, cost) {
                bail!("could not add route from {from} to {to}");
            }
            let added = network
                .routes_from(&from)
                .iter()
                .rev()
                .find(|route| route.to == to)
                .map(ToString::to_string)
                .unwrap_or_default();
            commit_network(&network, network_path)?;
            render_status(&format!("Added route {added}"), format)?;
        }
        RouteCommand::Remove { from, to } => {
            let mut network = open_network(network_path)?;
            let (from, to) = (from.trim(), to.trim());
            if !network.remove_route(from, to) {
                bail!("no route from {from} to {to}");
            }
            commit_network(&network, network_path)?;
            render_status(&format!("Removed routes {from} -> {to}"), format)?;
        }
        RouteCommand::List { from } => {
            let network = open_network(network_path)?;
            let mut routes: Vec<_> = match from {
                Some(code) => {
                    let code = resolve_airport(&network, code.trim())?;
                    network.routes_from(&code).iter().collect()
                }
                None => network.routes().collect(),
            };
            routes.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
            render_routes(&routes, format)?;
        }
    }
    Ok(())
}
