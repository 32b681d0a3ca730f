//! `find` command: plan a route between two airports.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use flightnet_cli::output::{render_summary, OutputFormat};
use flightnet_lib::{plan_route, PathMetric, RouteRequest, RouteSummary};

use super::open_network;

/// Quantity the search minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Sum of ticket costs.
    Cost,
    /// Sum of great-circle distances.
    Distance,
}

impl From<MetricArg> for PathMetric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Cost => PathMetric::Cost,
            MetricArg::Distance => PathMetric::Distance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FindArgs {
    pub from: String,
    pub to: String,
    pub metric: MetricArg,
    pub direct_only: bool,
}

impl FindArgs {
    fn to_request(&self) -> RouteRequest {
        let from = self.from.trim();
        let to = self.to.trim();
        let request = match self.metric {
            MetricArg::Cost => RouteRequest::cheapest(from, to),
            MetricArg::Distance => RouteRequest::shortest(from, to),
        };
        request.direct_only(self.direct_only)
    }
}

pub fn handle(network_path: &Path, format: OutputFormat, args: FindArgs) -> Result<()> {
    let network = open_network(network_path)?;
    let request = args.to_request();
    let plan = plan_route(&network, &request)?;
    let summary =
        RouteSummary::from_plan(&network, &plan).context("failed to summarise route")?;
    render_summary(&summary, format)?;
    Ok(())
}
