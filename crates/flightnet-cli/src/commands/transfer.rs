//! `export` and `import` commands: copy the network between snapshot files.

use std::path::Path;

use anyhow::{Context, Result};

use flightnet_cli::output::{render_status, OutputFormat};
use flightnet_lib::{load_network, SnapshotFormat};

use super::{commit_network, open_network};

pub fn export(network_path: &Path, target: &Path, format: OutputFormat) -> Result<()> {
    let network = open_network(network_path)?;
    commit_network(&network, target)?;
    render_status(
        &format!(
            "Exported {} airport(s) and {} route(s) to {} ({})",
            network.airport_count(),
            network.route_count(),
            target.display(),
            describe(SnapshotFormat::from_path(target))
        ),
        format,
    )?;
    Ok(())
}

pub fn import(network_path: &Path, source: &Path, format: OutputFormat) -> Result<()> {
    let network = load_network(source)
        .with_context(|| format!("failed to import network from {}", source.display()))?;
    commit_network(&network, network_path)?;
    render_status(
        &format!(
            "Imported {} airport(s) and {} route(s) from {}",
            network.airport_count(),
            network.route_count(),
            source.display()
        ),
        format,
    )?;
    Ok(())
}

fn describe(format: SnapshotFormat) -> &'static str {
    match format {
        SnapshotFormat::Json => "json",
        SnapshotFormat::Binary => "binary",
    }
}
