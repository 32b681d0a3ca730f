use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightnet_cli::output::OutputFormat;
use flightnet_lib::resolve_network_path;

mod commands;

use commands::airport::AirportCommand;
use commands::find::{FindArgs, MetricArg};
use commands::route::RouteCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight network editor and route finder")]
struct Cli {
    /// Network snapshot file to operate on (overrides FLIGHTNET_NETWORK).
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add, remove or list airports.
    #[command(subcommand)]
    Airport(AirportCommand),
    /// Add, remove or list routes.
    #[command(subcommand)]
    Route(RouteCommand),
    /// Find the best path between two airports.
    Find {
        /// Origin airport code.
        from: String,
        /// Destination airport code.
        to: String,
        /// Quantity to minimise.
        #[arg(long, value_enum, default_value_t = MetricArg::Cost)]
        metric: MetricArg,
        /// Only accept a single direct route.
        #[arg(long)]
        direct_only: bool,
    },
    /// Write the network to another snapshot file (`.json` or binary).
    Export {
        /// Destination file.
        path: PathBuf,
    },
    /// Replace the network with the contents of another snapshot file.
    Import {
        /// Source file.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network_path = resolve_network_path(cli.network.as_deref())?;
    let format = cli.format;

    match cli.command {
        Command::Airport(command) => commands::airport::handle(&network_path, format, command),
        Command::Route(command) => commands::route::handle(&network_path, format, command),
        Command::Find {
            from,
            to,
            metric,
            direct_only,
        } => commands::find::handle(
            &network_path,
            format,
            FindArgs {
                from,
                to,
                metric,
                direct_only,
            },
        ),
        Command::Export { path } => commands::transfer::export(&network_path, &path, format),
        Command::Import { path } => commands::transfer::import(&network_path, &path, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
