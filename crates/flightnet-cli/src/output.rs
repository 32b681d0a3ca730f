//! Output formatting for listings, route summaries and confirmations.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightnet_lib::{Airport, Route, RouteRenderMode, RouteSummary};

use crate::terminal::{format_with_separators, ColorPalette};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain aligned text.
    #[default]
    Text,
    /// Markdown tables and headings.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Serialize)]
struct StatusMessage<'a> {
    ok: bool,
    message: &'a str,
}

/// Write any serializable value to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Report the outcome of a mutation.
pub fn render_status(message: &str, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => render_json(&StatusMessage { ok: true, message }),
        OutputFormat::Text | OutputFormat::Rich => {
            let p = ColorPalette::detect();
            println!("{}{}{}", p.green, message, p.reset);
            Ok(())
        }
    }
}

/// Render a route summary.
pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => render_json(summary),
        OutputFormat::Text => {
            print!("{}", summary.render(RouteRenderMode::PlainText));
            Ok(())
        }
        OutputFormat::Rich => {
            print!("{}", summary.render(RouteRenderMode::RichText));
            Ok(())
        }
    }
}

/// Render airports in the order given.
pub fn render_airports(airports: &[&Airport], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => render_json(airports),
        OutputFormat::Text => {
            if airports.is_empty() {
                println!("No airports.");
                return Ok(());
            }
            let p = ColorPalette::detect();
            for airport in airports {
                println!(
                    "{}{}{} {} ({}) {}[{:.4}, {:.4}]{}",
                    p.white_bold,
                    airport.code,
                    p.reset,
                    airport.name,
                    airport.country,
                    p.gray,
                    airport.latitude,
                    airport.longitude,
                    p.reset
                );
            }
            Ok(())
        }
        OutputFormat::Rich => {
            println!("| Code | Name | Country | Latitude | Longitude |");
            println!("|------|------|---------|----------|-----------|");
            for airport in airports {
                println!(
                    "| **{}** | {} | {} | {:.4} | {:.4} |",
                    airport.code, airport.name, airport.country, airport.latitude, airport.longitude
                );
            }
            Ok(())
        }
    }
}

/// Render routes in the order given.
pub fn render_routes(routes: &[&Route], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => render_json(routes),
        OutputFormat::Text => {
            if routes.is_empty() {
                println!("No routes.");
                return Ok(());
            }
            let p = ColorPalette::detect();
            for route in routes {
                println!(
                    "{}{} -> {}{} | ${:.2} | {} km | {:.1} h",
                    p.white_bold,
                    route.from,
                    route.to,
                    p.reset,
                    route.cost,
                    format_with_separators(route.distance.round() as u64),
                    route.duration
                );
            }
            Ok(())
        }
        OutputFormat::Rich => {
            println!("| From | To | Cost | Distance (km) | Duration (h) |");
            println!("|------|----|------|---------------|--------------|");
            for route in routes {
                println!(
                    "| {} | {} | ${:.2} | {:.1} | {:.1} |",
                    route.from, route.to, route.cost, route.distance, route.duration
                );
            }
            Ok(())
        }
    }
}
