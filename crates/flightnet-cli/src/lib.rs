//! Flightnet CLI library.
//!
//! Terminal styling and output formatting shared by the `flightnet-cli`
//! subcommands.

pub mod output;
pub mod terminal;
