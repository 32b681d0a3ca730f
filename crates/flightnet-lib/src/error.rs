use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flight network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an airport code could not be found in the network.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when inserting an airport whose code is already taken.
    #[error("airport {code} already exists")]
    DuplicateAirport { code: String },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any legs.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a decoded snapshot does not describe a consistent network.
    #[error("invalid network snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// Raised when serializing a snapshot fails.
    #[error("failed to encode network snapshot: {message}")]
    SnapshotEncode { message: String },

    /// Raised when deserializing a snapshot from bytes fails.
    #[error("failed to decode network snapshot: {message}")]
    SnapshotDecode { message: String },

    /// Raised when reading a snapshot file fails.
    #[error("failed to load network from {path}: {message}")]
    SnapshotLoad { path: PathBuf, message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the network file")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
