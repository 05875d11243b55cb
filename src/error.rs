//! Error types for the settings synchronization engine
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Codecs are total and never produce errors; only store I/O does.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// IO error (reading or writing the persisted store)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// No usable data directory for the persisted store
    #[snafu(display("Could not resolve a data directory for the settings file"))]
    NoDataDir,
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
