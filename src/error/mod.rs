//! Error types and handling for the roulette simulator
//!
//! All fallible operations in the crate return [`Result`]. Errors are never
//! retried: an invalid bet or a bad configuration terminates the simulation
//! with a nonzero exit, and lookup failures surface at strategy-construction
//! time rather than mid-session.

use thiserror::Error;

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Simulator error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The pending bets on the table exceed its limit. Treated as a
    /// strategy/configuration defect, not a runtime event to smooth over.
    #[error("invalid bet: {0}")]
    InvalidBet(String),

    /// An outcome name was requested that the wheel never registered.
    #[error("unknown outcome: {0}")]
    UnknownOutcome(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("RNG error: {0}")]
    Rng(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(format!("TOML parse error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON error: {}", err))
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::Rng(err.to_string())
    }
}
