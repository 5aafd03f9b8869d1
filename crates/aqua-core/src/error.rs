//! Error types for the aquarium.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(
        "Invalid dimensions: {width}x{height} (allowed {min_width}x{min_height} to {max_width}x{max_height})"
    )]
    InvalidDimensions {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
        max_width: i32,
        max_height: i32,
    },

    #[error("Placement unavailable: {width}x{height} footprint at ({x}, {y}) is occupied")]
    PlacementUnavailable {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether the caller can retry with different input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::PlacementUnavailable { .. } | Error::UnknownSpecies(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
