//! Core types and layout rules for the text-grid aquarium.

pub mod types;
pub mod config;
pub mod error;
pub mod geometry;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
