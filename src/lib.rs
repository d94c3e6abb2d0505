//! Pet walk safety checks.
//!
//! Fetches current weather and air pollution for a coordinate, normalizes
//! them, classifies air quality and runs an ordered rule chain that yields
//! one walk recommendation.

pub mod cli;
pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod server;

pub use config::Config;
pub use error::{PetWalkError, Result};
pub use logic::{CheckResponse, WalkCheckService};
