//! Exploratory analysis of the wine-quality dataset.
//!
//! The crate loads the red and white sample tables, computes descriptive
//! statistics and correlations, and renders a fixed set of PNG charts.
//! [`extract`] unpacks the downloaded archive into the data directory.

pub mod analysis;
pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod extract;
pub mod plot;
pub mod stats;

pub use config::Config;
pub use error::{EdaError, Result};
