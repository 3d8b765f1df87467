//! Core library for the Macau weather MCP server.
//!
//! This crate defines:
//! - Upstream SMG endpoint configuration
//! - Fetching and parsing of the three SMG XML documents
//! - Formatting of parsed records into assistant-facing text
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod model;
pub mod parse;
pub mod service;

pub use config::Endpoints;
pub use error::{FetchError, ParseError, WeatherError};
pub use model::{CurrentReading, DailyForecast, SevenDayForecast, TodayForecast};
pub use service::WeatherService;
