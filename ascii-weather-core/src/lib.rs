//! Core library for the `ascii-weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - IP geolocation and the OpenWeatherMap provider
//! - The condition-to-art rule table and the text layout next to it
//!
//! It is used by `ascii-weather-cli`, but can also be reused by other binaries.

pub mod art;
pub mod config;
mod http;
pub mod location;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod report;
pub mod scenario;

pub use art::Art;
pub use config::Config;
pub use location::{IpInfoResolver, LocationResolver};
pub use model::{ConditionCode, Coordinates, WeatherObservation};
pub use presenter::Rendered;
pub use provider::{WeatherProvider, provider_from_config};
pub use report::{WeatherReport, build_report, fetch_report};
pub use scenario::{SceneColor, Scenario};
