//! Approximate geolocation of the caller from their public IP address.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

use crate::{Config, http::fetch_text, model::Coordinates};

#[derive(Debug, Error, PartialEq)]
pub enum LocationParseError {
    #[error("expected \"lat,lon\", got {0:?}")]
    MissingSeparator(String),

    #[error("invalid coordinate {value:?}: {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("coordinates {lat},{lon} are out of range")]
    OutOfRange { lat: f64, lon: f64 },
}

/// Parses an ipinfo-style `"lat,lon"` body.
pub fn parse_coordinates(body: &str) -> Result<Coordinates, LocationParseError> {
    let body = body.trim();
    let (lat, lon) = body
        .split_once(',')
        .ok_or_else(|| LocationParseError::MissingSeparator(body.to_string()))?;

    let coords = Coordinates { lat: parse_number(lat)?, lon: parse_number(lon)? };

    if !coords.is_valid() {
        return Err(LocationParseError::OutOfRange { lat: coords.lat, lon: coords.lon });
    }

    Ok(coords)
}

fn parse_number(s: &str) -> Result<f64, LocationParseError> {
    let s = s.trim();
    s.parse::<f64>().map_err(|e| LocationParseError::InvalidNumber {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
pub trait LocationResolver: Send + Sync + Debug {
    async fn current_location(&self) -> Result<Coordinates>;
}

/// Resolves location through ipinfo.io's plain-text `/loc` endpoint.
#[derive(Debug, Clone)]
pub struct IpInfoResolver {
    url: String,
    http: Client,
}

impl IpInfoResolver {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: impl Into<String>, http: Client) -> Self {
        Self { url: url.into(), http }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.location_url.clone())
    }
}

#[async_trait]
impl LocationResolver for IpInfoResolver {
    async fn current_location(&self) -> Result<Coordinates> {
        debug!("Looking up location via {}", self.url);

        let body = fetch_text(self.http.get(&self.url), "ipinfo location lookup").await?;
        let coords = parse_coordinates(&body)
            .with_context(|| format!("Failed to parse location from {}", self.url))?;

        debug!("Resolved location: {}", coords);
        Ok(coords)
    }
}
