use anyhow::Result;
use chrono::{DateTime, TimeZone, Timelike};
use tracing::{debug, info};

use crate::{
    Config,
    location::LocationResolver,
    model::WeatherObservation,
    presenter::{self, Rendered},
    provider::WeatherProvider,
    scenario::{self, Scenario},
};

/// Everything produced by one run.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub observation: WeatherObservation,
    pub scenario: Scenario,
    pub rendered: Rendered,
}

/// Classifies and renders an observation taken at local time `now`.
pub fn build_report<Tz: TimeZone>(
    observation: WeatherObservation,
    config: &Config,
    now: &DateTime<Tz>,
) -> WeatherReport
where
    Tz::Offset: std::fmt::Display,
{
    let scenario = scenario::classify(
        observation.condition_code,
        observation.wind_speed_mph,
        now.hour(),
        config.high_wind_speed,
    );
    debug!("Selected scenario: {} / {}", scenario.art, scenario.color);

    let rendered = presenter::render(
        &observation,
        scenario,
        now,
        config.text_width,
        &config.padding,
    );

    WeatherReport { observation, scenario, rendered }
}

/// Looks up the location, fetches the weather for it and renders the result.
/// The two lookups run one after the other; any failure aborts the run.
pub async fn fetch_report<Tz: TimeZone>(
    resolver: &dyn LocationResolver,
    provider: &dyn WeatherProvider,
    config: &Config,
    now: &DateTime<Tz>,
) -> Result<WeatherReport>
where
    Tz::Offset: std::fmt::Display,
{
    let coords = resolver.current_location().await?;
    info!("Current location: {}", coords);

    let observation = provider.current_weather(coords).await?;

    Ok(build_report(observation, config, now))
}
