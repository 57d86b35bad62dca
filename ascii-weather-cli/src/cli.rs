use anyhow::{Context, bail};
use ascii_weather_core::{
    Config, IpInfoResolver, config::MAX_PADDING, fetch_report, provider_from_config,
};
use clap::{Parser, Subcommand};
use inquire::{CustomType, CustomUserError, Password, PasswordDisplayMode, validator::Validation};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "ascii-weather",
    version,
    about = "Current weather at your location, as colored ASCII art"
)]
pub struct Cli {
    /// Defaults to `show` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current weather for this machine's location.
    Show,

    /// Set the OpenWeatherMap API key and display settings.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Show) {
            Command::Show => show().await,
            Command::Configure => configure(),
        }
    }
}

async fn show() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let resolver = IpInfoResolver::from_config(&config);
    let provider = provider_from_config(&config)?;
    let now = chrono::Local::now();

    let report = fetch_report(&resolver, &*provider, &config, &now).await?;

    for line in report.rendered.colored_lines() {
        println!("{line}");
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    // Read the file alone so an OPENWEATHER_API_KEY override is not persisted.
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path).context("Failed to load existing configuration")?;

    let key = Password::new("OpenWeatherMap API key (leave empty to keep current):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let padding = CustomType::<usize>::new("Spaces between art and text:")
        .with_default(config.padding.chars().count())
        .with_validator(|n: &usize| {
            Ok::<_, CustomUserError>(if *n <= MAX_PADDING {
                Validation::Valid
            } else {
                Validation::Invalid(format!("At most {MAX_PADDING} spaces").into())
            })
        })
        .prompt()?;

    let threshold = CustomType::<f64>::new("High wind threshold (mph):")
        .with_default(config.high_wind_speed)
        .prompt()?;

    apply_answers(&mut config, &key, padding, threshold)?;
    config.validate()?;

    config.save_to(&path)?;
    debug!("Saved configuration to {}", path.display());
    println!("Configuration saved to {}", path.display());

    Ok(())
}

fn apply_answers(
    config: &mut Config,
    key: &str,
    padding: usize,
    threshold: f64,
) -> anyhow::Result<()> {
    if padding > MAX_PADDING {
        bail!("Invalid padding {padding}: at most {MAX_PADDING} spaces allowed");
    }

    let key = key.trim();
    if !key.is_empty() {
        config.set_api_key(key.to_string());
    }
    config.padding = " ".repeat(padding);
    config.high_wind_speed = threshold;
    Ok(())
}
