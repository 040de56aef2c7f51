use anyhow::anyhow;
use clap::{Parser, Subcommand};
use zipcast_core::{AccuWeather, Config, WeatherError};

use crate::report;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "zipcast", version, about = "AccuWeather zip code lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the AccuWeather API key in the config file.
    Configure,

    /// Show current conditions and the 5-day forecast for a zip code.
    Lookup {
        /// Zip code to look up; prompted for interactively if absent.
        zipcode: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        // Bare `zipcast` behaves like `zipcast lookup` with the prompt.
        match self.command.unwrap_or(Command::Lookup { zipcode: None }) {
            Command::Configure => configure(),
            Command::Lookup { zipcode } => lookup(zipcode).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("AccuWeather API key:").prompt()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn lookup(zipcode: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.api_key().ok_or_else(|| {
        anyhow!(
            "No API key configured.\n\
             Hint: run `zipcast configure` and enter your AccuWeather API key."
        )
    })?;

    let zipcode = match zipcode {
        Some(zipcode) => zipcode,
        None => inquire::Text::new("Please input a zip code:").prompt()?,
    };

    let client = AccuWeather::new(api_key.to_owned());

    match print_report(&client, &zipcode).await {
        Ok(()) => Ok(()),
        Err(WeatherError::NoSuchLocation) => {
            println!("Unable to get the location");
            Ok(())
        }
        Err(err @ WeatherError::BadResponse(_)) => {
            tracing::debug!("discarded response: {err}");
            println!("Invalid response received. Please try again");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// The three sequential lookups: location key, then conditions, then forecast.
async fn print_report(client: &AccuWeather, zipcode: &str) -> Result<(), WeatherError> {
    let location_key = client.search_postal_code(zipcode).await?;

    let conditions = client.current_conditions(&location_key).await?;
    println!("{}", report::current_conditions(&conditions));

    let forecast = client.five_day_forecast(&location_key).await?;
    println!("{}", report::five_day(&forecast));

    Ok(())
}
