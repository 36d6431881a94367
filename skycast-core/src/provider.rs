use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    config::Config,
    error::SkycastError,
    model::{Unit, WeatherQuery, WeatherReport},
    provider::openweather::OpenWeatherProvider,
};

pub mod openweather;

/// One current-weather lookup per call; a single attempt, no retries.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &WeatherQuery, unit: Unit)
        -> Result<WeatherReport, SkycastError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key.as_deref().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `skycast configure` and enter your OpenWeatherMap API key."
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}
