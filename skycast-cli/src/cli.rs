use anyhow::Context;
use clap::{Parser, Subcommand};

use skycast_core::{
    capability::IpGeolocator, provider::provider_from_config, App, Config, FilePrefStore,
    RecentCities,
};

use crate::{render, session};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Terminal weather with a live clock")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and optional voice transcriber command.
    Configure,

    /// Show current weather for a city once and exit.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Show current weather for this device's location once and exit.
    Here,

    /// List recent searches.
    Recent,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => session::run().await,
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => {
                let mut app = build_app()?;
                app.search(&city).await;
                render::paint(&app);
                Ok(())
            }
            Some(Command::Here) => {
                let mut app = build_app()?;
                app.locate(&IpGeolocator::new()).await;
                render::paint(&app);
                Ok(())
            }
            Some(Command::Recent) => {
                let store = FilePrefStore::open()?;
                let recent = RecentCities::load(&store);
                if recent.is_empty() {
                    println!("No recent searches.");
                } else {
                    for (i, city) in recent.iter().enumerate() {
                        println!("{}. {city}", i + 1);
                    }
                }
                Ok(())
            }
        }
    }
}

/// Assemble the application core from config and the preference store.
pub fn build_app() -> anyhow::Result<App> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let store = FilePrefStore::open()?;
    Ok(App::new(provider, Box::new(store)))
}

/// Interactive configuration.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let voice = inquire::Text::new("Voice transcriber command (empty to disable):")
        .with_help_message("A command that prints one transcript line to stdout")
        .prompt()
        .context("Failed to read voice command")?;
    config.voice_command = if voice.trim().is_empty() {
        None
    } else {
        Some(voice.trim().to_string())
    };

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
