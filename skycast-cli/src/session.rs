//! Interactive session: one prompt loop driving the fetch/display cycle.

use std::io::Write;
use std::time::Duration;

use inquire::InquireError;

use skycast_core::{
    capability::{ExternalVoiceCapture, IpGeolocator},
    clock, App, Config, WeatherQuery,
};

use crate::{cli, render};

const HELP: &str = "\
Type a city name to look up the weather, or 1-5 for a recent search.
Commands:
  :here    weather for this device's location
  :voice   voice search (needs a configured transcriber)
  :unit    switch between °C and °F
  :theme   toggle dark/light
  :clock   watch the clock tick (Ctrl-C to stop)
  :help    this text
  :quit    exit";

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut app = cli::build_app()?;
    let geo = IpGeolocator::new();
    let voice = ExternalVoiceCapture::new(config.voice_command.clone());

    render::paint(&app);
    println!("{HELP}");

    loop {
        let line = match inquire::Text::new("skycast>").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };
        let input = line.trim();

        match input {
            "" => continue,
            ":quit" | ":q" => break,
            ":help" => {
                println!("{HELP}");
                continue;
            }
            ":unit" => app.toggle_unit().await,
            ":theme" => app.toggle_theme(&mut rand::thread_rng()),
            ":here" => app.locate(&geo).await,
            ":voice" => {
                if let Some(transcript) = app.voice_search(&voice).await {
                    println!("heard: {transcript}");
                }
            }
            ":clock" => {
                watch_clock(&app).await?;
                continue;
            }
            _ => {
                // Bare digits re-issue a recent search; anything else is a city.
                match recent_shortcut(&app, input) {
                    Some(city) => app.fetch(WeatherQuery::City(city)).await,
                    None => app.search(input).await,
                }
            }
        }

        render::paint(&app);
    }

    Ok(())
}

/// Resolve "1".."5" to the matching recent city, if any.
fn recent_shortcut(app: &App, input: &str) -> Option<String> {
    let n: usize = input.parse().ok()?;
    if n == 0 {
        return None;
    }
    app.recent().iter().nth(n - 1).map(str::to_string)
}

/// Tick the clock once a second until interrupted.
async fn watch_clock(app: &App) -> anyhow::Result<()> {
    println!("({}; Ctrl-C to stop)", app.clock_label());
    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let readout = clock::readout(app.clock().now());
                print!("\r{} — {}   ", readout.time, readout.date);
                std::io::stdout().flush()?;
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                return Ok(());
            }
        }
    }
}
