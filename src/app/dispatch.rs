use crate::cli::commands::{Cli, Commands};
use anyhow::Result;
use std::sync::Arc;
use tenki::Config;
use tenki::fulfillment::SpeechTemplates;
use tenki::fulfillment::welcome::{SpeechClock, compose_welcome};
use tenki::weather::{WeatherClient, WeatherSource};
use tracing::info;

async fn run_weather(config: &Config, location: Option<String>) -> Result<()> {
    let location = location.unwrap_or_else(|| config.weather.location_id.trim().to_string());
    let client = WeatherClient::from_config(&config.weather);
    let templates = SpeechTemplates::from_config(&config.speech)?;
    let clock = SpeechClock::new(config.speech.utc_offset_minutes);

    info!(endpoint = client.endpoint(), %location, "fetching current weather");
    let weather = client.fetch_weather(&location).await?;
    let reply = compose_welcome(&templates, &weather, clock.now())?;
    println!("{}", reply.speech);
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let config = Arc::new(config);

    match cli.command {
        Commands::Gateway { port, host } => {
            let port = port.unwrap_or(config.gateway.port);
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            if port == 0 {
                info!("Starting tenki gateway on {host} (random port)");
            } else {
                info!("Starting tenki gateway on {host}:{port}");
            }
            tenki::gateway::run_gateway(&host, port, Arc::clone(&config)).await
        }

        Commands::Weather { location } => run_weather(&config, location).await,
    }
}
