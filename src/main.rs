use anyhow::Context;
use clap::Parser;
use petwalk::cli::{Cli, Commands};
use petwalk::config::Config;
use petwalk::datasources::OpenWeatherMapClient;
use petwalk::logic::{CheckResponse, RulesEngine, WalkCheckService};
use petwalk::server::{self, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Rules) = cli.command {
        for (priority, (id, name)) in RulesEngine::new().list_rules().into_iter().enumerate() {
            println!("{}. {:<20} {}", priority + 1, id, name);
        }
        return Ok(());
    }

    // Missing credentials are fatal at startup
    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Copy config/config.yaml.example to config/config.yaml or set OPENWEATHER_API_KEY");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let client = OpenWeatherMapClient::new(config.openweathermap.clone())
        .context("Failed to build OpenWeatherMap client")?;
    let walk_check = WalkCheckService::new(Arc::new(client));

    match cli.command {
        Some(Commands::Check { lat, lon, summary }) => {
            let output = if summary {
                serde_json::to_string_pretty(&CheckResponse::from_result(
                    walk_check.check_weather_summary(lat, lon).await,
                ))?
            } else {
                serde_json::to_string_pretty(&CheckResponse::from_result(
                    walk_check.check_weather(lat, lon).await,
                ))?
            };
            println!("{}", output);
        }
        Some(Commands::Serve) | None => {
            server::serve(AppState::new(walk_check), &config.server)
                .await
                .context("HTTP server failed")?;
        }
        // Handled before configuration is loaded
        Some(Commands::Rules) => {}
    }

    Ok(())
}
