mod args;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use home_readings::{
    config::{API_CONFIG_ENV_PREFIX, EnvConfig, JsonConfig, LayeredConfig, MapConfig},
    dht::{API_BASE_URL_KEY, API_ENDPOINT_KEY, DhtService, SensorReading},
    http::ReqwestClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let config = build_config(&args).context("failed to load configuration")?;
    let http_client = ReqwestClient::with_timeout(Duration::from_secs(args.timeout_secs))
        .context("failed to initialize HTTP client")?;

    let service = DhtService::new(http_client, config);
    log::info!("fetching DHT readings from {}", service.api_url());

    let readings = service.fetch_readings().await;

    if args.json {
        let json =
            serde_json::to_string_pretty(&readings).context("failed to serialize readings")?;
        println!("{json}");
        return Ok(());
    }

    for reading in &readings {
        print_reading(reading, &args);
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::new();

    if let Some(path) = &args.config {
        config.push(JsonConfig::from_path(path)?);
    }

    config.push(EnvConfig::new(API_CONFIG_ENV_PREFIX));

    let mut overrides = MapConfig::new();
    if let Some(base_url) = &args.base_url {
        overrides.insert(API_BASE_URL_KEY, base_url);
    }
    if let Some(endpoint) = &args.endpoint {
        overrides.insert(API_ENDPOINT_KEY, endpoint);
    }
    config.push(overrides);

    Ok(config)
}

fn print_reading(reading: &SensorReading, args: &Args) {
    let id = reading.id.as_deref().unwrap_or("-");

    let measured_at = match reading.measured_at(args.timezone) {
        Ok(dt) => dt,
        Err(err) => {
            eprintln!("skipping reading {id}: {err:#}");
            return;
        }
    };

    println!(
        "{id} {} {}°C {}%",
        measured_at.to_rfc3339(),
        reading.temperature,
        reading.humidity
    );
}
