use std::fmt;

use anyhow::{Context as _, Result};

use crate::config::ConfigProvider;
use crate::dht::SensorReading;
use crate::http::HttpClient;

pub const API_BASE_URL_KEY: &str = "ApiBaseUrl";

pub const API_ENDPOINT_KEY: &str = "ApiEndpoint";

/// The API answered with a non-2xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsuccessfulStatus(pub u16);

impl fmt::Display for UnsuccessfulStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsuccessful HTTP status: {}", self.0)
    }
}

impl std::error::Error for UnsuccessfulStatus {}

/// Fetches DHT readings from the configured API.
#[derive(Debug, Clone)]
pub struct DhtService<H, C> {
    http_client: H,
    config: C,
}

impl<H: HttpClient, C: ConfigProvider> DhtService<H, C> {
    pub fn new(http_client: H, config: C) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// `{ApiBaseUrl}/{ApiEndpoint}`. Missing settings leave an empty
    /// segment; nothing is validated here.
    pub fn api_url(&self) -> String {
        let base_url = self.config.get(API_BASE_URL_KEY);
        let endpoint = self.config.get(API_ENDPOINT_KEY);

        format!("{base_url}/{endpoint}")
    }

    /// Fetches the current readings, degrading every failure to an empty
    /// list.
    ///
    /// Transport, body and decode failures are logged. An unsuccessful
    /// status is not.
    pub async fn fetch_readings(&self) -> Vec<SensorReading> {
        match self.try_fetch_readings().await {
            Ok(readings) => readings,
            Err(err) => {
                if !is_unsuccessful_status(&err) {
                    log::error!("failed to fetch DHT readings: {err:#}");
                }
                Vec::new()
            }
        }
    }

    /// Like [`fetch_readings`](Self::fetch_readings), but reports why no
    /// data came back. A non-2xx answer is an [`UnsuccessfulStatus`] error.
    pub async fn try_fetch_readings(&self) -> Result<Vec<SensorReading>> {
        let url = self.api_url();
        log::debug!("GET {url}");

        let response = self
            .http_client
            .get(&url)
            .await
            .with_context(|| format!("failed to request DHT readings: {url}"))?;

        if !response.is_success() {
            return Err(UnsuccessfulStatus(response.status).into());
        }

        let body = response.text()?;
        let readings = decode_readings(&body)?;
        log::debug!("decoded {} DHT readings from {url}", readings.len());

        Ok(readings)
    }
}

/// Decodes a JSON array of readings. A blank body or `null` is an empty list.
pub fn decode_readings(body: &str) -> Result<Vec<SensorReading>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let readings: Option<Vec<SensorReading>> =
        serde_json::from_str(body).context("failed to decode DHT readings")?;

    Ok(readings.unwrap_or_default())
}

pub fn is_unsuccessful_status(err: &anyhow::Error) -> bool {
    err.downcast_ref::<UnsuccessfulStatus>().is_some()
}
