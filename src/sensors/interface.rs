use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::SensorBridge;
use crate::error::AppError;

/// One blocking hardware transaction per call. No retries, no caching, no
/// averaging across samples; fault handling is the caller's concern.
#[async_trait]
pub trait SensorHub: Send + Sync {
    async fn read_lux(&self) -> Result<f64, AppError>;
    async fn read_moisture_raw(&self) -> Result<u16, AppError>;
    async fn read_temperature_c(&self) -> Result<f64, AppError>;
}

#[derive(Debug, Deserialize)]
struct BridgeValue<T> {
    value: T,
}

/// Decodes one `{"value": ...}` bridge body.
fn parse_bridge_value<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let body: BridgeValue<T> = serde_json::from_slice(bytes)
        .map_err(|e| AppError::SensorError(format!("Malformed sensor bridge body: {}", e)))?;
    Ok(body.value)
}

/// Reads the soil and light sensors through the HTTP bridge that fronts the
/// I2C bus. Each endpoint answers `{"value": ...}` for a single transaction.
pub struct BridgeSensorHub {
    address: String,
    client: reqwest::Client,
}

impl BridgeSensorHub {
    pub fn new(cfg: &SensorBridge) -> Self {
        Self { address: cfg.address.clone(), client: reqwest::Client::new() }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}/{}", self.address, path);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::SensorError(format!(
                "Sensor bridge returned {} for {}",
                response.status(),
                path
            )));
        }
        let bytes = response.bytes().await?;
        let value = parse_bridge_value(&bytes)?;
        debug!(path, "Sensor transaction completed.");
        Ok(value)
    }
}

#[async_trait]
impl SensorHub for BridgeSensorHub {
    async fn read_lux(&self) -> Result<f64, AppError> {
        self.fetch("light/lux").await
    }

    async fn read_moisture_raw(&self) -> Result<u16, AppError> {
        self.fetch("soil/moisture").await
    }

    async fn read_temperature_c(&self) -> Result<f64, AppError> {
        self.fetch("soil/temperature").await
    }
}
