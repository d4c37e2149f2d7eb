use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Sensor error: {0}")]
    SensorError(String),
    #[error("Sensor bus error: {0}")]
    SensorBusError(#[from] reqwest::Error),
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Unknown error")]
    Unknown,
}

impl AppError {
    /// Transport faults are the only class the sampling loop recovers from.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::TransportError(_))
    }

    pub fn is_sensor(&self) -> bool {
        matches!(self, AppError::SensorError(_) | AppError::SensorBusError(_))
    }
}

impl From<rumqttc::ClientError> for AppError {
    fn from(e: rumqttc::ClientError) -> Self {
        AppError::TransportError(e.to_string())
    }
}

impl From<rumqttc::ConnectionError> for AppError {
    fn from(e: rumqttc::ConnectionError) -> Self {
        AppError::TransportError(e.to_string())
    }
}
