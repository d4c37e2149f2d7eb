pub mod hooks;
pub mod session;

use async_trait::async_trait;

use crate::error::AppError;

/// Feed names on the broker, bound 1:1 to the converted measurements and
/// static for the process lifetime.
pub const CHANNEL_SUNLIGHT: &str = "sun";
pub const CHANNEL_MOISTURE: &str = "spruce.moisture";
pub const CHANNEL_TEMPERATURE: &str = "spruce.temperature";

/// Broker session owned by the sampling loop. Connection state is binary;
/// recovery from a publish fault is always the full `reset`.
#[async_trait]
pub trait TelemetrySession: Send {
    /// Sends one value to one named channel. May raise a transport error.
    async fn publish(&mut self, channel: &str, value: f64) -> Result<(), AppError>;

    /// Tears down and re-establishes the link. Used only as recovery after a
    /// failed publish mid-cycle.
    async fn reset(&mut self) -> Result<(), AppError>;
}
