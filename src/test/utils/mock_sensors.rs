use crate::error::AppError;
use crate::sensors::interface::SensorHub;
use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;

mock! {
    pub SensorHub {}

    #[async_trait]
    impl SensorHub for SensorHub {
        async fn read_lux(&self) -> Result<f64, AppError>;
        async fn read_moisture_raw(&self) -> Result<u16, AppError>;
        async fn read_temperature_c(&self) -> Result<f64, AppError>;
    }
}

/// Hub returning the same reading on every cycle.
pub fn set_sensor_hub(lux: f64, moisture_raw: u16, temperature_c: f64) -> Arc<MockSensorHub> {
    let mut hub = MockSensorHub::new();
    hub.expect_read_lux().times(0..).returning(move || Ok(lux));
    hub.expect_read_moisture_raw().times(0..).returning(move || Ok(moisture_raw));
    hub.expect_read_temperature_c().times(0..).returning(move || Ok(temperature_c));
    Arc::new(hub)
}

/// Hub whose first transaction fails, as a dead bus would.
pub fn set_failing_sensor_hub() -> Arc<MockSensorHub> {
    let mut hub = MockSensorHub::new();
    hub.expect_read_lux()
        .times(0..)
        .returning(|| Err(AppError::SensorError("i2c bus not responding".to_owned())));
    hub.expect_read_moisture_raw().times(0..).returning(|| Ok(1000));
    hub.expect_read_temperature_c().times(0..).returning(|| Ok(22.0));
    Arc::new(hub)
}
