pub mod mock_sensors;
pub mod mock_session;
pub mod mock_time;

use crate::{
    config::Sampling,
    monitor::sampler::PlantMonitor,
    telemetry::TelemetrySession,
};
use mock_sensors::{set_sensor_hub, MockSensorHub};
use mock_session::set_session_ok;
use mock_time::MockTimeProvider;
use std::sync::Arc;

/// Monitor wired to a fixed-reading hub, an always-accepting session, and a
/// mock clock starting at `start_time`. First cycle is due immediately.
pub fn set_monitor(start_time: i64) -> (PlantMonitor, Arc<MockTimeProvider>) {
    let time_provider = Arc::new(MockTimeProvider::new(start_time));
    let monitor = PlantMonitor::new(
        set_sensor_hub(500.0, 1000, 22.0),
        time_provider.clone(),
        Box::new(set_session_ok()),
        Sampling::default(),
        start_time,
    );
    (monitor, time_provider)
}

/// Same as `set_monitor` but with a caller-supplied session, for publish
/// expectations.
pub fn set_monitor_with_session(
    start_time: i64, session: Box<dyn TelemetrySession>,
) -> (PlantMonitor, Arc<MockTimeProvider>) {
    set_monitor_full(start_time, set_sensor_hub(500.0, 1000, 22.0), session, Sampling::default())
}

pub fn set_monitor_full(
    start_time: i64, sensors: Arc<MockSensorHub>, session: Box<dyn TelemetrySession>, cfg: Sampling,
) -> (PlantMonitor, Arc<MockTimeProvider>) {
    let time_provider = Arc::new(MockTimeProvider::new(start_time));
    let monitor = PlantMonitor::new(sensors, time_provider.clone(), session, cfg, start_time);
    (monitor, time_provider)
}
