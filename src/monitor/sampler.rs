use super::ds::{CycleOutcome, Measurements, Reading};
use crate::{
    config::{Sampling, SensorFaultPolicy},
    error::AppError,
    sensors::interface::SensorHub,
    telemetry::{TelemetrySession, CHANNEL_MOISTURE, CHANNEL_SUNLIGHT, CHANNEL_TEMPERATURE},
    time::TimeProvider,
    utils::format_uptime,
};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// The orchestrator. Owns its collaborators for the process lifetime; there
/// is exactly one live cycle at a time and no queue of pending publishes.
pub struct PlantMonitor {
    pub sensors: Arc<dyn SensorHub>,
    pub time_provider: Arc<dyn TimeProvider>,
    pub session: Box<dyn TelemetrySession>,
    pub cfg: Sampling,
    /// Start time of the last successful cycle. Not advanced on failure, so
    /// the next poll re-enters the cycle immediately.
    pub last_updated: i64,
}

impl PlantMonitor {
    pub fn new(
        sensors: Arc<dyn SensorHub>, time_provider: Arc<dyn TimeProvider>,
        session: Box<dyn TelemetrySession>, cfg: Sampling, start_time: i64,
    ) -> Self {
        // Backdated by one interval so the first poll samples immediately.
        let last_updated = start_time - cfg.interval_secs;
        Self { sensors, time_provider, session, cfg, last_updated }
    }

    /// One poll of the loop: stay idle until the interval has elapsed, then
    /// run a full cycle. Only transport faults (and sensor faults under the
    /// `skip` policy) are recovered here; anything else propagates.
    pub async fn tick(&mut self, now: i64) -> Result<CycleOutcome, AppError> {
        if now - self.last_updated < self.cfg.interval_secs {
            trace!("Interval not elapsed; staying idle.");
            return Ok(CycleOutcome::Idle);
        }

        match self.run_cycle(now).await {
            Ok(()) => {
                self.last_updated = now;
                Ok(CycleOutcome::Published)
            }
            Err(e) if e.is_transport() => {
                warn!(error = %e, "Failed to post data, retrying...");
                self.session.reset().await?;
                Ok(CycleOutcome::TransportFault)
            }
            Err(e) if e.is_sensor() && self.cfg.sensor_fault_policy == SensorFaultPolicy::Skip => {
                warn!(error = %e, "Sensor read failed; skipping cycle.");
                Ok(CycleOutcome::SensorFault)
            }
            Err(e) => Err(e),
        }
    }

    /// Sample, convert, publish, in channel order. Any not-yet-sent channels
    /// are lost when a publish fails; the data point is not queued.
    async fn run_cycle(&mut self, now: i64) -> Result<(), AppError> {
        info!(uptime = %format_uptime(now), "Taking measurements...");
        let reading = Reading {
            lux: self.sensors.read_lux().await?,
            moisture_raw: self.sensors.read_moisture_raw().await?,
            temperature_c: self.sensors.read_temperature_c().await?,
        };
        let measurements = Measurements::from_reading(&reading);
        debug!(
            sunlight = format!("{:.2}", measurements.sunlight),
            moisture = format!("{:.2}", measurements.moisture),
            temperature = format!("{:.2}", measurements.temperature),
            "Converted measurements.",
        );

        info!("Sending data...");
        self.session.publish(CHANNEL_SUNLIGHT, measurements.sunlight).await?;
        self.session.publish(CHANNEL_MOISTURE, measurements.moisture).await?;
        self.session.publish(CHANNEL_TEMPERATURE, measurements.temperature).await?;
        info!("Measurement data sent.");
        Ok(())
    }
}

/// Drives the monitor until the stop signal fires or `end_time` (simulation
/// only) is reached. A fatal error ends the loop and propagates.
pub async fn run_monitor(
    monitor: &mut PlantMonitor,
    stop_signal: tokio::sync::watch::Receiver<bool>,
    end_time: Option<i64>,
) -> Result<(), AppError> {
    let mut now = monitor.time_provider.now();
    while end_time.map_or(true, |end| now < end) && !*stop_signal.borrow() {
        now = monitor.time_provider.now();

        monitor.tick(now).await?;

        monitor.time_provider.advance_time(1).await;
    }
    info!("Ending plant monitor.");
    Ok(())
}
