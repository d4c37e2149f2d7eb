use plantwatch::config::{run_options::get_args, Config};
use plantwatch::display::{ConsoleDisplay, StatusDisplay};
use plantwatch::monitor::sampler::{run_monitor, PlantMonitor};
use plantwatch::sensors::interface::BridgeSensorHub;
use plantwatch::telemetry::hooks::LogHooks;
use plantwatch::telemetry::session::MqttSession;
use plantwatch::time::{RealTimeProvider, TimeProvider};
use plantwatch::utils::{start_log, stop_channel};
use std::{error::Error, sync::Arc};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    start_log::<RealTimeProvider>(None);

    info!("Starting plant monitor...");
    let cfg = Config::load(get_args());

    ConsoleDisplay.splash();

    let sensors = Arc::new(BridgeSensorHub::new(&cfg.sensor_bridge));
    let time_provider = Arc::new(RealTimeProvider::new());

    // Startup connection is fatal on failure: no retry loop here.
    let session = MqttSession::connect(&cfg.network, &cfg.broker, Arc::new(LogHooks)).await?;

    let (stop_tx, stop_rx) = stop_channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Stop requested.");
            let _ = stop_tx.send(true);
        }
    });

    let now = time_provider.now();
    let mut monitor =
        PlantMonitor::new(sensors, time_provider, Box::new(session), cfg.sampling, now);

    if let Err(e) = run_monitor(&mut monitor, stop_rx, None).await {
        error!(error = %e, "Monitor stopped on fatal error.");
        return Err(e.into());
    }
    Ok(())
}
