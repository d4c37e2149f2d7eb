use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use crate::test::utils::mock_time::MockTimeFormatter;
use crate::time::TimeProvider;

/// Initializes the tracing subscriber. Passing a time provider makes log
/// timestamps follow it, which keeps simulated-time test output readable.
pub fn start_log<T: TimeProvider + 'static>(time_provider: Option<Arc<T>>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match time_provider {
        Some(tp) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(MockTimeFormatter { time_provider: tp })
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

pub fn stop_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Formats monotonic seconds as HH:MM:SS for cycle logs.
pub fn format_uptime(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
