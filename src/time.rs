use async_trait::async_trait;
use std::{
    any::Any,
    fmt::Debug,
    time::{Duration, Instant},
};

#[async_trait]
pub trait TimeProvider: Send + Sync + Debug {
    fn now(&self) -> i64; // Seconds on a monotonically increasing clock
    fn as_any(&self) -> &dyn Any;
    async fn sleep(&self, duration: Duration);
    async fn advance_time(&self, seconds: i64);
    fn set(&self, new_time: i64);
}

/// Monotonic wall-clock provider. `now` is seconds since process start, so the
/// interval check is immune to system clock adjustments.
#[derive(Debug)]
pub struct RealTimeProvider {
    started: Instant,
}

impl RealTimeProvider {
    pub fn new() -> Self {
        Self { started: Instant::now() }
    }
}

impl Default for RealTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeProvider for RealTimeProvider {
    fn now(&self) -> i64 {
        self.started.elapsed().as_secs() as i64
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    async fn advance_time(&self, _seconds: i64) {
        self.sleep(Duration::from_secs(1)).await;
    }

    fn set(&self, _new_time: i64) {}
}
