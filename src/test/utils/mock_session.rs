use crate::error::AppError;
use crate::telemetry::TelemetrySession;
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub Session {}

    #[async_trait]
    impl TelemetrySession for Session {
        async fn publish(&mut self, channel: &str, value: f64) -> Result<(), AppError>;
        async fn reset(&mut self) -> Result<(), AppError>;
    }
}

/// Session that accepts any publish and is never reset.
pub fn set_session_ok() -> MockSession {
    let mut session = MockSession::new();
    session.expect_publish().times(0..).returning(|_, _| Ok(()));
    session.expect_reset().times(0);
    session
}
