use tracing::info;

/// Observer hooks on the broker session, mirroring the client's registered
/// callbacks. Nothing dispatches `on_message` unless the owner explicitly
/// services the inbound queue.
pub trait SessionHooks: Send + Sync {
    fn on_connect(&self) {}
    fn on_disconnect(&self) {}
    fn on_subscribe(&self, _pkid: u16) {}
    fn on_unsubscribe(&self, _pkid: u16) {}
    fn on_message(&self, _channel: &str, _payload: &str) {}
}

#[derive(Debug, Default)]
pub struct LogHooks;

impl SessionHooks for LogHooks {
    fn on_connect(&self) {
        info!("Connected to broker.");
    }

    fn on_disconnect(&self) {
        info!("Disconnected from broker.");
    }

    fn on_subscribe(&self, pkid: u16) {
        info!(pkid, "Subscription acknowledged.");
    }

    fn on_unsubscribe(&self, pkid: u16) {
        info!(pkid, "Unsubscription acknowledged.");
    }

    fn on_message(&self, channel: &str, payload: &str) {
        info!(channel, payload, "Channel received new value.");
    }
}
