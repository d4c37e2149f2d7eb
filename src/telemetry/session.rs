use async_trait::async_trait;
use rumqttc::{
    AsyncClient, ConnectReturnCode, Event, EventLoop, MqttOptions, Outgoing, Packet, QoS,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::hooks::SessionHooks;
use super::TelemetrySession;
use crate::config::{Broker, Network};
use crate::error::AppError;

/// Broker session over rumqttc. The event loop is driven explicitly: `publish`
/// polls it until the outgoing packet is on the wire, and inbound traffic is
/// only dispatched when `service_inbound` is called.
pub struct MqttSession {
    network: Network,
    broker: Broker,
    hooks: Arc<dyn SessionHooks>,
    client: AsyncClient,
    eventloop: EventLoop,
}

impl MqttSession {
    /// Associates the network link, then opens the broker session. A failure
    /// here is fatal to the caller; there is no startup retry loop.
    pub async fn connect(
        network: &Network, broker: &Broker, hooks: Arc<dyn SessionHooks>,
    ) -> Result<Self, AppError> {
        info!(ssid = %network.ssid, "Associating with network...");
        let (client, eventloop) = Self::open(broker);
        let mut session =
            Self { network: network.clone(), broker: broker.clone(), hooks, client, eventloop };
        info!(host = %session.broker.host, "Connecting to broker...");
        session.wait_connack().await?;
        Ok(session)
    }

    fn open(broker: &Broker) -> (AsyncClient, EventLoop) {
        let mut options = MqttOptions::new(&broker.client_id, &broker.host, broker.port);
        options.set_credentials(&broker.username, &broker.key);
        options.set_keep_alive(Duration::from_secs(broker.keep_alive_secs));
        AsyncClient::new(options, 10)
    }

    async fn wait_connack(&mut self) -> Result<(), AppError> {
        loop {
            match self.eventloop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                    if ack.code == ConnectReturnCode::Success {
                        self.hooks.on_connect();
                        return Ok(());
                    }
                    return Err(AppError::TransportError(format!(
                        "Broker refused connection: {:?}",
                        ack.code
                    )));
                }
                Ok(_) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Polls the event loop until the queued publish has been written out.
    /// Inbound packets seen along the way are dropped, not dispatched.
    async fn drive_until_sent(&mut self) -> Result<(), AppError> {
        loop {
            match self.eventloop.poll().await {
                Ok(Event::Outgoing(Outgoing::Publish(_))) => return Ok(()),
                Ok(_) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Explicitly services the inbound event queue, dispatching each event to
    /// the hooks, and returns once the link has been idle for `budget` (so a
    /// steady inbound stream keeps it servicing). The sampling loop never
    /// calls this; it exists for owners that want the receive path alive.
    pub async fn service_inbound(&mut self, budget: Duration) -> Result<(), AppError> {
        while let Ok(polled) = tokio::time::timeout(budget, self.eventloop.poll()).await {
            match polled {
                Ok(event) => dispatch_event(&event, self.hooks.as_ref()),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TelemetrySession for MqttSession {
    async fn publish(&mut self, channel: &str, value: f64) -> Result<(), AppError> {
        self.client.publish(channel, QoS::AtMostOnce, false, value.to_string()).await?;
        self.drive_until_sent().await?;
        debug!(channel, value, "Published value.");
        Ok(())
    }

    async fn reset(&mut self) -> Result<(), AppError> {
        self.hooks.on_disconnect();
        info!(ssid = %self.network.ssid, "Resetting network session...");
        let (client, eventloop) = Self::open(&self.broker);
        self.client = client;
        self.eventloop = eventloop;
        self.wait_connack().await
    }
}

/// Maps raw client events onto the observer hooks.
pub fn dispatch_event(event: &Event, hooks: &dyn SessionHooks) {
    match event {
        Event::Incoming(Packet::ConnAck(_)) => hooks.on_connect(),
        Event::Incoming(Packet::Publish(publish)) => {
            hooks.on_message(&publish.topic, &String::from_utf8_lossy(&publish.payload))
        }
        Event::Incoming(Packet::SubAck(ack)) => hooks.on_subscribe(ack.pkid),
        Event::Incoming(Packet::UnsubAck(ack)) => hooks.on_unsubscribe(ack.pkid),
        Event::Incoming(Packet::Disconnect) => hooks.on_disconnect(),
        _ => {}
    }
}
